use tracing_subscriber::filter::{Directive, EnvFilter, LevelFilter};
use tracing_subscriber::fmt::format;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;

/// Custom logger initialization to exclude timestamps but keep colors.
/// This provides cleaner logs by removing the timestamp prefix.
///
/// Use ATLAS_LOG=debug (or `--debug`) to see every charset and command.
/// RUST_LOG directives still apply on top of the default level.
pub fn init_custom_logger(debug: bool) {
    // Empty time formatter that doesn't print anything
    struct EmptyTime;
    impl FormatTime for EmptyTime {
        fn format_time(
            &self,
            _: &mut tracing_subscriber::fmt::format::Writer<'_>,
        ) -> std::fmt::Result {
            Ok(())
        }
    }

    let default_level = if debug {
        "debug".to_string()
    } else {
        std::env::var("ATLAS_LOG").unwrap_or_else(|_| "info".to_string())
    };
    let default_directive: Directive = default_level
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());

    let format = format()
        .with_timer(EmptyTime)
        .with_level(true)
        .with_target(true)
        .with_ansi(true); // Keep colors

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr)
                .with_filter(
                    EnvFilter::from_default_env()
                        .add_directive(default_directive),
                ),
        )
        .init();
}
