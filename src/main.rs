// Builds MSDF font atlases for a tree of font directories.

use std::process::ExitCode;
use tracing::error;

use atlas_builder::core::errors::{validate_root_path, AtlasResult};
use atlas_builder::utils::logger::init_custom_logger;
use atlas_builder::{build_atlases, BuildConfig, CliArgs, MsdfAtlasGen};

fn main() -> ExitCode {
    let args = CliArgs::parse_args();
    init_custom_logger(args.debug);

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> AtlasResult<ExitCode> {
    let config = BuildConfig::from_cli(args);
    validate_root_path(&config.root_path)?;

    let generator = MsdfAtlasGen::from_config(&config);
    let report = build_atlases(&config, &generator)?;
    report.log_summary();

    if let Some(path) = &args.report {
        report.write_json(path)?;
    }

    if args.strict && report.has_failures() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
