//! Utilities and Helper Functions
//!
//! This module contains utility functions and helper modules:
//! - Logging configuration and setup

pub mod logger;
