//! Derani CLI library
//!
//! Command-line batch conversion of Derani-script localization datasets
//! to their Latin transcription.

pub mod commands;
pub mod dataset;
pub mod error;

pub use error::{CliError, CliResult};
