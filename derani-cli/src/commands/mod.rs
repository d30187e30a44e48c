//! CLI command implementations

use clap::Subcommand;

pub mod convert;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a source-script dataset to its Latin transcription
    Convert(convert::ConvertArgs),

    /// Check that every entry of a dataset decodes cleanly
    Validate(validate::ValidateArgs),
}
