//! Validate command implementation

use clap::Args;
use std::path::PathBuf;

use derani_core::Transliterator;

use crate::dataset;
use crate::error::CliResult;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Source-script dataset to check
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        super::convert::init_logging(self.quiet, self.verbose);

        println!("Validating dataset: {}", self.input.display());

        let entries = dataset::read_dataset(&self.input)?;
        let transliterator = Transliterator::new();

        let mut failures = 0usize;
        for (key, text) in &entries {
            if let Err(error) = transliterator.decode_document(text, None) {
                println!("✗ {key}: {error}");
                failures += 1;
            }
        }

        if failures == 0 {
            println!("✓ All {} entries decode cleanly", entries.len());
            Ok(())
        } else {
            Err(anyhow::anyhow!(
                "{failures} of {} entries failed to decode",
                entries.len()
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: PathBuf) -> ValidateArgs {
        ValidateArgs {
            input,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_validate_clean_dataset() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("lang.json");
        fs::write(
            &input,
            "{\"a\": \"\u{F16B7}\u{F16C3}\u{F16D5}\", \"b\": \"plain\"}",
        )
        .unwrap();

        assert!(args(input).execute().is_ok());
    }

    #[test]
    fn test_validate_reports_failures() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("lang.json");
        fs::write(&input, "{\"bad\": \"\u{F16C7}\"}").unwrap();

        let error = args(input).execute().unwrap_err().to_string();
        assert!(error.contains("1 of 1"));
    }
}
