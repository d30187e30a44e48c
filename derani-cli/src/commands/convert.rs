//! Convert command implementation

use clap::Args;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use derani_core::{RenderConfig, Transliterator, LANGUAGE_CODE_KEY, LATIN_LANGUAGE_CODE};

use crate::dataset::{self, Dataset};
use crate::error::{CliError, CliResult};

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Source-script dataset (JSON object of key to script string)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Reference-language dataset used for capitalization inference
    #[arg(short, long, value_name = "FILE")]
    pub reference: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Literal separator emitted at morpheme-boundary glyphs
    /// (default: retroactive under-dot marking)
    #[arg(long, value_name = "STRING")]
    pub separator: Option<String>,

    /// Replacement text for the semivowel letter ꝡ
    #[arg(long, value_name = "STRING")]
    pub semivowel: Option<String>,

    /// Leave the first sentence lowercase when a message has no
    /// reference entry
    #[arg(long)]
    pub no_capitalize_default: bool,

    /// Skip messages that fail to decode instead of aborting
    #[arg(long)]
    pub skip_errors: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.quiet, self.verbose);

        log::info!("Converting dataset: {}", self.input.display());

        let entries = dataset::read_dataset(&self.input)?;
        let reference: HashMap<String, String> = match &self.reference {
            Some(path) => dataset::read_dataset(path)?.into_iter().collect(),
            None => HashMap::new(),
        };

        let transliterator = Transliterator::with_config(self.render_config());

        // Messages are independent; convert them in parallel, order
        // restored by the indexed collect.
        let converted: Vec<_> = entries
            .par_iter()
            .map(|(key, text)| {
                let result =
                    transliterator.decode_document(text, reference.get(key).map(String::as_str));
                (key, result)
            })
            .collect();

        let mut output: Dataset = Vec::with_capacity(converted.len() + 1);
        for (key, result) in converted {
            match result {
                Ok(latin) => output.push((key.clone(), latin)),
                Err(error) if self.skip_errors => {
                    log::warn!("Skipping '{key}': {error}");
                }
                Err(error) => {
                    return Err(CliError::DecodeFailed {
                        key: key.clone(),
                        message: error.to_string(),
                    }
                    .into());
                }
            }
        }
        output.push((LANGUAGE_CODE_KEY.to_string(), LATIN_LANGUAGE_CODE.to_string()));

        match &self.output {
            Some(path) => {
                let file = File::create(path)?;
                dataset::write_dataset(BufWriter::new(file), &output)?;
                log::info!("Wrote {} entries to {}", output.len(), path.display());
            }
            None => dataset::write_dataset(std::io::stdout().lock(), &output)?,
        }

        Ok(())
    }

    fn render_config(&self) -> RenderConfig {
        let mut builder =
            RenderConfig::builder().capitalize_without_reference(!self.no_capitalize_default);
        if let Some(separator) = &self.separator {
            builder = builder.morpheme_separator(separator);
        }
        if let Some(replacement) = &self.semivowel {
            builder = builder.semivowel_override(replacement);
        }
        builder.build()
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    if quiet {
        return;
    }
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level),
    )
    .try_init();
}
