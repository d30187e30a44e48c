//! Command-line batch converter for Derani-script localization datasets

use anyhow::Result;
use clap::Parser;
use derani_cli::commands::Commands;

/// Derani-script to Latin dataset converter
#[derive(Debug, Parser)]
#[command(name = "derani", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
    }
}
