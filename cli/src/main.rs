#![deny(missing_docs)]

//! # Soapgen CLI
//!
//! Command Line Interface for the service-description code generator.
//!
//! Supported Commands:
//! - `generate`: Schema documents -> class model -> Rust sources + definition.
//! - `inspect`: Prints the definition bundle of the class model.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;

mod error;
mod generate;
mod inputs;
mod inspect;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Soapgen Toolchain CLI")]
struct Cli {
    /// Log at debug level (skipped references, dropped types).
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate sources from schema documents.
    Generate(generate::GenerateArgs),
    /// Print the definition bundle without writing files.
    Inspect(inspect::InspectArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Generate(args) => generate::execute(args)?,
        Commands::Inspect(args) => inspect::execute(args)?,
    }

    Ok(())
}
