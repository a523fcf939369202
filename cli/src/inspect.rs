#![deny(missing_docs)]

//! # Inspect Command
//!
//! Builds the class model and prints the definition bundle as JSON without
//! writing any files.

use crate::error::{CliError, CliResult};
use crate::inputs::ConfigArgs;
use soapgen_core::{ClassModel, Generator};

/// Arguments for the inspect command.
#[derive(clap::Args, Debug, Clone)]
pub struct InspectArgs {
    #[clap(flatten)]
    pub config: ConfigArgs,
}

/// Executes the inspection.
pub fn execute(args: &InspectArgs) -> CliResult<()> {
    let config = args.config.resolve()?;
    let model = Generator::from_config(config).generate()?;
    println!("{}", definition_json(&model)?);
    Ok(())
}

/// Pretty JSON of the definition bundle.
pub fn definition_json(model: &ClassModel) -> CliResult<String> {
    serde_json::to_string_pretty(&model.definition())
        .map_err(|e| CliError::General(format!("Failed to serialize definition: {}", e)))
}
