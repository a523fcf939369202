#![deny(missing_docs)]

//! # Generate Command
//!
//! Builds the class model from the configured schema documents and writes
//! the rendered sources plus the definition bundle.

use crate::error::CliResult;
use crate::inputs::ConfigArgs;
use soapgen_core::{write_output, Generator};

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    #[clap(flatten)]
    pub config: ConfigArgs,
}

/// Executes the generation.
pub fn execute(args: &GenerateArgs) -> CliResult<()> {
    let config = args.config.resolve()?;
    let naming = config.naming();
    let output_dir = config.output_dir.clone();

    let model = Generator::from_config(config).generate()?;
    let written = write_output(&model, &naming, &output_dir)?;

    println!(
        "Generated {} ({} types, {} methods):",
        model.service.identifier,
        model.types().count(),
        model.methods.len()
    );
    for path in written {
        println!("  -> {:?}", path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    const DOC: &str = r#"
service: { name: echo_service }
types:
  - name: Echo
    complex: true
    parts: [{ name: text, type: string }]
  - name: EchoResponse
    complex: true
    parts: [{ name: text, type: string, nillable: true }]
operations:
  - name: Echo
    params: [{ identifier: Echo, rendered: parameters }]
    returns: EchoResponse
"#;

    #[test]
    fn test_execute_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("echo.yaml");
        fs::write(&input, DOC).unwrap();
        let out = dir.path().join("out");

        let args = GenerateArgs {
            config: ConfigArgs {
                inputs: vec![input],
                output: Some(out.clone()),
                ..ConfigArgs::default()
            },
        };
        execute(&args).unwrap();

        let client = fs::read_to_string(out.join("client.rs")).unwrap();
        assert!(client.contains("pub trait EchoService {"));
        assert!(out.join("types.rs").exists());
        assert!(out.join("definition.json").exists());
    }

    #[test]
    fn test_execute_without_inputs_fails() {
        let args = GenerateArgs {
            config: ConfigArgs {
                output: Some(PathBuf::from("unused")),
                ..ConfigArgs::default()
            },
        };
        assert!(execute(&args).is_err());
    }
}
