#![deny(missing_docs)]

//! # Input Resolution
//!
//! Merges the configuration file with command-line overrides and expands
//! directory inputs into the schema documents they contain.

use crate::error::{CliError, CliResult};
use soapgen_core::{GeneratorConfig, InputFiles};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const DOCUMENT_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Options shared by every command that builds a model.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Configuration file (YAML or JSON).
    #[clap(long, short, env = "SOAPGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Schema document or directory of documents. Repeatable; order is kept.
    #[clap(long = "input", short)]
    pub inputs: Vec<PathBuf>,

    /// Output directory for rendered files.
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    /// Collapse structurally identical types.
    #[clap(long)]
    pub shared_types: bool,

    /// Prefix for generated class identifiers.
    #[clap(long)]
    pub prefix: Option<String>,

    /// Suffix for generated class identifiers.
    #[clap(long)]
    pub suffix: Option<String>,

    /// Only generate these operations. Repeatable.
    #[clap(long = "operation")]
    pub operations: Vec<String>,
}

impl ConfigArgs {
    /// Builds the effective configuration.
    ///
    /// Flags win over the file. Directory inputs are expanded in sorted
    /// order.
    pub fn resolve(&self) -> CliResult<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)?,
            None => GeneratorConfig::default(),
        };

        if !self.inputs.is_empty() {
            config.input_file = InputFiles::Many(self.inputs.clone());
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if self.shared_types {
            config.shared_types = true;
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        if let Some(suffix) = &self.suffix {
            config.suffix = suffix.clone();
        }
        if !self.operations.is_empty() {
            config.operation_names = self.operations.clone();
        }

        let mut expanded = Vec::new();
        for path in config.input_file.paths() {
            expanded.extend(expand_input(path)?);
        }
        config.input_file = InputFiles::Many(expanded);
        Ok(config)
    }
}

/// Expands a directory into the documents it contains; files pass through.
pub fn expand_input(path: &Path) -> CliResult<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(|e| CliError::General(e.to_string()))?;
        let is_document = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext));
        if entry.file_type().is_file() && is_document {
            found.push(entry.into_path());
        }
    }

    if found.is_empty() {
        return Err(CliError::General(format!(
            "No schema documents found in {:?}",
            path
        )));
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_expand_directory_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.yaml"), "").unwrap();
        fs::write(dir.path().join("a.json"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let found = expand_input(dir.path()).unwrap();
        let names: Vec<String> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.yaml"]);
    }

    #[test]
    fn test_empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(expand_input(dir.path()), Err(CliError::General(_))));
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg_path = dir.path().join("soapgen.yaml");
        fs::write(
            &cfg_path,
            "inputFile: from-file.yaml\noutputDir: out\nprefix: File\n",
        )
        .unwrap();

        let args = ConfigArgs {
            config: Some(cfg_path),
            inputs: vec![PathBuf::from("cli.yaml")],
            shared_types: true,
            suffix: Some("Dto".into()),
            ..ConfigArgs::default()
        };
        let config = args.resolve().unwrap();

        assert_eq!(config.input_file.paths(), vec![Path::new("cli.yaml")]);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!(config.shared_types);
        assert_eq!(config.prefix, "File");
        assert_eq!(config.suffix, "Dto");
    }
}
