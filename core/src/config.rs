#![deny(missing_docs)]

//! # Generator Configuration
//!
//! Options consumed by the generation pipeline. Loaded from a YAML or JSON
//! file (camelCase keys) and optionally overridden by CLI flags.

use crate::error::{AppError, AppResult};
use crate::identifier::Naming;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Emits typed arrays for single-element responses.
pub const SOAP_SINGLE_ELEMENT_ARRAYS: u32 = 1;

/// One or more schema sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputFiles {
    /// A single path.
    One(PathBuf),
    /// An ordered list of paths, merged in order.
    Many(Vec<PathBuf>),
}

impl Default for InputFiles {
    fn default() -> Self {
        InputFiles::Many(Vec::new())
    }
}

impl InputFiles {
    /// The inputs as an ordered list.
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            InputFiles::One(p) => vec![p.as_path()],
            InputFiles::Many(ps) => ps.iter().map(PathBuf::as_path).collect(),
        }
    }
}

/// Options forwarded to the generated client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SoapClientOptions {
    /// Feature bitmask.
    pub features: u32,
}

impl Default for SoapClientOptions {
    fn default() -> Self {
        Self {
            features: SOAP_SINGLE_ELEMENT_ARRAYS,
        }
    }
}

/// Full generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Schema sources.
    pub input_file: InputFiles,
    /// Where rendered files are written.
    pub output_dir: PathBuf,
    /// Collapse structurally identical types.
    pub shared_types: bool,
    /// Client options.
    pub soap_client_options: SoapClientOptions,
    /// Class identifier prefix.
    pub prefix: String,
    /// Class identifier suffix.
    pub suffix: String,
    /// Restrict generation to these operations. Empty keeps all.
    pub operation_names: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_file: InputFiles::default(),
            output_dir: PathBuf::from("generated"),
            shared_types: false,
            soap_client_options: SoapClientOptions::default(),
            prefix: String::new(),
            suffix: String::new(),
            operation_names: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Loads a configuration file (YAML or JSON).
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content).map_err(|e| match e {
            AppError::Parse(msg) => AppError::Parse(format!("{} ({})", msg, path.display())),
            other => other,
        })
    }

    /// Parses a configuration from YAML or JSON text.
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Parse(format!("Failed to parse configuration: {}", e)))
    }

    /// Naming options for class identifiers.
    pub fn naming(&self) -> Naming {
        Naming::new(self.prefix.as_str(), self.suffix.as_str())
    }

    /// Whether the given feature bit is set.
    pub fn has_feature(&self, flag: u32) -> bool {
        self.soap_client_options.features & flag == flag
    }

    /// Checks that the configuration can drive a run.
    ///
    /// # Errors
    ///
    /// `AppError::Configuration` when no input file is configured.
    pub fn validate(&self) -> AppResult<()> {
        if self.input_file.paths().is_empty() {
            return Err(AppError::Configuration(
                "No input file configured (inputFile)".into(),
            ));
        }
        Ok(())
    }
}
