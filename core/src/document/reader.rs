//! # Document Reader
//!
//! Loads serialized schema documents from disk. The YAML parser accepts
//! JSON as well, so one reader covers both encodings.

use crate::document::nodes::SchemaDocument;
use crate::error::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Interface for turning a schema source into node objects.
///
/// Abstracted so the pipeline can be driven from memory in tests.
pub trait DocumentReader {
    /// Reads one document.
    fn read(&self, path: &Path) -> AppResult<SchemaDocument>;
}

/// Standard reader backed by the filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileDocumentReader;

impl DocumentReader for FileDocumentReader {
    fn read(&self, path: &Path) -> AppResult<SchemaDocument> {
        let content = fs::read_to_string(path)?;
        parse_document(&path.to_string_lossy(), &content)
    }
}

/// Parses a document from YAML or JSON text.
///
/// # Arguments
///
/// * `source` - Label recorded on the document (usually its path).
/// * `content` - Raw document text.
pub fn parse_document(source: &str, content: &str) -> AppResult<SchemaDocument> {
    let mut doc: SchemaDocument = serde_yaml::from_str(content).map_err(|e| {
        AppError::Parse(format!("Failed to parse schema document '{}': {}", source, e))
    })?;
    doc.source = source.to_string();
    Ok(doc)
}
