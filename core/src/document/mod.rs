//! # Schema Documents
//!
//! Node objects produced from a service description and the reader that
//! loads them.

pub mod nodes;
pub mod reader;

pub use nodes::{OperationNode, ParamNode, PartNode, SchemaDocument, ServiceNode, TypeNode};
pub use reader::{parse_document, DocumentReader, FileDocumentReader};
