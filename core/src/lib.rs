#![deny(missing_docs)]

//! # Soapgen Core
//!
//! Core library of the service-description-to-code generator: reads schema
//! node documents, builds a normalized class model (types, service,
//! methods) and renders it.

/// Shared error types.
pub mod error;

/// Generator configuration.
pub mod config;

/// Schema node documents and their reader.
pub mod document;

/// Class model entities and the type registry.
pub mod model;

/// Schema name to Rust identifier conversion.
pub mod identifier;

/// Classification, deduplication and inheritance linking.
pub mod builder;

/// Service and operation assembly.
pub mod assembler;

/// Method synthesis from request/response pairings.
pub mod binder;

/// Pipeline orchestration.
pub mod generator;

/// Operation-based model filtering.
pub mod filter;

/// Schema type to Rust type mapping.
pub mod type_mapping;

/// Rust source rendering.
pub mod render;

pub use assembler::{Pairing, ServiceAssembler};
pub use binder::MethodBinder;
pub use builder::{classify, member_nullable, TypeRegistryBuilder};
pub use config::{GeneratorConfig, InputFiles};
pub use document::{DocumentReader, FileDocumentReader, SchemaDocument, TypeNode};
pub use error::{AppError, AppResult};
pub use filter::OperationFilter;
pub use generator::{ClassModel, Definition, Generator};
pub use identifier::Naming;
pub use model::{
    ComplexType, EnumType, Member, Method, PatternType, Service, Signature, Type, TypeRegistry,
};
pub use render::{render_client, render_types, write_output};
pub use type_mapping::{TypeMapper, XsdTypeMapper};
