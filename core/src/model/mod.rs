//! # Class Model
//!
//! The normalized output of the pipeline: classified types, the service
//! with its operations, and bound methods.

pub mod method;
pub mod registry;
pub mod service;
pub mod types;

pub use method::Method;
pub use registry::{Registration, TypeRegistry};
pub use service::{Operation, Param, Service};
pub use types::{ComplexType, EnumType, Member, PatternType, Signature, Type};
