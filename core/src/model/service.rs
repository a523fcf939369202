//! # Service & Operations
//!
//! The service entity and the operations it exposes, in declaration order.

use crate::model::registry::TypeRegistry;
use crate::model::types::Type;
use serde::Serialize;

/// An operation parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    /// Type name carried by the parameter.
    pub identifier: String,
    /// Rendered form of the parameter.
    pub rendered: String,
}

/// A service operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Operation name.
    pub name: String,
    /// Parameters in message order.
    pub params: Vec<Param>,
    /// Return type name.
    pub returns: Option<String>,
    /// Documentation text.
    pub documentation: Option<String>,
}

/// The service entity: one generated client class.
#[derive(Debug, Clone)]
pub struct Service {
    /// Service name as declared.
    pub name: String,
    /// Generated class identifier.
    pub identifier: String,
    /// Documentation text.
    pub documentation: Option<String>,
    /// Endpoint addresses.
    pub locations: Vec<String>,
    /// Operations in generation order.
    pub operations: Vec<Operation>,
    types: TypeRegistry,
}

impl Service {
    /// Creates a service without operations.
    pub fn new(
        name: impl Into<String>,
        identifier: impl Into<String>,
        documentation: Option<String>,
        locations: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            documentation,
            locations,
            operations: Vec::new(),
            types: TypeRegistry::default(),
        }
    }

    /// Appends an operation.
    pub fn add_operation(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    /// Attaches the registry the service was built against.
    pub fn with_types(mut self, types: TypeRegistry) -> Self {
        self.types = types;
        self
    }

    /// The registry backing this service.
    pub fn registry(&self) -> &TypeRegistry {
        &self.types
    }

    pub(crate) fn registry_mut(&mut self) -> &mut TypeRegistry {
        &mut self.types
    }

    /// Types exposed by the service, in registration order.
    pub fn types(&self) -> impl Iterator<Item = &Type> {
        self.types.iter()
    }

    /// Looks up an operation by name.
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.name == name)
    }
}
