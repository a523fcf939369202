#![deny(missing_docs)]

//! # Service/Operation Assembler
//!
//! Builds the [`Service`] entity from the document's service node and its
//! operations, and records for each operation the request/response type
//! names the method binder has to resolve.

use crate::document::{OperationNode, SchemaDocument};
use crate::error::{AppError, AppResult};
use crate::identifier::Naming;
use crate::model::{Operation, Param, Service};
use indexmap::IndexMap;
use tracing::debug;

/// Request/response type names recorded for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    /// Operation name.
    pub operation: String,
    /// Name of the request (input body) type.
    pub request_type: String,
    /// Name of the response (output body) type.
    pub response_type: String,
}

/// The request type name of an operation.
///
/// This is the identifier of the first parameter whose rendered form has
/// no embedded type hint, i.e. the slot for the wrapped request body.
pub fn request_type_name(node: &OperationNode) -> Option<&str> {
    node.params
        .iter()
        .find(|p| !p.has_type_hint() && !p.identifier.is_empty())
        .map(|p| p.identifier.as_str())
}

/// Accumulates the service and operation pairings across documents.
#[derive(Debug, Default)]
pub struct ServiceAssembler {
    naming: Naming,
    service: Option<Service>,
    operations: Vec<Operation>,
    pairings: IndexMap<String, Pairing>,
}

impl ServiceAssembler {
    /// Creates an assembler.
    ///
    /// # Arguments
    ///
    /// * `naming` - Prefix/suffix used for the service class identifier.
    pub fn new(naming: Naming) -> Self {
        Self {
            naming,
            ..Self::default()
        }
    }

    /// Adds a document's service node and operations.
    ///
    /// The first service node seen defines name and documentation; later
    /// ones only contribute endpoint locations. Operations are appended in
    /// document order.
    pub fn add_document(&mut self, doc: &SchemaDocument) {
        if let Some(node) = &doc.service {
            match self.service.as_mut() {
                None => {
                    debug!(service = node.name.as_str(), "loading service");
                    self.service = Some(Service::new(
                        node.name.as_str(),
                        self.naming.class_identifier(&node.name),
                        node.documentation.clone(),
                        node.locations.clone(),
                    ));
                }
                Some(service) => {
                    for location in &node.locations {
                        if !service.locations.contains(location) {
                            service.locations.push(location.clone());
                        }
                    }
                }
            }
        }

        for node in &doc.operations {
            self.add_operation(node);
        }
    }

    fn add_operation(&mut self, node: &OperationNode) {
        debug!(operation = node.name.as_str(), "loading operation");
        match (request_type_name(node), node.returns.as_deref()) {
            (Some(request), Some(response)) => {
                self.pairings.insert(
                    node.name.clone(),
                    Pairing {
                        operation: node.name.clone(),
                        request_type: request.to_string(),
                        response_type: response.to_string(),
                    },
                );
            }
            _ => debug!(
                operation = node.name.as_str(),
                "operation has no request body or no return type, not bindable"
            ),
        }

        let operation = Operation {
            name: node.name.clone(),
            params: node
                .params
                .iter()
                .map(|p| Param {
                    identifier: p.identifier.clone(),
                    rendered: p.rendered.clone(),
                })
                .collect(),
            returns: node.returns.clone(),
            documentation: node.documentation.clone(),
        };
        self.operations.push(operation);
    }

    /// Returns the service with all operations and the recorded pairings.
    ///
    /// A document may contribute operations before any document declared
    /// the service node; they keep their position.
    ///
    /// # Errors
    ///
    /// `AppError::Configuration` when none of the documents declared a
    /// service.
    pub fn finish(self) -> AppResult<(Service, Vec<Pairing>)> {
        let mut service = self.service.ok_or_else(|| {
            AppError::Configuration("No service could be built from the loaded schemas".into())
        })?;
        service.operations = self.operations;
        Ok((service, self.pairings.into_values().collect()))
    }
}
