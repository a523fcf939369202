#![deny(missing_docs)]

//! # Type Registry Builder
//!
//! Turns raw [`TypeNode`]s into a [`TypeRegistry`] in two passes:
//!
//! 1. **Classify**: every node becomes at most one [`Type`] and is
//!    registered (subject to structural deduplication).
//! 2. **Link**: base-type references are resolved against the complete
//!    registry, so forward references work regardless of document order.
//!
//! The second pass must only start once the first one has seen every node.

use crate::document::TypeNode;
use crate::model::{ComplexType, EnumType, PatternType, Registration, Type, TypeRegistry};
use tracing::{debug, trace};

/// Whether a member of `node` accepts null.
///
/// Either `nillable="true"` or `minOccurs="0"` is enough. An undeclared
/// `minOccurs` is not zero.
pub fn member_nullable(node: &TypeNode, member: &str) -> bool {
    node.is_element_nillable(member) || node.element_min_occurs(member) == Some(0)
}

/// Classifies a node into exactly one variant, or none.
///
/// Precedence: complex (array when flagged) → enumeration → pattern.
pub fn classify(node: &TypeNode) -> Option<Type> {
    if node.is_complex() {
        let mut complex = ComplexType::new(node.name(), node.is_abstract());
        for (name, type_name) in node.parts() {
            complex.add_member(name, type_name, member_nullable(node, name));
        }
        return Some(if node.is_array() {
            Type::Array(complex)
        } else {
            Type::Complex(complex)
        });
    }

    if !node.enumerations().is_empty() {
        let mut en = EnumType::new(node.name(), node.restriction());
        for value in node.enumerations() {
            en.add_value(value);
        }
        return Some(Type::Enum(en));
    }

    node.pattern().map(|pattern| {
        Type::Pattern(PatternType {
            name: node.name().to_string(),
            value: pattern.to_string(),
            restriction: node.restriction().map(str::to_string),
        })
    })
}

/// Incrementally builds the type registry.
#[derive(Debug, Default)]
pub struct TypeRegistryBuilder {
    registry: TypeRegistry,
}

impl TypeRegistryBuilder {
    /// Creates a builder.
    ///
    /// # Arguments
    ///
    /// * `shared_types` - Enables structural deduplication.
    pub fn new(shared_types: bool) -> Self {
        Self {
            registry: TypeRegistry::new(shared_types),
        }
    }

    /// First pass: classifies and registers every node.
    pub fn classify_nodes<'a>(&mut self, nodes: impl IntoIterator<Item = &'a TypeNode>) {
        for node in nodes {
            let Some(ty) = classify(node) else {
                trace!(name = node.name(), "type node matches no variant, dropped");
                continue;
            };
            match self.registry.register(ty) {
                Registration::Added => {}
                Registration::Replaced => {
                    debug!(name = node.name(), "type declared again, replacing");
                }
                Registration::Duplicate { existing } => {
                    debug!(
                        name = node.name(),
                        existing = existing.as_str(),
                        "structurally identical to an earlier type, skipped"
                    );
                }
            }
        }
    }

    /// Second pass: links base types.
    ///
    /// An edge is created only when both the node and its base resolve to
    /// plain complex types. Anything else is skipped without error.
    pub fn link_inheritance<'a>(&mut self, nodes: impl IntoIterator<Item = &'a TypeNode>) {
        for node in nodes {
            let Some(base) = node.base() else {
                continue;
            };
            if base == node.name() {
                debug!(name = node.name(), "type extends itself, no base linked");
                continue;
            }
            let base_is_complex = self
                .registry
                .get(base)
                .is_some_and(|t| t.as_complex().is_some());
            if !base_is_complex {
                debug!(name = node.name(), base, "base type unresolved or not complex");
                continue;
            }
            match self.registry.get_mut(node.name()).and_then(Type::as_complex_mut) {
                Some(complex) => complex.base = Some(base.to_string()),
                None => debug!(name = node.name(), base, "derived type not registered as complex"),
            }
        }
    }

    /// Runs both passes over one node collection.
    pub fn build(mut self, nodes: &[TypeNode]) -> TypeRegistry {
        self.classify_nodes(nodes);
        self.link_inheritance(nodes);
        self.registry
    }

    /// Returns the finished registry.
    pub fn finish(self) -> TypeRegistry {
        self.registry
    }
}
