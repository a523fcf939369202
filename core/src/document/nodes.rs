//! # Schema Nodes
//!
//! Raw, as-parsed declarations from a service description. These are the
//! inputs of the type registry builder and the service assembler; nothing
//! here is classified or resolved yet.

use serde::{Deserialize, Serialize};

/// One data-type declaration before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeNode {
    /// Declared name (e.g. `Address`).
    pub name: String,
    /// Set when the declaration is a complex (structural) type.
    pub complex: bool,
    /// Set when the complex type is an array wrapper.
    pub array: bool,
    /// Set when the complex type is declared abstract.
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    /// Declared members, in schema order.
    pub parts: Vec<PartNode>,
    /// Enumeration facet values, in schema order.
    pub enumerations: Vec<String>,
    /// Pattern facet value.
    pub pattern: Option<String>,
    /// Base type of a simple-type restriction (e.g. `string`).
    pub restriction: Option<String>,
    /// Name of the extended base type.
    pub base: Option<String>,
}

/// A single member declaration of a complex type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartNode {
    /// Member name.
    pub name: String,
    /// Declared type name of the member.
    #[serde(rename = "type")]
    pub type_name: String,
    /// `nillable="true"` on the element.
    pub nillable: bool,
    /// `minOccurs` on the element, absent when not declared.
    pub min_occurs: Option<u32>,
}

impl TypeNode {
    /// Creates an empty node with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the node is a complex type.
    pub fn is_complex(&self) -> bool {
        self.complex
    }

    /// Whether the node is an array type.
    pub fn is_array(&self) -> bool {
        self.array
    }

    /// Whether the node is abstract.
    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Iterates `(member name, type name)` in declaration order.
    pub fn parts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parts
            .iter()
            .map(|p| (p.name.as_str(), p.type_name.as_str()))
    }

    /// Whether the named element is declared nillable. Unknown names are not.
    pub fn is_element_nillable(&self, name: &str) -> bool {
        self.part(name).is_some_and(|p| p.nillable)
    }

    /// The declared `minOccurs` of the named element, if any.
    pub fn element_min_occurs(&self, name: &str) -> Option<u32> {
        self.part(name).and_then(|p| p.min_occurs)
    }

    /// Enumeration values.
    pub fn enumerations(&self) -> &[String] {
        &self.enumerations
    }

    /// Pattern facet. Blank patterns count as absent.
    pub fn pattern(&self) -> Option<&str> {
        non_blank(self.pattern.as_deref())
    }

    /// Restriction base.
    pub fn restriction(&self) -> Option<&str> {
        non_blank(self.restriction.as_deref())
    }

    /// Extended base type name. Blank references count as absent.
    pub fn base(&self) -> Option<&str> {
        non_blank(self.base.as_deref())
    }

    fn part(&self, name: &str) -> Option<&PartNode> {
        self.parts.iter().find(|p| p.name == name)
    }
}

impl PartNode {
    /// Creates a required, non-nillable member.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            nillable: false,
            min_occurs: None,
        }
    }
}

/// An operation declared on the service port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationNode {
    /// Operation name.
    pub name: String,
    /// Parameters in message order.
    pub params: Vec<ParamNode>,
    /// Type name of the output message body.
    pub returns: Option<String>,
    /// Operation documentation.
    pub documentation: Option<String>,
}

/// A parameter slot of an operation.
///
/// `identifier` is the type name behind the slot; `rendered` is the form a
/// signature would print, e.g. `parameters` for a wrapped document-literal
/// body or `string name` when the reader embedded a type hint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParamNode {
    /// Type name carried by the parameter.
    pub identifier: String,
    /// Rendered form of the parameter.
    pub rendered: String,
}

impl ParamNode {
    /// Creates a parameter slot.
    pub fn new(identifier: impl Into<String>, rendered: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            rendered: rendered.into(),
        }
    }

    /// True when the rendered form carries a type hint before the name.
    pub fn has_type_hint(&self) -> bool {
        self.rendered.split_whitespace().count() > 1
    }
}

/// The service declaration of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceNode {
    /// Service name.
    pub name: String,
    /// Service documentation.
    pub documentation: Option<String>,
    /// Endpoint addresses of the service ports.
    pub locations: Vec<String>,
}

/// A whole, already-resolved schema document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaDocument {
    /// Where the document was read from. Not part of the serialized form.
    #[serde(skip)]
    pub source: String,
    /// The service node, if the document declares one.
    pub service: Option<ServiceNode>,
    /// Type declarations in document order.
    pub types: Vec<TypeNode>,
    /// Operations in document order.
    pub operations: Vec<OperationNode>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
