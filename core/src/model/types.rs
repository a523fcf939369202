//! # Type Variants
//!
//! The classified form of schema type declarations. Every consumer
//! (binder, filter, renderer) matches on [`Type`] exhaustively.

use indexmap::IndexSet;
use serde::Serialize;

/// A member of a complex type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Member name as declared.
    pub name: String,
    /// Declared type name of the member.
    pub type_name: String,
    /// `nillable` or `minOccurs == 0`.
    pub nullable: bool,
}

impl Member {
    /// Creates a member.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            nullable,
        }
    }
}

/// A structural type with ordered members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexType {
    /// Declared name.
    pub name: String,
    /// Members in declaration order.
    pub members: Vec<Member>,
    /// Declared name of the linked base type, set by inheritance linking.
    pub base: Option<String>,
    /// Whether the type is abstract.
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
}

impl ComplexType {
    /// Creates a complex type without members.
    pub fn new(name: impl Into<String>, is_abstract: bool) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            base: None,
            is_abstract,
        }
    }

    /// Appends a member, keeping declaration order.
    pub fn add_member(&mut self, name: &str, type_name: &str, nullable: bool) {
        self.members.push(Member::new(name, type_name, nullable));
    }
}

/// A simple type restricted to a fixed set of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumType {
    /// Declared name.
    pub name: String,
    /// Allowed values; insertion order kept, duplicates ignored.
    pub values: IndexSet<String>,
    /// Restricted base type (e.g. `string`).
    pub restriction: Option<String>,
}

impl EnumType {
    /// Creates an enum without values.
    pub fn new(name: impl Into<String>, restriction: Option<&str>) -> Self {
        Self {
            name: name.into(),
            values: IndexSet::new(),
            restriction: restriction.map(str::to_string),
        }
    }

    /// Adds a value unless already present.
    pub fn add_value(&mut self, value: &str) {
        self.values.insert(value.to_string());
    }
}

/// A simple type restricted by a regular expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternType {
    /// Declared name.
    pub name: String,
    /// The pattern facet.
    pub value: String,
    /// Restricted base type.
    pub restriction: Option<String>,
}

/// A classified schema type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Type {
    /// A structure.
    Complex(ComplexType),
    /// A structure that wraps a sequence of items.
    Array(ComplexType),
    /// An enumeration.
    Enum(EnumType),
    /// A pattern-restricted value.
    Pattern(PatternType),
}

impl Type {
    /// Declared name of the type.
    pub fn name(&self) -> &str {
        match self {
            Type::Complex(c) | Type::Array(c) => &c.name,
            Type::Enum(e) => &e.name,
            Type::Pattern(p) => &p.name,
        }
    }

    /// Members of the type. Simple types have none.
    pub fn members(&self) -> &[Member] {
        match self {
            Type::Complex(c) | Type::Array(c) => &c.members,
            Type::Enum(_) | Type::Pattern(_) => &[],
        }
    }

    /// The complex body of a plain `Complex` type.
    ///
    /// Arrays are excluded: they are never valid inheritance endpoints.
    pub fn as_complex(&self) -> Option<&ComplexType> {
        match self {
            Type::Complex(c) => Some(c),
            _ => None,
        }
    }

    pub(crate) fn as_complex_mut(&mut self) -> Option<&mut ComplexType> {
        match self {
            Type::Complex(c) => Some(c),
            _ => None,
        }
    }

    /// Item type name of an array: the type of its single member.
    pub fn item_type(&self) -> Option<&str> {
        match self {
            Type::Array(c) => c.members.first().map(|m| m.type_name.as_str()),
            _ => None,
        }
    }

    /// Names of every type this one refers to (member types and base).
    pub fn referenced_names(&self) -> impl Iterator<Item = &str> {
        let base = match self {
            Type::Complex(c) | Type::Array(c) => c.base.as_deref(),
            _ => None,
        };
        self.members()
            .iter()
            .map(|m| m.type_name.as_str())
            .chain(base)
    }

    /// Structural identifier of the type.
    ///
    /// Derived from the variant and its shape only; the declared name and
    /// the (later linked) base never take part, so two declarations with
    /// equal shapes under different names produce the same signature.
    pub fn signature(&self) -> Signature {
        match self {
            Type::Complex(c) => Signature::Complex {
                is_abstract: c.is_abstract,
                members: c.members.clone(),
            },
            Type::Array(c) => Signature::Array {
                is_abstract: c.is_abstract,
                members: c.members.clone(),
            },
            Type::Enum(e) => Signature::Enum {
                restriction: e.restriction.clone(),
                values: e.values.iter().cloned().collect(),
            },
            Type::Pattern(p) => Signature::Pattern {
                restriction: p.restriction.clone(),
                value: p.value.clone(),
            },
        }
    }
}

/// Shape of a [`Type`] without its name, used as the deduplication key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Signature {
    /// Shape of a complex type.
    Complex {
        /// Abstract flag.
        is_abstract: bool,
        /// Ordered members with nullability.
        members: Vec<Member>,
    },
    /// Shape of an array type.
    Array {
        /// Abstract flag.
        is_abstract: bool,
        /// Ordered members with nullability.
        members: Vec<Member>,
    },
    /// Shape of an enumeration.
    Enum {
        /// Restricted base type.
        restriction: Option<String>,
        /// Values in declaration order.
        values: Vec<String>,
    },
    /// Shape of a pattern type.
    Pattern {
        /// Restricted base type.
        restriction: Option<String>,
        /// The pattern facet.
        value: String,
    },
}
