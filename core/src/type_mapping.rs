#![deny(missing_docs)]

//! # Type Mapping
//!
//! Converts schema type names into Rust type strings for rendering.
//! Handles XML-Schema primitives, references to registered types and
//! nullability (`Option`).

use crate::identifier::{local_name, Naming};
use crate::model::{Member, Type, TypeRegistry};

/// Trait for converting schema type names to Rust types.
pub trait TypeMapper {
    /// Maps a schema type name (e.g. `xsd:int`, `Address`) to a Rust type.
    fn map(&self, type_name: &str) -> String;

    /// Maps a member, wrapping nullable members in `Option`.
    ///
    /// `boxed` puts the type behind a `Box`, for fields that lead back to
    /// the struct holding them.
    fn map_member(&self, member: &Member, boxed: bool) -> String {
        let mut ty = self.map(&member.type_name);
        if boxed {
            ty = format!("Box<{}>", ty);
        }
        if member.nullable {
            format!("Option<{}>", ty)
        } else {
            ty
        }
    }
}

/// Rust type of an XML-Schema built-in type, if `name` is one.
pub fn primitive(name: &str) -> Option<&'static str> {
    let ty = match local_name(name) {
        "string" | "normalizedString" | "token" | "anyURI" | "QName" | "NOTATION" | "language"
        | "Name" | "NCName" | "NMTOKEN" | "ID" | "IDREF" | "ENTITY" => "String",
        "boolean" => "bool",
        "byte" => "i8",
        "short" => "i16",
        "int" => "i32",
        "long" | "integer" | "negativeInteger" | "nonPositiveInteger" => "i64",
        "unsignedByte" => "u8",
        "unsignedShort" => "u16",
        "unsignedInt" => "u32",
        "unsignedLong" | "positiveInteger" | "nonNegativeInteger" => "u64",
        "float" => "f32",
        "double" | "decimal" => "f64",
        "dateTime" | "date" | "time" | "duration" | "gYear" | "gYearMonth" | "gMonth"
        | "gMonthDay" | "gDay" => "String",
        "base64Binary" | "hexBinary" => "Vec<u8>",
        "anyType" | "anySimpleType" => "String",
        _ => return None,
    };
    Some(ty)
}

/// The registered type a schema type name refers to.
///
/// An exact registered name wins over the built-in table, so a user type
/// called `ID` or `language` resolves to itself. Prefixed names fall back to
/// their local part unless they name a built-in.
pub fn resolve<'a>(registry: &'a TypeRegistry, type_name: &str) -> Option<&'a Type> {
    if let Some(ty) = registry.get(type_name) {
        return Some(ty);
    }
    if primitive(type_name).is_some() {
        return None;
    }
    registry.get(local_name(type_name))
}

/// Maps against a built registry.
///
/// Registered names become class identifiers; unknown names degrade to
/// `String`, mirroring the lenient handling of unresolved references.
pub struct XsdTypeMapper<'a> {
    registry: &'a TypeRegistry,
    naming: &'a Naming,
}

impl<'a> XsdTypeMapper<'a> {
    /// Creates a mapper.
    pub fn new(registry: &'a TypeRegistry, naming: &'a Naming) -> Self {
        Self { registry, naming }
    }
}

impl TypeMapper for XsdTypeMapper<'_> {
    fn map(&self, type_name: &str) -> String {
        if let Some(ty) = resolve(self.registry, type_name) {
            return self.naming.class_identifier(ty.name());
        }
        primitive(type_name).unwrap_or("String").to_string()
    }
}
