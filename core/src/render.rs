#![deny(missing_docs)]

//! # Rendering
//!
//! Emits Rust source from a finished [`ClassModel`]:
//! - `types.rs`: one item per registered type (struct, `Vec` newtype, enum,
//!   pattern newtype).
//! - `client.rs`: the service trait with one method per bound operation.
//! - `definition.json`: the definition bundle.

use crate::error::{AppError, AppResult};
use crate::generator::ClassModel;
use crate::identifier::{member_identifier, variant_identifier, Naming};
use crate::model::{ComplexType, EnumType, Member, PatternType, Type, TypeRegistry};
use crate::type_mapping::{primitive, resolve, TypeMapper, XsdTypeMapper};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const HEADER: &str = "// @generated by soapgen. Do not edit by hand.\n";

/// Renders `types.rs`.
pub fn render_types(model: &ClassModel, naming: &Naming) -> String {
    let registry = model.service.registry();
    let mapper = XsdTypeMapper::new(registry, naming);
    let mut code = String::from(HEADER);
    code.push('\n');
    code.push_str("use serde::{Deserialize, Serialize};\n");

    for ty in model.types() {
        code.push('\n');
        let ident = naming.class_identifier(ty.name());
        match ty {
            Type::Complex(c) => code.push_str(&render_struct(c, &ident, registry, &mapper)),
            Type::Array(c) => code.push_str(&render_array(c, &ident, ty, &mapper)),
            Type::Enum(e) => code.push_str(&render_enum(e, &ident)),
            Type::Pattern(p) => code.push_str(&render_pattern(p, &ident)),
        }
    }
    code
}

/// Renders `client.rs`.
pub fn render_client(model: &ClassModel, naming: &Naming) -> String {
    let service = &model.service;
    let mapper = XsdTypeMapper::new(service.registry(), naming);
    let mut code = String::from(HEADER);
    code.push('\n');
    code.push_str("use super::types::*;\n\n");

    code.push_str("/// Endpoint addresses of the service.\n");
    code.push_str("pub const LOCATIONS: &[&str] = &[");
    let locations: Vec<String> = service.locations.iter().map(|l| format!("{:?}", l)).collect();
    code.push_str(&locations.join(", "));
    code.push_str("];\n\n");

    code.push_str(&doc_comment(service.documentation.as_deref(), ""));
    code.push_str(&format!("pub trait {} {{\n", service.identifier));
    code.push_str("    /// Transport error.\n");
    code.push_str("    type Error;\n");

    for method in &model.methods {
        code.push('\n');
        let docs = service
            .operation(&method.name)
            .and_then(|op| op.documentation.as_deref());
        code.push_str(&doc_comment(docs, "    "));
        code.push_str(&format!(
            "    fn {}(&self, request: {}) -> Result<{}, Self::Error>;\n",
            member_identifier(&method.name),
            mapper.map(&method.request_type),
            mapper.map(&method.response_type),
        ));
    }
    code.push_str("}\n");
    code
}

/// Writes `types.rs`, `client.rs` and `definition.json` into `dir`.
///
/// # Returns
///
/// The written paths, in that order.
pub fn write_output(model: &ClassModel, naming: &Naming, dir: &Path) -> AppResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let definition = serde_json::to_string_pretty(&model.definition())
        .map_err(|e| AppError::General(format!("Failed to serialize definition: {}", e)))?;

    let files = [
        ("types.rs", render_types(model, naming)),
        ("client.rs", render_client(model, naming)),
        ("definition.json", definition),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, content) in files {
        let path = dir.join(name);
        fs::write(&path, content)?;
        info!(path = %path.display(), "written");
        written.push(path);
    }
    Ok(written)
}

fn doc_comment(text: Option<&str>, indent: &str) -> String {
    let mut code = String::new();
    if let Some(text) = text {
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                code.push_str(&format!("{}///\n", indent));
            } else {
                code.push_str(&format!("{}/// {}\n", indent, line));
            }
        }
    }
    code
}

/// Members of the base chain (outermost base first), then the type's own.
fn inherited_members<'a>(c: &'a ComplexType, registry: &'a TypeRegistry) -> Vec<&'a Member> {
    let mut chain = vec![c];
    let mut seen: HashSet<&str> = HashSet::from([c.name.as_str()]);
    let mut current = c;
    while let Some(base) = current
        .base
        .as_deref()
        .and_then(|b| registry.get(b))
        .and_then(Type::as_complex)
    {
        if !seen.insert(base.name.as_str()) {
            break;
        }
        chain.push(base);
        current = base;
    }
    chain
        .into_iter()
        .rev()
        .flat_map(|t| t.members.iter())
        .collect()
}

/// Whether a field of `type_name` contains `target` inline, directly or
/// through other structs. Arrays stop the walk: `Vec` already adds
/// indirection.
fn leads_back<'a>(
    type_name: &str,
    target: &str,
    registry: &'a TypeRegistry,
    seen: &mut HashSet<&'a str>,
) -> bool {
    let Some(Type::Complex(c)) = resolve(registry, type_name) else {
        return false;
    };
    if c.name == target {
        return true;
    }
    if !seen.insert(c.name.as_str()) {
        return false;
    }
    inherited_members(c, registry)
        .into_iter()
        .any(|m| leads_back(&m.type_name, target, registry, seen))
}

fn render_struct(
    c: &ComplexType,
    ident: &str,
    registry: &TypeRegistry,
    mapper: &impl TypeMapper,
) -> String {
    let mut code = String::new();
    if c.is_abstract {
        code.push_str("/// Abstract in the schema.\n");
    }
    if let Some(base) = &c.base {
        code.push_str(&format!("/// Extends `{}`.\n", base));
    }
    code.push_str("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n");
    if ident != c.name {
        code.push_str(&format!("#[serde(rename = {:?})]\n", c.name));
    }
    code.push_str(&format!("pub struct {} {{\n", ident));

    let mut used: HashSet<String> = HashSet::new();
    for member in inherited_members(c, registry) {
        let field = unique(member_identifier(&member.name), &mut used);
        let mut attrs = Vec::new();
        if field.trim_start_matches("r#") != member.name {
            attrs.push(format!("rename = {:?}", member.name));
        }
        if member.nullable {
            attrs.push("default".to_string());
            attrs.push("skip_serializing_if = \"Option::is_none\"".to_string());
        }
        if !attrs.is_empty() {
            code.push_str(&format!("    #[serde({})]\n", attrs.join(", ")));
        }
        let boxed = leads_back(&member.type_name, &c.name, registry, &mut HashSet::new());
        code.push_str(&format!(
            "    pub {}: {},\n",
            field,
            mapper.map_member(member, boxed)
        ));
    }

    code.push_str("}\n");
    code
}

fn render_array(c: &ComplexType, ident: &str, ty: &Type, mapper: &impl TypeMapper) -> String {
    let item = ty
        .item_type()
        .map(|t| mapper.map(t))
        .unwrap_or_else(|| "String".to_string());
    let mut code = String::new();
    if c.members.len() > 1 {
        code.push_str(&format!(
            "/// Declares {} members; only the first is used as item type.\n",
            c.members.len()
        ));
    }
    code.push_str("#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]\n");
    code.push_str("#[serde(transparent)]\n");
    code.push_str(&format!("pub struct {}(pub Vec<{}>);\n", ident, item));
    code
}

fn render_enum(e: &EnumType, ident: &str) -> String {
    let mut code = String::new();
    if let Some(restriction) = &e.restriction {
        code.push_str(&format!("/// Restricts `{}`.\n", restriction));
    }
    code.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]\n");
    code.push_str(&format!("pub enum {} {{\n", ident));
    let mut used = HashSet::new();
    for value in &e.values {
        let variant = unique(variant_identifier(value), &mut used);
        code.push_str(&format!("    #[serde(rename = {:?})]\n", value));
        code.push_str(&format!("    {},\n", variant));
    }
    code.push_str("}\n");
    code
}

fn render_pattern(p: &PatternType, ident: &str) -> String {
    let inner = p
        .restriction
        .as_deref()
        .and_then(primitive)
        .unwrap_or("String");
    let mut code = String::new();
    code.push_str(&format!("/// Values must match `{}`.\n", p.value.replace('`', "'")));
    code.push_str("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n");
    code.push_str("#[serde(transparent)]\n");
    code.push_str(&format!("pub struct {}(pub {});\n\n", ident, inner));
    code.push_str(&format!("impl {} {{\n", ident));
    code.push_str("    /// Pattern facet from the schema.\n");
    code.push_str(&format!("    pub const PATTERN: &'static str = {:?};\n", p.value));
    code.push_str("}\n");
    code
}

fn unique(ident: String, used: &mut HashSet<String>) -> String {
    if used.insert(ident.clone()) {
        return ident;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}{}", ident, n);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Method, Operation, Service};
    use pretty_assertions::assert_eq;

    fn model() -> ClassModel {
        let mut reg = TypeRegistry::new(false);

        let mut base = ComplexType::new("Envelope", true);
        base.add_member("traceId", "string", true);
        reg.register(Type::Complex(base));

        let mut address = ComplexType::new("Address", false);
        address.add_member("street", "string", false);
        address.add_member("zip", "string", true);
        address.base = Some("Envelope".into());
        reg.register(Type::Complex(address));

        let mut arr = ComplexType::new("ArrayOfAddress", false);
        arr.add_member("item", "Address", false);
        reg.register(Type::Array(arr));

        let mut status = EnumType::new("Status", Some("string"));
        status.add_value("ACTIVE");
        status.add_value("in-review");
        reg.register(Type::Enum(status));

        reg.register(Type::Pattern(PatternType {
            name: "Zip".into(),
            value: "[0-9]{5}".into(),
            restriction: Some("string".into()),
        }));

        let mut service = Service::new(
            "AddressBook",
            "AddressBook",
            Some("Address lookups.".into()),
            vec!["http://example.invalid/book".into()],
        )
        .with_types(reg);
        service.add_operation(Operation {
            name: "FindAddress".into(),
            params: vec![],
            returns: None,
            documentation: Some("Finds one address.".into()),
        });

        ClassModel {
            service,
            methods: vec![Method {
                name: "FindAddress".into(),
                request_type: "Zip".into(),
                response_type: "ArrayOfAddress".into(),
                params_in: vec![],
                params_out: vec![],
            }],
        }
    }

    #[test]
    fn test_struct_includes_base_members_first() {
        let code = render_types(&model(), &Naming::default());
        let expected = r#"/// Extends `Envelope`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "traceId", default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    pub street: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}
"#;
        assert!(code.contains(expected), "{}", code);
        assert!(code.contains("/// Abstract in the schema.\n"));
    }

    #[test]
    fn test_array_enum_and_pattern() {
        let code = render_types(&model(), &Naming::default());
        assert!(code.contains("pub struct ArrayOfAddress(pub Vec<Address>);"));
        assert!(code.contains("    #[serde(rename = \"in-review\")]\n    InReview,\n"));
        assert!(code.contains("pub struct Zip(pub String);"));
        assert!(code.contains("pub const PATTERN: &'static str = \"[0-9]{5}\";"));
    }

    #[test]
    fn test_client_trait() {
        let code = render_client(&model(), &Naming::default());
        assert!(code.contains("pub const LOCATIONS: &[&str] = &[\"http://example.invalid/book\"];"));
        assert!(code.contains("/// Address lookups.\npub trait AddressBook {"));
        assert!(code.contains(
            "    /// Finds one address.\n    fn find_address(&self, request: Zip) -> Result<ArrayOfAddress, Self::Error>;\n"
        ));
    }

    #[test]
    fn test_naming_affixes_and_renames() {
        let code = render_types(&model(), &Naming::new("", "Dto"));
        assert!(code.contains("#[serde(rename = \"Address\")]\npub struct AddressDto {"));
        assert!(code.contains("pub struct ArrayOfAddressDto(pub Vec<AddressDto>);"));
    }

    #[test]
    fn test_inheritance_cycle_terminates() {
        let mut reg = TypeRegistry::new(false);
        let mut a = ComplexType::new("A", false);
        a.base = Some("B".into());
        let mut b = ComplexType::new("B", false);
        b.base = Some("A".into());
        reg.register(Type::Complex(a.clone()));
        reg.register(Type::Complex(b));
        assert!(inherited_members(&a, &reg).is_empty());
    }

    #[test]
    fn test_self_reference_is_boxed() {
        let mut reg = TypeRegistry::new(false);
        let mut node = ComplexType::new("Node", false);
        node.add_member("value", "int", false);
        node.add_member("next", "Node", true);
        reg.register(Type::Complex(node));

        let mut parent = ComplexType::new("Parent", false);
        parent.add_member("child", "tns:Child", false);
        reg.register(Type::Complex(parent));
        let mut child = ComplexType::new("Child", false);
        child.add_member("parent", "Parent", true);
        reg.register(Type::Complex(child));

        let mut tree = ComplexType::new("Tree", false);
        tree.add_member("children", "ArrayOfTree", false);
        reg.register(Type::Complex(tree));
        let mut arr = ComplexType::new("ArrayOfTree", false);
        arr.add_member("item", "Tree", false);
        reg.register(Type::Array(arr));

        let model = ClassModel {
            service: Service::new("Graph", "Graph", None, vec![]).with_types(reg),
            methods: vec![],
        };
        let code = render_types(&model, &Naming::default());

        assert!(code.contains("    pub value: i32,\n"), "{}", code);
        assert!(code.contains("    pub next: Option<Box<Node>>,\n"));
        assert!(code.contains("    pub child: Box<Child>,\n"));
        assert!(code.contains("    pub parent: Option<Box<Parent>>,\n"));
        assert!(code.contains("    pub children: ArrayOfTree,\n"));
    }

    #[test]
    fn test_unique_identifiers() {
        let mut used = HashSet::new();
        assert_eq!(unique("A".into(), &mut used), "A");
        assert_eq!(unique("A".into(), &mut used), "A2");
        assert_eq!(unique("A".into(), &mut used), "A3");
    }

    #[test]
    fn test_write_output() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_output(&model(), &Naming::default(), dir.path()).unwrap();
        assert_eq!(written.len(), 3);
        let json = fs::read_to_string(dir.path().join("definition.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["serviceIdentifier"], "AddressBook");
        assert_eq!(value["methods"][0]["name"], "FindAddress");
    }
}
