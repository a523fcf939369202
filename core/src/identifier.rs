#![deny(missing_docs)]

//! # Identifiers
//!
//! Turns schema names into valid Rust identifiers for generated code.
//! Schema names may carry namespace prefixes, dashes, dots or start with
//! digits; none of that survives into generated source.

use heck::{ToSnakeCase, ToUpperCamelCase};
use regex::Regex;
use std::sync::OnceLock;

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "gen", "macro",
    "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Naming options applied to generated class identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Naming {
    /// Prepended to every class identifier.
    pub prefix: String,
    /// Appended to every class identifier.
    pub suffix: String,
}

impl Naming {
    /// Creates naming options.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Class identifier for a schema type or service name.
    ///
    /// Prefix and suffix are applied around the cased name, then the whole
    /// result is sanitized again.
    pub fn class_identifier(&self, name: &str) -> String {
        let combined = format!("{}{}{}", self.prefix, type_identifier(name), self.suffix);
        type_identifier(&combined)
    }
}

/// Drops a namespace prefix (`tns:Address` -> `Address`).
pub fn local_name(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}

/// UpperCamelCase identifier for a type name.
pub fn type_identifier(name: &str) -> String {
    let ident = clean(local_name(name)).to_upper_camel_case();
    guard(ident, "Type")
}

/// snake_case identifier for a member or method name.
pub fn member_identifier(name: &str) -> String {
    let ident = clean(local_name(name)).to_snake_case();
    if ident.is_empty() {
        return "field".to_string();
    }
    if starts_with_digit(&ident) {
        return format!("_{}", ident);
    }
    if RUST_KEYWORDS.contains(&ident.as_str()) {
        return match ident.as_str() {
            // Raw identifiers are not allowed for these
            "self" | "super" | "crate" => format!("{}_", ident),
            _ => format!("r#{}", ident),
        };
    }
    ident
}

/// UpperCamelCase identifier for an enumeration value.
pub fn variant_identifier(value: &str) -> String {
    let ident = clean(value).to_upper_camel_case();
    guard(ident, "Value")
}

fn guard(ident: String, fallback: &str) -> String {
    if ident.is_empty() {
        return fallback.to_string();
    }
    if starts_with_digit(&ident) {
        return format!("{}{}", fallback, ident);
    }
    if ident == "Self" {
        return format!("{}_", ident);
    }
    ident
}

fn clean(name: &str) -> String {
    static INVALID_RE: OnceLock<Regex> = OnceLock::new();
    let invalid_re = INVALID_RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]+").expect("Invalid regex"));
    invalid_re.replace_all(name, "_").into_owned()
}

fn starts_with_digit(ident: &str) -> bool {
    ident.chars().next().is_some_and(|c| c.is_ascii_digit())
}
