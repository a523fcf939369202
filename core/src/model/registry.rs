//! # Type Registry
//!
//! Stores classified types for lookup by declared name and for structural
//! deduplication. The name map answers "same name", the signature map
//! answers "same shape".

use crate::model::types::{Signature, Type};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Outcome of [`TypeRegistry::register`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The type was stored under its name.
    Added,
    /// A type with the same name was already stored and was replaced.
    Replaced,
    /// Deduplication is on and an equal shape is already stored under `existing`.
    Duplicate {
        /// Name of the earlier registration that wins.
        existing: String,
    },
}

/// Registry of classified types, in registration order.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    by_name: IndexMap<String, Type>,
    by_signature: HashMap<Signature, String>,
    dedupe: bool,
}

impl TypeRegistry {
    /// Creates an empty registry.
    ///
    /// # Arguments
    ///
    /// * `dedupe` - Collapse structurally identical types (`sharedTypes`).
    pub fn new(dedupe: bool) -> Self {
        Self {
            dedupe,
            ..Self::default()
        }
    }

    /// Stores a type.
    ///
    /// With deduplication enabled the first type registered for a signature
    /// wins and later equal shapes are discarded. Otherwise a type declared
    /// twice under the same name replaces the earlier one in place.
    pub fn register(&mut self, ty: Type) -> Registration {
        let signature = ty.signature();
        if self.dedupe {
            if let Some(existing) = self.by_signature.get(&signature) {
                return Registration::Duplicate {
                    existing: existing.clone(),
                };
            }
        }

        let name = ty.name().to_string();
        let replaced = match self.by_name.insert(name.clone(), ty) {
            Some(previous) => {
                let stale = previous.signature();
                if self.by_signature.get(&stale) == Some(&name) {
                    self.by_signature.remove(&stale);
                }
                true
            }
            None => false,
        };
        self.by_signature.entry(signature).or_insert(name);

        if replaced {
            Registration::Replaced
        } else {
            Registration::Added
        }
    }

    /// Looks up a type by declared name.
    pub fn get(&self, name: &str) -> Option<&Type> {
        self.by_name.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Type> {
        self.by_name.get_mut(name)
    }

    /// Looks up the name registered for a structural signature.
    pub fn name_for_signature(&self, signature: &Signature) -> Option<&str> {
        self.by_signature.get(signature).map(String::as_str)
    }

    /// Whether a type with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// The linked base type of a complex type, if any.
    pub fn base_of(&self, name: &str) -> Option<&Type> {
        let base = self.get(name)?.as_complex()?.base.as_deref()?;
        self.get(base)
    }

    /// Iterates types in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Type> {
        self.by_name.values()
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Keeps only the types whose name satisfies `keep`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.by_name.retain(|name, _| keep(name));
        let by_name = &self.by_name;
        self.by_signature.retain(|_, name| by_name.contains_key(name));
    }
}
