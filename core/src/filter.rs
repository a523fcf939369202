#![deny(missing_docs)]

//! # Operation Filter
//!
//! Narrows a class model to selected operations. The types kept are the
//! ones reachable from those operations through member types and base
//! links; everything else is dropped.

use crate::generator::ClassModel;
use std::collections::{HashSet, VecDeque};
use tracing::{debug, warn};

/// Keeps only the named operations and the types they need.
#[derive(Debug, Clone, Copy)]
pub struct OperationFilter<'a> {
    names: &'a [String],
}

impl<'a> OperationFilter<'a> {
    /// Creates a filter. An empty list keeps everything.
    pub fn new(names: &'a [String]) -> Self {
        Self { names }
    }

    /// Applies the filter.
    pub fn apply(&self, mut model: ClassModel) -> ClassModel {
        if self.names.is_empty() {
            return model;
        }
        let wanted: HashSet<&str> = self.names.iter().map(String::as_str).collect();
        for name in self.names {
            if model.service.operation(name).is_none() {
                warn!(operation = name.as_str(), "filtered operation not found in service");
            }
        }

        model
            .service
            .operations
            .retain(|op| wanted.contains(op.name.as_str()));
        model.methods.retain(|m| wanted.contains(m.name.as_str()));

        let mut queue: VecDeque<String> = VecDeque::new();
        for op in &model.service.operations {
            queue.extend(op.params.iter().map(|p| p.identifier.clone()));
            queue.extend(op.returns.iter().cloned());
        }
        for method in &model.methods {
            queue.push_back(method.request_type.clone());
            queue.push_back(method.response_type.clone());
        }

        let registry = model.service.registry();
        let mut reachable: HashSet<String> = HashSet::new();
        while let Some(name) = queue.pop_front() {
            let Some(ty) = registry.get(&name) else {
                continue;
            };
            if !reachable.insert(name) {
                continue;
            }
            queue.extend(ty.referenced_names().map(str::to_string));
        }

        debug!(
            operations = model.service.operations.len(),
            types = reachable.len(),
            "operation filter applied"
        );
        model
            .service
            .registry_mut()
            .retain(|name| reachable.contains(name));
        model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComplexType, EnumType, Method, Operation, Param, Service, Type, TypeRegistry};

    fn complex(name: &str, members: &[(&str, &str)], base: Option<&str>) -> Type {
        let mut c = ComplexType::new(name, false);
        for (m, t) in members {
            c.add_member(m, t, false);
        }
        c.base = base.map(str::to_string);
        Type::Complex(c)
    }

    fn operation(name: &str) -> Operation {
        Operation {
            name: name.into(),
            params: vec![Param {
                identifier: name.into(),
                rendered: "parameters".into(),
            }],
            returns: Some(format!("{}Response", name)),
            documentation: None,
        }
    }

    fn method(name: &str) -> Method {
        Method {
            name: name.into(),
            request_type: name.into(),
            response_type: format!("{}Response", name),
            params_in: vec![],
            params_out: vec![],
        }
    }

    fn model() -> ClassModel {
        let mut reg = TypeRegistry::new(false);
        reg.register(complex("GetUser", &[("id", "int")], None));
        reg.register(complex("GetUserResponse", &[("user", "User")], Some("Envelope")));
        reg.register(complex("User", &[("status", "Status")], None));
        reg.register(Type::Enum(EnumType::new("Status", None)));
        reg.register(complex("Envelope", &[], None));
        reg.register(complex("Ping", &[], None));
        reg.register(complex("PingResponse", &[], None));
        reg.register(complex("Orphan", &[], None));

        let mut service = Service::new("Users", "Users", None, vec![]).with_types(reg);
        service.add_operation(operation("GetUser"));
        service.add_operation(operation("Ping"));
        ClassModel {
            service,
            methods: vec![method("GetUser"), method("Ping")],
        }
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let filtered = OperationFilter::new(&[]).apply(model());
        assert_eq!(filtered.methods.len(), 2);
        assert_eq!(filtered.types().count(), 8);
    }

    #[test]
    fn test_keeps_reachable_types_only() {
        let names = vec!["GetUser".to_string(), "Unknown".to_string()];
        let filtered = OperationFilter::new(&names).apply(model());

        assert_eq!(filtered.service.operations.len(), 1);
        assert_eq!(filtered.methods.len(), 1);
        let types: Vec<&str> = filtered.types().map(Type::name).collect();
        assert_eq!(
            types,
            vec!["GetUser", "GetUserResponse", "User", "Status", "Envelope"]
        );
    }
}
