#![deny(missing_docs)]

//! # Method Binder
//!
//! Resolves recorded request/response pairings against the finished
//! [`TypeRegistry`] and synthesizes [`Method`]s. An unresolved name is
//! expected for partial schemas: the operation just yields no method.

use crate::assembler::Pairing;
use crate::model::{Method, TypeRegistry};
use tracing::debug;

/// Binds pairings against a read-only registry.
#[derive(Debug, Clone, Copy)]
pub struct MethodBinder<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> MethodBinder<'a> {
    /// Creates a binder over a finished registry.
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Binds a single pairing. `None` when either type name is unknown.
    pub fn bind(&self, pairing: &Pairing) -> Option<Method> {
        let request = self.registry.get(&pairing.request_type);
        let response = self.registry.get(&pairing.response_type);
        let (Some(request), Some(response)) = (request, response) else {
            debug!(
                operation = pairing.operation.as_str(),
                request = pairing.request_type.as_str(),
                response = pairing.response_type.as_str(),
                "request or response type unresolved, no method"
            );
            return None;
        };

        Some(Method {
            name: pairing.operation.clone(),
            request_type: pairing.request_type.clone(),
            response_type: pairing.response_type.clone(),
            params_in: request.members().to_vec(),
            params_out: response.members().to_vec(),
        })
    }

    /// Binds all pairings, keeping their order and skipping unresolved ones.
    pub fn bind_all<'p>(&self, pairings: impl IntoIterator<Item = &'p Pairing>) -> Vec<Method> {
        pairings.into_iter().filter_map(|p| self.bind(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComplexType, EnumType, Type};
    use pretty_assertions::assert_eq;

    fn pairing(op: &str, req: &str, res: &str) -> Pairing {
        Pairing {
            operation: op.into(),
            request_type: req.into(),
            response_type: res.into(),
        }
    }

    fn registry() -> TypeRegistry {
        let mut reg = TypeRegistry::new(false);
        for (name, members) in [
            ("GetUser", vec![("id", "int", false)]),
            ("GetUserResponse", vec![("name", "string", false), ("email", "string", true)]),
            ("AddUser", vec![("name", "string", false)]),
            ("AddUserResponse", vec![]),
            ("DeleteUser", vec![("id", "int", false)]),
            ("DeleteUserResponse", vec![("ok", "boolean", false)]),
        ] {
            let mut c = ComplexType::new(name, false);
            for (m, t, n) in members {
                c.add_member(m, t, n);
            }
            reg.register(Type::Complex(c));
        }
        reg.register(Type::Enum(EnumType::new("Status", Some("string"))));
        reg
    }

    #[test]
    fn test_bind_resolved_pairing() {
        let reg = registry();
        let method = MethodBinder::new(&reg)
            .bind(&pairing("GetUser", "GetUser", "GetUserResponse"))
            .unwrap();
        assert_eq!(method.name, "GetUser");
        let ins: Vec<&str> = method.params_in.iter().map(|m| m.name.as_str()).collect();
        let outs: Vec<(&str, bool)> = method
            .params_out
            .iter()
            .map(|m| (m.name.as_str(), m.nullable))
            .collect();
        assert_eq!(ins, vec!["id"]);
        assert_eq!(outs, vec![("name", false), ("email", true)]);
    }

    #[test]
    fn test_unresolved_request_or_response_yields_nothing() {
        let reg = registry();
        let binder = MethodBinder::new(&reg);
        assert!(binder.bind(&pairing("X", "Missing", "GetUserResponse")).is_none());
        assert!(binder.bind(&pairing("X", "GetUser", "Missing")).is_none());
    }

    #[test]
    fn test_simple_types_bind_with_no_members() {
        let reg = registry();
        let method = MethodBinder::new(&reg)
            .bind(&pairing("Check", "GetUser", "Status"))
            .unwrap();
        assert!(method.params_out.is_empty());
    }

    #[test]
    fn test_bind_all_keeps_order_and_skips_in_place() {
        let reg = registry();
        let pairings = vec![
            pairing("GetUser", "GetUser", "GetUserResponse"),
            pairing("Broken", "Broken", "BrokenResponse"),
            pairing("AddUser", "AddUser", "AddUserResponse"),
            pairing("DeleteUser", "DeleteUser", "DeleteUserResponse"),
        ];
        let methods = MethodBinder::new(&reg).bind_all(&pairings);
        let names: Vec<&str> = methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["GetUser", "AddUser", "DeleteUser"]);
    }
}
