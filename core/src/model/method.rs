//! # Methods
//!
//! Callable entities derived from an operation and its resolved
//! request/response types.

use crate::model::types::Member;
use serde::Serialize;

/// A bound operation with concrete input and output members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    /// Operation name.
    pub name: String,
    /// Declared name of the request type.
    pub request_type: String,
    /// Declared name of the response type.
    pub response_type: String,
    /// Members of the request type, in declaration order.
    pub params_in: Vec<Member>,
    /// Members of the response type, in declaration order.
    pub params_out: Vec<Member>,
}
