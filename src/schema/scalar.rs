//! Storage-type to GraphQL scalar mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The GraphQL scalar a column maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarKind {
    String,
    Int,
    Boolean,
    /// Used for primary-key parameters, never produced by classification.
    Id,
}

impl ScalarKind {
    /// Map a storage type name to a scalar.
    ///
    /// Total: any unrecognized storage type degrades to [`ScalarKind::Int`].
    /// That is a deliberate fallback, not an error path. Dates map to
    /// `String`; there is no dedicated temporal scalar.
    pub fn classify(storage_type: &str) -> Self {
        match storage_type {
            "character varying" | "character" | "text" | "date" => ScalarKind::String,
            "integer" => ScalarKind::Int,
            "boolean" => ScalarKind::Boolean,
            _ => ScalarKind::Int,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarKind::String => "String",
            ScalarKind::Int => "Int",
            ScalarKind::Boolean => "Boolean",
            ScalarKind::Id => "ID",
        };
        write!(f, "{}", name)
    }
}
