//! Normalized schema metadata.
//!
//! This module holds the in-memory representation of an introspected
//! relational schema: tables with a single-column primary key, foreign keys
//! resolved to their referenced table and key, a reverse (`referenced_by`)
//! index, and per-column type/nullability/default metadata.
//!
//! Introspection itself lives outside this crate; callers build a [`Schema`]
//! from whatever their database driver reports, then hand it to
//! [`crate::generate::generate`]. All maps are insertion-ordered so repeated
//! generation over an unchanged schema is byte-identical.

mod scalar;
mod types;

pub use scalar::ScalarKind;
pub use types::{Column, ForeignKey, Schema, Table};
