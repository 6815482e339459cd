//! # Graft
//!
//! Generate GraphQL type definitions and resolver plans from relational
//! schema metadata.
//!
//! ## Architecture
//!
//! Graft takes introspected schema metadata (tables, primary keys, foreign
//! keys, columns) and derives a GraphQL-shaped API surface:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │           Schema (introspected metadata)                 │
//! │  (tables, primary keys, foreign keys, referenced-by)     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [classify]
//! ┌─────────────────────────────────────────────────────────┐
//! │        Relationships (1:1, 1:N, M:N, belongs-to)         │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [generate]
//! ┌─────────────────────────────────────────────────────────┐
//! │   TableArtifacts (fields, queries, mutations + plans)    │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [resolve]
//! ┌─────────────────────────────────────────────────────────┐
//! │     Resolvers (parameterized SQL against an Executor)    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The output is structured data: field and operation descriptors paired with
//! parameterized SQL plans. Rendering that into SDL text or wiring it into a
//! GraphQL server is left to the caller.
//!
//! ## Example
//!
//! ```ignore
//! use graft::prelude::*;
//!
//! let mut schema = Schema::new();
//! schema.insert("users", Table::new("user_id").with_column("name", Column::text()));
//! schema.transpose_references();
//!
//! let generated = generate(&schema)?;
//! for table in &generated.tables {
//!     println!("{}: {} fields", table.type_name, table.relationship_fields.len());
//! }
//! ```

pub mod classify;
pub mod error;
pub mod generate;
pub mod inflect;
pub mod resolve;
pub mod schema;
pub mod sql;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::classify::{classify, is_join_table, Cardinality, Relationship, RelationshipKind};
    pub use crate::error::{GraftError, GraftResult};
    pub use crate::generate::{generate, FieldDescriptor, GeneratedSchema, Operation, Parameter, ScalarField, TableArtifacts};
    pub use crate::resolve::{Executor, Resolved, Resolver, Row, Rowset};
    pub use crate::schema::{Column, ForeignKey, ScalarKind, Schema, Table};
    pub use crate::sql::{ParamSource, Plan};
}

pub use error::{GraftError, GraftResult};
pub use generate::generate;
pub use schema::Schema;
