//! Artifact generation.
//!
//! Turns a validated [`Schema`] into per-table artifacts: object-type scalar
//! fields, relationship fields with resolver plans, and query/mutation
//! operation descriptors. Output is structured data; formatting it into SDL
//! text or a resolver map is the caller's concern.

mod fields;
mod mutations;

pub use fields::{relationship_field, FieldDescriptor};
pub use mutations::{
    all_rows_query, create_mutation, delete_mutation, primary_key_query, scalar_fields,
    update_mutation, Operation, Parameter, ScalarField,
};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::{classify, is_join_table};
use crate::error::GraftResult;
use crate::inflect;
use crate::schema::Schema;

/// Everything generated for one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableArtifacts {
    /// The source table name.
    pub table: String,
    /// PascalCase singular object type name.
    pub type_name: String,
    /// Non-key scalar fields on the object type.
    pub scalar_fields: Vec<ScalarField>,
    /// Relationship fields with their resolver plans.
    pub relationship_fields: Vec<FieldDescriptor>,
    /// Primary-key lookup and all-rows queries.
    pub queries: Vec<Operation>,
    /// Create, update and delete mutations.
    pub mutations: Vec<Operation>,
}

/// The full generation output, in schema insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSchema {
    pub tables: Vec<TableArtifacts>,
}

/// Generate artifacts for every table in the schema.
///
/// Join tables are skipped: they surface only as the implicit bridge of
/// many-to-many fields, never as first-class types. The pass is a pure
/// transformation over the schema snapshot; running it twice on an unchanged
/// schema produces identical output.
pub fn generate(schema: &Schema) -> GraftResult<GeneratedSchema> {
    schema.validate()?;

    let mut tables = Vec::new();
    for (name, table) in schema.tables() {
        // Bridges surface only through many-to-many fields, never as types.
        // The arithmetic alone also matches single-FK tables (2 columns,
        // 1 key), which are real entities, so bridging requires two keys.
        if table.foreign_keys.len() >= 2 && is_join_table(&table.foreign_keys, &table.columns) {
            debug!(table = %name, "skipping join table");
            continue;
        }

        // Field names are unique per source type, case-folded. Relationship
        // fields are checked against each other; the classifier's per-target
        // dedup already prevents same-target collisions.
        let mut used_names: IndexSet<String> = IndexSet::new();
        let mut relationship_fields = Vec::new();
        for edge in classify(name, schema)? {
            if let Some(field) = relationship_field(&edge, schema, &mut used_names)? {
                relationship_fields.push(field);
            }
        }

        let artifacts = TableArtifacts {
            table: name.clone(),
            type_name: inflect::type_name(name),
            scalar_fields: scalar_fields(table),
            relationship_fields,
            queries: vec![primary_key_query(name, table), all_rows_query(name)],
            mutations: vec![
                create_mutation(name, table),
                update_mutation(name, table),
                delete_mutation(name, table),
            ],
        };
        debug!(
            table = %name,
            fields = artifacts.relationship_fields.len(),
            "generated table artifacts"
        );
        tables.push(artifacts);
    }

    Ok(GeneratedSchema { tables })
}
