//! The classification algorithm.

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::error::{GraftError, GraftResult};
use crate::schema::{Column, ForeignKey, Schema, Table};

use super::{Relationship, RelationshipKind};

/// Structural join-table test: true iff the table has exactly one column
/// beyond its foreign keys (its own primary key).
///
/// This is a heuristic, not a semantic guarantee. A table whose single extra
/// column is not a standalone key still satisfies the arithmetic and will be
/// treated as a pure link table. Correct intent is not recoverable from
/// metadata alone, so the arithmetic is the contract.
pub fn is_join_table(
    foreign_keys: &IndexMap<String, ForeignKey>,
    columns: &IndexMap<String, Column>,
) -> bool {
    columns.len() == foreign_keys.len() + 1
}

/// Classify every relationship edge for `table_name`.
///
/// Walks `referenced_by` in insertion order, testing each referencing table
/// against the tie-break contract (one-to-one, one-to-many, many-to-many),
/// then sweeps the table's own foreign keys for belongs-to edges not already
/// covered. The seen-set is scoped to this call; the first classification
/// that touches a target wins and later attempts at the same target are
/// suppressed.
///
/// A referencing table that satisfies no positive test falls through to
/// one-to-many by the stated order; that default is deliberate.
pub fn classify(table_name: &str, schema: &Schema) -> GraftResult<Vec<Relationship>> {
    let table = schema
        .get(table_name)
        .ok_or_else(|| GraftError::UnknownTable(table_name.to_string()))?;

    let mut seen: IndexSet<String> = IndexSet::new();
    let mut edges = Vec::new();

    for (ref_name, fk_column) in &table.referenced_by {
        let ref_table = schema.get(ref_name).ok_or_else(|| {
            GraftError::DanglingReference {
                table: ref_name.clone(),
                column: fk_column.clone(),
                references: table_name.to_string(),
            }
        })?;

        if ref_table.referenced_by.contains_key(table_name) {
            push_edge(
                &mut edges,
                &mut seen,
                table_name,
                ref_name,
                RelationshipKind::OneToOne {
                    foreign_key: fk_column.clone(),
                },
            );
        } else if !is_join_table(&ref_table.foreign_keys, &ref_table.columns) {
            push_edge(
                &mut edges,
                &mut seen,
                table_name,
                ref_name,
                RelationshipKind::OneToMany {
                    foreign_key: fk_column.clone(),
                },
            );
        } else {
            // The referencing table is a join table. Every bridge foreign key
            // that does not point back at the source names a many-to-many
            // partner; a bridge with more than two keys yields one edge each.
            many_to_many_edges(
                &mut edges,
                &mut seen,
                table_name,
                ref_name,
                fk_column,
                ref_table,
                schema,
            )?;
        }
    }

    // Completeness sweep: relationships visible only from the owning side.
    for (local_column, fk) in &table.foreign_keys {
        if schema.get(&fk.reference_table).is_none() {
            return Err(GraftError::DanglingReference {
                table: table_name.to_string(),
                column: local_column.clone(),
                references: fk.reference_table.clone(),
            });
        }
        push_edge(
            &mut edges,
            &mut seen,
            table_name,
            &fk.reference_table,
            RelationshipKind::BelongsTo {
                local_column: local_column.clone(),
                reference_key: fk.reference_key.clone(),
            },
        );
    }

    debug!(
        table = table_name,
        edges = edges.len(),
        "classified relationships"
    );

    Ok(edges)
}

fn many_to_many_edges(
    edges: &mut Vec<Relationship>,
    seen: &mut IndexSet<String>,
    source: &str,
    bridge_name: &str,
    bridge_source_key: &str,
    bridge: &Table,
    schema: &Schema,
) -> GraftResult<()> {
    for (bridge_column, fk) in &bridge.foreign_keys {
        if fk.reference_table == source {
            continue;
        }
        let partner = schema.get(&fk.reference_table).ok_or_else(|| {
            GraftError::DanglingReference {
                table: bridge_name.to_string(),
                column: bridge_column.clone(),
                references: fk.reference_table.clone(),
            }
        })?;
        if partner.primary_key.is_empty() {
            return Err(GraftError::MissingPrimaryKey {
                table: fk.reference_table.clone(),
            });
        }
        push_edge(
            edges,
            seen,
            source,
            &fk.reference_table,
            RelationshipKind::ManyToMany {
                bridge: bridge_name.to_string(),
                bridge_source_key: bridge_source_key.to_string(),
                bridge_target_key: bridge_column.clone(),
                target_primary_key: partner.primary_key.clone(),
            },
        );
    }
    Ok(())
}

/// Add an edge unless the target has already been classified for this source.
fn push_edge(
    edges: &mut Vec<Relationship>,
    seen: &mut IndexSet<String>,
    source: &str,
    target: &str,
    kind: RelationshipKind,
) {
    if seen.insert(target.to_lowercase()) {
        edges.push(Relationship {
            source: source.to_string(),
            target: target.to_string(),
            kind,
        });
    }
}
