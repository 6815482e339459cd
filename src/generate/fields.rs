//! Relationship field generation.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::classify::{Cardinality, Relationship, RelationshipKind};
use crate::error::{GraftError, GraftResult};
use crate::inflect;
use crate::schema::Schema;
use crate::sql::{ParamSource, Plan};

/// A generated relationship field on an object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// camelCase field name: singular for single rows, plural for lists.
    pub name: String,
    /// PascalCase object type the field resolves to.
    pub target_type: String,
    pub cardinality: Cardinality,
    /// Parameterized query resolving the field.
    pub plan: Plan,
    /// Parameter bindings, in placeholder order.
    pub bindings: Vec<ParamSource>,
}

/// Build the field descriptor for one relationship edge.
///
/// Returns `Ok(None)` when the derived field name case-folds to one already
/// generated for this source type; the first field wins, matching the
/// classifier's dedup rule.
pub fn relationship_field(
    edge: &Relationship,
    schema: &Schema,
    used_names: &mut IndexSet<String>,
) -> GraftResult<Option<FieldDescriptor>> {
    let source = schema
        .get(&edge.source)
        .ok_or_else(|| GraftError::UnknownTable(edge.source.clone()))?;

    let cardinality = edge.cardinality();
    let name = match cardinality {
        Cardinality::One => inflect::singular_camel(&edge.target),
        Cardinality::Many => inflect::plural_camel(&edge.target),
    };
    if !used_names.insert(name.to_lowercase()) {
        return Ok(None);
    }

    let (plan, bindings) = match &edge.kind {
        RelationshipKind::OneToOne { foreign_key }
        | RelationshipKind::OneToMany { foreign_key } => (
            Plan::SelectByKey {
                table: edge.target.clone(),
                key: foreign_key.clone(),
            },
            vec![ParamSource::Parent(source.primary_key.clone())],
        ),
        RelationshipKind::ManyToMany {
            bridge,
            bridge_source_key,
            bridge_target_key,
            target_primary_key,
        } => (
            Plan::SelectViaBridge {
                target: edge.target.clone(),
                target_key: target_primary_key.clone(),
                bridge: bridge.clone(),
                bridge_target_key: bridge_target_key.clone(),
                bridge_source_key: bridge_source_key.clone(),
            },
            vec![ParamSource::Parent(source.primary_key.clone())],
        ),
        RelationshipKind::BelongsTo {
            local_column,
            reference_key,
        } => (
            Plan::SelectByKey {
                table: edge.target.clone(),
                key: reference_key.clone(),
            },
            vec![ParamSource::Parent(local_column.clone())],
        ),
    };

    Ok(Some(FieldDescriptor {
        name,
        target_type: inflect::type_name(&edge.target),
        cardinality,
        plan,
        bindings,
    }))
}
