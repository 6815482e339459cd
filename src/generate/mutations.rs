//! Query and mutation operation generation.
//!
//! Independent of relationship classification: built from raw column
//! metadata only. Parameter rules:
//! - create: every column except the primary key; required iff not-nullable
//!   and without a default.
//! - update: same set plus the primary key as a required identifier, which
//!   is excluded from the SET clause.
//! - delete: the primary key alone.
//!
//! Every mutation returns the affected row. Zero matched rows at resolve
//! time is a not-found result, not a failure.

use serde::{Deserialize, Serialize};

use crate::classify::Cardinality;
use crate::inflect;
use crate::schema::{ScalarKind, Table};
use crate::sql::{ParamSource, Plan};

/// A named operation parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub scalar: ScalarKind,
    pub required: bool,
}

/// A generated query or mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// camelCase operation name.
    pub name: String,
    pub parameters: Vec<Parameter>,
    /// PascalCase type the operation resolves to.
    pub target_type: String,
    pub cardinality: Cardinality,
    pub plan: Plan,
    /// Parameter bindings, in placeholder order.
    pub bindings: Vec<ParamSource>,
}

/// A non-key scalar field on the object type.
///
/// Primary key and foreign key columns are excluded: the key surfaces through
/// lookup arguments and the foreign keys through relationship fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarField {
    pub name: String,
    pub scalar: ScalarKind,
    /// Not-nullable and without a default.
    pub required: bool,
}

/// Scalar fields for a table's object type.
pub fn scalar_fields(table: &Table) -> Vec<ScalarField> {
    table
        .columns
        .iter()
        .filter(|(name, _)| *name != &table.primary_key && !table.foreign_keys.contains_key(*name))
        .map(|(name, column)| ScalarField {
            name: name.clone(),
            scalar: ScalarKind::classify(&column.data_type),
            required: !column.is_nullable && column.default_value.is_none(),
        })
        .collect()
}

/// Primary-key lookup query.
///
/// Named after the singular table name; when the table name is already
/// singular a `ByID` suffix keeps it from colliding with the object type's
/// field namespace.
pub fn primary_key_query(table_name: &str, table: &Table) -> Operation {
    let singular = inflect::singularize(table_name);
    let mut name = inflect::singular_camel(table_name);
    if singular == table_name {
        name.push_str("ByID");
    }
    Operation {
        name,
        parameters: vec![Parameter {
            name: table.primary_key.clone(),
            scalar: ScalarKind::Id,
            required: true,
        }],
        target_type: inflect::type_name(table_name),
        cardinality: Cardinality::One,
        plan: Plan::SelectByKey {
            table: table_name.to_string(),
            key: table.primary_key.clone(),
        },
        bindings: vec![ParamSource::Arg(table.primary_key.clone())],
    }
}

/// All-rows query.
pub fn all_rows_query(table_name: &str) -> Operation {
    Operation {
        name: inflect::plural_camel(table_name),
        parameters: Vec::new(),
        target_type: inflect::type_name(table_name),
        cardinality: Cardinality::Many,
        plan: Plan::SelectAll {
            table: table_name.to_string(),
        },
        bindings: Vec::new(),
    }
}

/// Columns that participate in create/update, in column order.
fn value_columns(table: &Table) -> Vec<String> {
    table
        .columns
        .keys()
        .filter(|name| *name != &table.primary_key)
        .cloned()
        .collect()
}

fn value_parameters(table: &Table) -> Vec<Parameter> {
    table
        .columns
        .iter()
        .filter(|(name, _)| *name != &table.primary_key)
        .map(|(name, column)| Parameter {
            name: name.clone(),
            scalar: ScalarKind::classify(&column.data_type),
            required: !column.is_nullable && column.default_value.is_none(),
        })
        .collect()
}

/// Create mutation: primary key excluded (assigned by the store).
pub fn create_mutation(table_name: &str, table: &Table) -> Operation {
    let columns = value_columns(table);
    let bindings = columns.iter().cloned().map(ParamSource::Arg).collect();
    Operation {
        name: inflect::operation_name(&format!(
            "create_{}",
            inflect::singularize(table_name)
        )),
        parameters: value_parameters(table),
        target_type: inflect::type_name(table_name),
        cardinality: Cardinality::One,
        plan: Plan::Insert {
            table: table_name.to_string(),
            columns,
        },
        bindings,
    }
}

/// Update mutation: value columns plus the primary key as the required
/// identifying parameter, bound last and excluded from SET.
pub fn update_mutation(table_name: &str, table: &Table) -> Operation {
    let set = value_columns(table);
    let mut parameters = value_parameters(table);
    let pk_scalar = table
        .columns
        .get(&table.primary_key)
        .map(|c| ScalarKind::classify(&c.data_type))
        .unwrap_or(ScalarKind::Id);
    parameters.push(Parameter {
        name: table.primary_key.clone(),
        scalar: pk_scalar,
        required: true,
    });

    let mut bindings: Vec<ParamSource> = set.iter().cloned().map(ParamSource::Arg).collect();
    bindings.push(ParamSource::Arg(table.primary_key.clone()));

    Operation {
        name: inflect::operation_name(&format!(
            "update_{}",
            inflect::singularize(table_name)
        )),
        parameters,
        target_type: inflect::type_name(table_name),
        cardinality: Cardinality::One,
        plan: Plan::Update {
            table: table_name.to_string(),
            set,
            key: table.primary_key.clone(),
        },
        bindings,
    }
}

/// Delete mutation: the primary key is the only parameter.
pub fn delete_mutation(table_name: &str, table: &Table) -> Operation {
    Operation {
        name: inflect::operation_name(&format!(
            "delete_{}",
            inflect::singularize(table_name)
        )),
        parameters: vec![Parameter {
            name: table.primary_key.clone(),
            scalar: ScalarKind::Id,
            required: true,
        }],
        target_type: inflect::type_name(table_name),
        cardinality: Cardinality::One,
        plan: Plan::Delete {
            table: table_name.to_string(),
            key: table.primary_key.clone(),
        },
        bindings: vec![ParamSource::Arg(table.primary_key.clone())],
    }
}
