//! Schema, table and column metadata types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{GraftError, GraftResult};

/// Column metadata as reported by introspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Storage type name, e.g. `character varying` or `integer`.
    pub data_type: String,
    /// Whether the column accepts NULL.
    pub is_nullable: bool,
    /// Default expression, if any.
    pub default_value: Option<String>,
}

impl Column {
    /// Create a column with an explicit storage type.
    pub fn new(data_type: impl Into<String>) -> Self {
        Self {
            data_type: data_type.into(),
            is_nullable: false,
            default_value: None,
        }
    }

    /// Shorthand for a non-nullable `integer` column.
    pub fn integer() -> Self {
        Self::new("integer")
    }

    /// Shorthand for a non-nullable `character varying` column.
    pub fn text() -> Self {
        Self::new("character varying")
    }

    /// Mark the column as nullable.
    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    /// Set a default expression.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default_value = Some(default.into());
        self
    }
}

/// A single-column foreign key, resolved to its referenced table and key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Table the key points at.
    pub reference_table: String,
    /// Column on the referenced table (normally its primary key).
    pub reference_key: String,
}

impl ForeignKey {
    pub fn new(reference_table: impl Into<String>, reference_key: impl Into<String>) -> Self {
        Self {
            reference_table: reference_table.into(),
            reference_key: reference_key.into(),
        }
    }
}

/// Metadata for one table.
///
/// `referenced_by` is the transpose of all foreign keys across the schema:
/// it maps each referencing table's name to the foreign key column on that
/// table pointing back here. Callers can populate it directly or derive it
/// with [`Schema::transpose_references`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// The single-column primary key. Composite keys are unsupported.
    pub primary_key: String,
    /// Local column name -> referenced table/key.
    pub foreign_keys: IndexMap<String, ForeignKey>,
    /// Referencing table name -> foreign key column on that table.
    pub referenced_by: IndexMap<String, String>,
    /// Column name -> column metadata.
    pub columns: IndexMap<String, Column>,
}

impl Table {
    /// Create a table with the given primary key and an `integer` key column.
    pub fn new(primary_key: impl Into<String>) -> Self {
        let primary_key = primary_key.into();
        let mut columns = IndexMap::new();
        columns.insert(primary_key.clone(), Column::integer());
        Self {
            primary_key,
            foreign_keys: IndexMap::new(),
            referenced_by: IndexMap::new(),
            columns,
        }
    }

    /// Add a column.
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Self {
        self.columns.insert(name.into(), column);
        self
    }

    /// Add a foreign key column (also registers it as an `integer` column).
    pub fn with_foreign_key(
        mut self,
        column: impl Into<String>,
        reference_table: impl Into<String>,
        reference_key: impl Into<String>,
    ) -> Self {
        let column = column.into();
        self.columns
            .entry(column.clone())
            .or_insert_with(Column::integer);
        self.foreign_keys
            .insert(column, ForeignKey::new(reference_table, reference_key));
        self
    }
}

/// An introspected schema: insertion-ordered map of table name -> [`Table`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    tables: IndexMap<String, Table>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a table, replacing any previous entry with the same name.
    pub fn insert(&mut self, name: impl Into<String>, table: Table) {
        self.tables.insert(name.into(), table);
    }

    /// Look up a table by name.
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Iterate tables in insertion order.
    pub fn tables(&self) -> impl Iterator<Item = (&String, &Table)> {
        self.tables.iter()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Rebuild every table's `referenced_by` index from the union of all
    /// foreign keys.
    ///
    /// Foreign keys pointing at tables not present in the schema are left for
    /// [`Schema::validate`] to report; this pass only records the edges it
    /// can resolve.
    pub fn transpose_references(&mut self) {
        for table in self.tables.values_mut() {
            table.referenced_by.clear();
        }

        let edges: Vec<(String, String, String)> = self
            .tables
            .iter()
            .flat_map(|(name, table)| {
                table.foreign_keys.iter().map(move |(column, fk)| {
                    (fk.reference_table.clone(), name.clone(), column.clone())
                })
            })
            .collect();

        for (referenced, referencing, column) in edges {
            if let Some(table) = self.tables.get_mut(&referenced) {
                table.referenced_by.insert(referencing, column);
            }
        }
    }

    /// Check schema consistency: every foreign key must reference a table
    /// that exists and has a primary key.
    pub fn validate(&self) -> GraftResult<()> {
        for (name, table) in &self.tables {
            for (column, fk) in &table.foreign_keys {
                let referenced = self.tables.get(&fk.reference_table).ok_or_else(|| {
                    GraftError::DanglingReference {
                        table: name.clone(),
                        column: column.clone(),
                        references: fk.reference_table.clone(),
                    }
                })?;
                if referenced.primary_key.is_empty() {
                    return Err(GraftError::MissingPrimaryKey {
                        table: fk.reference_table.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
