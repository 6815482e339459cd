//! Error types for schema validation and generation.

use thiserror::Error;

/// Result type for generation operations.
pub type GraftResult<T> = Result<T, GraftError>;

/// Errors that can occur while validating a schema or generating artifacts.
///
/// These are all fatal at generation time: a schema that names a table which
/// does not exist, or a referenced table without a primary key, must fail the
/// whole pass rather than silently drop the edge.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraftError {
    /// Classification was asked for a table that is not in the schema.
    #[error("unknown table: '{0}'")]
    UnknownTable(String),

    /// A foreign key names a table that does not exist in the schema.
    #[error("dangling foreign key: {table}.{column} references missing table '{references}'")]
    DanglingReference {
        /// Table carrying the foreign key.
        table: String,
        /// Foreign key column.
        column: String,
        /// The missing referenced table.
        references: String,
    },

    /// A referenced table has no primary key to resolve against.
    #[error("referenced table '{table}' has no primary key")]
    MissingPrimaryKey {
        /// The table missing its primary key.
        table: String,
    },
}
