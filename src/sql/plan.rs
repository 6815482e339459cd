//! Structured query plans.

use serde::{Deserialize, Serialize};

/// Where a positional parameter's value comes from at resolve time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamSource {
    /// A named operation argument.
    Arg(String),
    /// A column of the parent row (relationship fields only).
    Parent(String),
}

/// A parameterized statement, independent of its final text form.
///
/// Placeholders are implied by position: the n-th parameter a plan consumes
/// renders as `$n`, matching the order of the bindings list carried by the
/// descriptor that owns the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plan {
    /// `SELECT * FROM table WHERE key = $1`
    SelectByKey { table: String, key: String },
    /// `SELECT * FROM table`
    SelectAll { table: String },
    /// Many-to-many fetch through a join table:
    /// `SELECT target.* FROM target LEFT OUTER JOIN bridge
    ///  ON target.target_key = bridge.bridge_target_key
    ///  WHERE bridge.bridge_source_key = $1`
    SelectViaBridge {
        target: String,
        /// Primary key of the target table.
        target_key: String,
        bridge: String,
        bridge_target_key: String,
        bridge_source_key: String,
    },
    /// `INSERT INTO table (c1, ..) VALUES ($1, ..) RETURNING *`
    Insert { table: String, columns: Vec<String> },
    /// `UPDATE table SET c1 = $1, .. WHERE key = $n RETURNING *`
    Update {
        table: String,
        set: Vec<String>,
        key: String,
    },
    /// `DELETE FROM table WHERE key = $1 RETURNING *`
    Delete { table: String, key: String },
}

impl Plan {
    /// Number of positional parameters the rendered statement expects.
    pub fn param_count(&self) -> usize {
        match self {
            Plan::SelectAll { .. } => 0,
            Plan::SelectByKey { .. } | Plan::SelectViaBridge { .. } | Plan::Delete { .. } => 1,
            Plan::Insert { columns, .. } => columns.len(),
            Plan::Update { set, .. } => set.len() + 1,
        }
    }

    /// Render to Postgres-style parameterized text.
    pub fn to_sql(&self) -> String {
        super::render::render(self)
    }
}
