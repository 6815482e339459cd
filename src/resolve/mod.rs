//! Resolver runtime.
//!
//! Pairs generated descriptors with the data-access collaborator. The crate
//! does not talk to a database itself: callers implement [`Executor`] over
//! their driver, and a [`Resolver`] binds parameters from the parent row and
//! argument map, renders its plan, and shapes the rowset into the field's
//! cardinality.
//!
//! Resolvers are stateless between invocations and independently invokable;
//! nothing here caches, retries or orders calls relative to one another.
//! Execution failure is recovered at this boundary as a field-level error,
//! never a panic, and zero rows for a single-cardinality field is a valid
//! not-found value.

mod error;

pub use error::{ExecuteError, ResolveError};

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::trace;

use crate::classify::Cardinality;
use crate::generate::{FieldDescriptor, Operation};
use crate::sql::{ParamSource, Plan};

/// One result row: column name -> value, in select order.
pub type Row = IndexMap<String, Value>;

/// An ordered sequence of rows.
pub type Rowset = Vec<Row>;

/// The data-access seam. Implemented by the caller over their driver.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Run a parameterized query. `params` are positional, matching the
    /// statement's `$1..$n` placeholders.
    async fn execute(&self, sql: &str, params: &[Value]) -> Result<Rowset, ExecuteError>;
}

/// A shaped resolution result.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// Single-cardinality: the first row, or `None` for not-found.
    Row(Option<Row>),
    /// List-cardinality: the full rowset.
    Rows(Rowset),
}

/// A field or operation bound to its resolver plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolver {
    pub field: String,
    pub cardinality: Cardinality,
    pub plan: Plan,
    pub bindings: Vec<ParamSource>,
}

impl Resolver {
    /// Resolver for a relationship field.
    pub fn for_field(field: &FieldDescriptor) -> Self {
        Self {
            field: field.name.clone(),
            cardinality: field.cardinality,
            plan: field.plan.clone(),
            bindings: field.bindings.clone(),
        }
    }

    /// Resolver for a query or mutation.
    pub fn for_operation(op: &Operation) -> Self {
        Self {
            field: op.name.clone(),
            cardinality: op.cardinality,
            plan: op.plan.clone(),
            bindings: op.bindings.clone(),
        }
    }

    /// Execute the plan and shape the result.
    ///
    /// `Parent` bindings read from `parent` and are an error when the column
    /// is absent. `Arg` bindings read from `args`; an absent argument binds
    /// SQL NULL, since optional parameters are legitimately omitted.
    pub async fn resolve(
        &self,
        executor: &dyn Executor,
        parent: Option<&Row>,
        args: &Row,
    ) -> Result<Resolved, ResolveError> {
        let mut params = Vec::with_capacity(self.bindings.len());
        for binding in &self.bindings {
            match binding {
                ParamSource::Arg(name) => {
                    params.push(args.get(name).cloned().unwrap_or(Value::Null));
                }
                ParamSource::Parent(column) => {
                    let value = parent.and_then(|row| row.get(column)).cloned().ok_or_else(
                        || ResolveError::MissingParentColumn {
                            field: self.field.clone(),
                            column: column.clone(),
                        },
                    )?;
                    params.push(value);
                }
            }
        }

        let sql = self.plan.to_sql();
        trace!(field = %self.field, sql = %sql, "resolving");
        let rows = executor.execute(&sql, &params).await?;

        Ok(match self.cardinality {
            Cardinality::One => Resolved::Row(rows.into_iter().next()),
            Cardinality::Many => Resolved::Rows(rows),
        })
    }
}

/// Resolve several fields of one parent row concurrently.
///
/// Failures stay per-field: each entry of the result is the field name and
/// its own outcome, so one failing field never aborts its siblings.
pub async fn resolve_all(
    resolvers: &[Resolver],
    executor: &dyn Executor,
    parent: &Row,
) -> Vec<(String, Result<Resolved, ResolveError>)> {
    let args = Row::new();
    let futures: Vec<_> = resolvers
        .iter()
        .map(|r| async {
            let outcome = r.resolve(executor, Some(parent), &args).await;
            (r.field.clone(), outcome)
        })
        .collect();
    futures::future::join_all(futures).await
}
