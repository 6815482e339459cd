//! Parameterized SQL plans.
//!
//! Generated operations never interpolate values into query text. Each
//! descriptor carries a structured [`Plan`] plus an ordered list of
//! [`ParamSource`] bindings; rendering turns the plan into Postgres-style
//! text with positional placeholders `$1..$n` numbered in binding order.
//! Keeping the plan structured means the classifier and generators are
//! testable without string-matching assertions, and the text layer is
//! swappable.

mod plan;
mod render;

pub use plan::{ParamSource, Plan};
