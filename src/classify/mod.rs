//! Relationship classification.
//!
//! Given one table and the full schema snapshot, [`classify`] walks the
//! table's reverse-reference index and decides how each referencing table is
//! linked: one-to-one, one-to-many, or many-to-many through a join table.
//! A final sweep over the table's own foreign keys adds belongs-to edges for
//! relationships only visible from the owning side.
//!
//! Evaluation order is a contract: one-to-one, then one-to-many, then
//! many-to-many, then the direct-foreign-key sweep. First match wins, and a
//! target table never produces more than one edge per source within a pass.

mod engine;
mod types;

pub use engine::{classify, is_join_table};
pub use types::{Cardinality, Relationship, RelationshipKind};
