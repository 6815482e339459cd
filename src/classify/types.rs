//! Relationship edge types.

use serde::{Deserialize, Serialize};

/// Whether a field resolves to a single row or a row collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinality {
    One,
    Many,
}

/// How two tables are linked, carrying the key columns the resolver query
/// needs for each shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipKind {
    /// Symmetric back-reference: the target also lists the source in its
    /// own `referenced_by`. Resolves to a single row.
    OneToOne {
        /// Foreign key column on the target pointing at the source.
        foreign_key: String,
    },
    /// The target's rows each point at exactly one source row; the source
    /// exposes a list field.
    OneToMany {
        /// Foreign key column on the target pointing at the source.
        foreign_key: String,
    },
    /// The target is reached through a join table bridging it to the source.
    ManyToMany {
        /// The join table.
        bridge: String,
        /// Bridge column pointing back at the source.
        bridge_source_key: String,
        /// Bridge column pointing at the target.
        bridge_target_key: String,
        /// Primary key of the target, joined against `bridge_target_key`.
        target_primary_key: String,
    },
    /// The source owns a foreign key to the target. Resolves to a single row.
    BelongsTo {
        /// Foreign key column on the source.
        local_column: String,
        /// Referenced column on the target.
        reference_key: String,
    },
}

/// A derived relationship edge. Transient: recomputed per generation pass,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// The table being classified.
    pub source: String,
    /// The table the generated field resolves to.
    pub target: String,
    pub kind: RelationshipKind,
}

impl Relationship {
    /// Result cardinality of the generated field.
    pub fn cardinality(&self) -> Cardinality {
        match self.kind {
            RelationshipKind::OneToOne { .. } | RelationshipKind::BelongsTo { .. } => {
                Cardinality::One
            }
            RelationshipKind::OneToMany { .. } | RelationshipKind::ManyToMany { .. } => {
                Cardinality::Many
            }
        }
    }
}
