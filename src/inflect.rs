//! String inflection utilities for field and type naming.
//!
//! Field names are derived from table names: camelCase singular for
//! single-cardinality fields, camelCase plural for collections, PascalCase
//! singular for type names. Uses the `inflector` crate with additional
//! handling for irregular plurals that show up in database schemas.

use inflector::Inflector;

/// Irregular plurals that inflector doesn't handle well for database contexts.
static IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("datum", "data"),
    ("medium", "media"),
    ("index", "indices"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
    ("status", "statuses"),
];

/// Pluralize a word, handling irregulars first then falling back to inflector.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    let lower = word.to_lowercase();
    for (singular, plural) in IRREGULAR_PLURALS {
        if lower == *singular || lower == *plural {
            return plural.to_string();
        }
    }
    word.to_plural()
}

/// Singularize a word, handling irregulars first then falling back to inflector.
pub fn singularize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    let lower = word.to_lowercase();
    for (singular, plural) in IRREGULAR_PLURALS {
        if lower == *plural || lower == *singular {
            return singular.to_string();
        }
    }
    word.to_singular()
}

/// camelCase field name for a single-cardinality field on `table`.
pub fn singular_camel(table: &str) -> String {
    singularize(table).to_camel_case()
}

/// camelCase field name for a collection field on `table`.
pub fn plural_camel(table: &str) -> String {
    pluralize(table).to_camel_case()
}

/// PascalCase GraphQL type name for `table`.
pub fn type_name(table: &str) -> String {
    singularize(table).to_pascal_case()
}

/// camelCase operation name from a snake_case stem, e.g. `create_user` -> `createUser`.
pub fn operation_name(stem: &str) -> String {
    stem.to_camel_case()
}
