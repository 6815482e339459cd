use graft::error::GraftError;
use graft::schema::{Column, Schema, Table};

fn people_films_schema() -> Schema {
    let mut schema = Schema::new();
    schema.insert(
        "people",
        Table::new("person_id").with_column("name", Column::text()),
    );
    schema.insert(
        "films",
        Table::new("film_id").with_column("title", Column::text()),
    );
    schema.insert(
        "people_in_films",
        Table::new("id")
            .with_foreign_key("person_id", "people", "person_id")
            .with_foreign_key("film_id", "films", "film_id"),
    );
    schema
}

#[test]
fn test_transpose_builds_reverse_index() {
    let mut schema = people_films_schema();
    schema.transpose_references();

    let people = schema.get("people").unwrap();
    assert_eq!(
        people.referenced_by.get("people_in_films"),
        Some(&"person_id".to_string())
    );

    let films = schema.get("films").unwrap();
    assert_eq!(
        films.referenced_by.get("people_in_films"),
        Some(&"film_id".to_string())
    );

    let bridge = schema.get("people_in_films").unwrap();
    assert!(bridge.referenced_by.is_empty());
}

#[test]
fn test_transpose_is_idempotent() {
    let mut schema = people_films_schema();
    schema.transpose_references();
    let once = schema.clone();
    schema.transpose_references();
    assert_eq!(schema, once);
}

#[test]
fn test_validate_accepts_consistent_schema() {
    let mut schema = people_films_schema();
    schema.transpose_references();
    assert!(schema.validate().is_ok());
}

#[test]
fn test_validate_reports_dangling_reference() {
    let mut schema = Schema::new();
    schema.insert(
        "orders",
        Table::new("order_id").with_foreign_key("customer_id", "customers", "customer_id"),
    );

    let err = schema.validate().unwrap_err();
    assert_eq!(
        err,
        GraftError::DanglingReference {
            table: "orders".into(),
            column: "customer_id".into(),
            references: "customers".into(),
        }
    );
    // The error names the offending table and column.
    let message = err.to_string();
    assert!(message.contains("orders"));
    assert!(message.contains("customer_id"));
    assert!(message.contains("customers"));
}

#[test]
fn test_validate_reports_missing_primary_key() {
    let mut schema = Schema::new();
    let mut customers = Table::new("customer_id");
    customers.primary_key = String::new();
    schema.insert("customers", customers);
    schema.insert(
        "orders",
        Table::new("order_id").with_foreign_key("customer_id", "customers", "customer_id"),
    );

    assert_eq!(
        schema.validate().unwrap_err(),
        GraftError::MissingPrimaryKey {
            table: "customers".into()
        }
    );
}

#[test]
fn test_iteration_preserves_insertion_order() {
    let schema = people_films_schema();
    let names: Vec<&String> = schema.tables().map(|(name, _)| name).collect();
    assert_eq!(names, ["people", "films", "people_in_films"]);

    let bridge = schema.get("people_in_films").unwrap();
    let columns: Vec<&String> = bridge.columns.keys().collect();
    assert_eq!(columns, ["id", "person_id", "film_id"]);
}
