use graft::classify::Cardinality;
use graft::generate::{
    all_rows_query, create_mutation, delete_mutation, primary_key_query, update_mutation,
};
use graft::schema::{Column, ScalarKind, Table};
use graft::sql::{ParamSource, Plan};

fn users_table() -> Table {
    Table::new("user_id")
        .with_column("name", Column::text())
        .with_column("email", Column::text().nullable())
        .with_column("active", Column::new("boolean").with_default("true"))
        .with_column("age", Column::integer().nullable())
}

#[test]
fn test_create_excludes_primary_key() {
    let op = create_mutation("users", &users_table());
    assert_eq!(op.name, "createUser");
    assert_eq!(op.target_type, "User");
    assert_eq!(op.cardinality, Cardinality::One);

    let names: Vec<&str> = op.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["name", "email", "active", "age"]);
    assert!(!names.contains(&"user_id"));
}

#[test]
fn test_create_required_iff_not_nullable_and_no_default() {
    let op = create_mutation("users", &users_table());
    let required: Vec<bool> = op.parameters.iter().map(|p| p.required).collect();
    // name: not nullable, no default -> required.
    // email: nullable -> optional.
    // active: has default -> optional.
    // age: nullable -> optional.
    assert_eq!(required, [true, false, false, false]);
}

#[test]
fn test_create_plan_and_bindings() {
    let op = create_mutation("users", &users_table());
    assert_eq!(
        op.plan.to_sql(),
        "INSERT INTO users (name, email, active, age) VALUES ($1, $2, $3, $4) RETURNING *"
    );
    assert_eq!(
        op.bindings,
        vec![
            ParamSource::Arg("name".into()),
            ParamSource::Arg("email".into()),
            ParamSource::Arg("active".into()),
            ParamSource::Arg("age".into()),
        ]
    );
}

#[test]
fn test_update_adds_primary_key_as_required_identifier() {
    let op = update_mutation("users", &users_table());
    assert_eq!(op.name, "updateUser");

    let last = op.parameters.last().unwrap();
    assert_eq!(last.name, "user_id");
    assert!(last.required);

    // The primary key identifies the row; it is not part of the SET list.
    assert_eq!(
        op.plan.to_sql(),
        "UPDATE users SET name = $1, email = $2, active = $3, age = $4 \
         WHERE user_id = $5 RETURNING *"
    );
    assert_eq!(op.bindings.last(), Some(&ParamSource::Arg("user_id".into())));
}

#[test]
fn test_delete_takes_exactly_the_primary_key() {
    let op = delete_mutation("users", &users_table());
    assert_eq!(op.name, "deleteUser");
    assert_eq!(op.parameters.len(), 1);
    assert_eq!(op.parameters[0].name, "user_id");
    assert_eq!(op.parameters[0].scalar, ScalarKind::Id);
    assert!(op.parameters[0].required);
    assert_eq!(
        op.plan.to_sql(),
        "DELETE FROM users WHERE user_id = $1 RETURNING *"
    );
}

#[test]
fn test_primary_key_query() {
    let op = primary_key_query("users", &users_table());
    assert_eq!(op.name, "user");
    assert_eq!(op.cardinality, Cardinality::One);
    assert_eq!(op.parameters[0].scalar, ScalarKind::Id);
    assert_eq!(op.plan.to_sql(), "SELECT * FROM users WHERE user_id = $1");
    assert_eq!(op.bindings, vec![ParamSource::Arg("user_id".into())]);
}

#[test]
fn test_primary_key_query_on_singular_table_name() {
    // A table whose name is already singular gets a ByID suffix so the
    // lookup does not collide with the single-row field namespace.
    let op = primary_key_query("profile", &Table::new("profile_id"));
    assert_eq!(op.name, "profileByID");
}

#[test]
fn test_all_rows_query() {
    let op = all_rows_query("users");
    assert_eq!(op.name, "users");
    assert_eq!(op.cardinality, Cardinality::Many);
    assert!(op.parameters.is_empty());
    assert_eq!(op.plan, Plan::SelectAll { table: "users".into() });
    assert!(op.bindings.is_empty());
}
