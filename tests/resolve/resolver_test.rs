use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use graft::classify::Cardinality;
use graft::resolve::{resolve_all, ExecuteError, Executor, Resolved, ResolveError, Resolver, Row, Rowset};
use graft::sql::{ParamSource, Plan};

/// Records every statement it is asked to run and replays canned rows.
struct FakeExecutor {
    rows: Rowset,
    fail: bool,
    calls: Mutex<Vec<(String, Vec<Value>)>>,
}

impl FakeExecutor {
    fn returning(rows: Rowset) -> Self {
        Self {
            rows,
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            rows: Vec::new(),
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Executor for FakeExecutor {
    async fn execute(&self, sql: &str, params: &[Value]) -> Result<Rowset, ExecuteError> {
        self.calls
            .lock()
            .unwrap()
            .push((sql.to_string(), params.to_vec()));
        if self.fail {
            return Err(ExecuteError::new("connection refused"));
        }
        Ok(self.rows.clone())
    }
}

fn row(pairs: &[(&str, Value)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn film_field_resolver() -> Resolver {
    Resolver {
        field: "films".into(),
        cardinality: Cardinality::Many,
        plan: Plan::SelectViaBridge {
            target: "films".into(),
            target_key: "film_id".into(),
            bridge: "people_in_films".into(),
            bridge_target_key: "film_id".into(),
            bridge_source_key: "person_id".into(),
        },
        bindings: vec![ParamSource::Parent("person_id".into())],
    }
}

#[tokio::test]
async fn test_list_resolution_returns_all_rows() {
    let rows = vec![
        row(&[("film_id", json!(1)), ("title", json!("Alien"))]),
        row(&[("film_id", json!(2)), ("title", json!("Solaris"))]),
    ];
    let executor = FakeExecutor::returning(rows.clone());
    let parent = row(&[("person_id", json!(7)), ("name", json!("Kim"))]);

    let resolved = film_field_resolver()
        .resolve(&executor, Some(&parent), &Row::new())
        .await
        .unwrap();
    assert_eq!(resolved, Resolved::Rows(rows));

    // Parent binding flows into the positional parameters.
    let calls = executor.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].0.contains("WHERE people_in_films.person_id = $1"));
    assert_eq!(calls[0].1, vec![json!(7)]);
}

#[tokio::test]
async fn test_single_resolution_takes_first_row() {
    let executor = FakeExecutor::returning(vec![
        row(&[("user_id", json!(1))]),
        row(&[("user_id", json!(2))]),
    ]);
    let resolver = Resolver {
        field: "user".into(),
        cardinality: Cardinality::One,
        plan: Plan::SelectByKey {
            table: "users".into(),
            key: "user_id".into(),
        },
        bindings: vec![ParamSource::Arg("user_id".into())],
    };

    let args = row(&[("user_id", json!(1))]);
    let resolved = resolver.resolve(&executor, None, &args).await.unwrap();
    assert_eq!(resolved, Resolved::Row(Some(row(&[("user_id", json!(1))]))));
}

#[tokio::test]
async fn test_not_found_is_a_value_not_an_error() {
    let executor = FakeExecutor::returning(Vec::new());
    let resolver = Resolver {
        field: "user".into(),
        cardinality: Cardinality::One,
        plan: Plan::SelectByKey {
            table: "users".into(),
            key: "user_id".into(),
        },
        bindings: vec![ParamSource::Arg("user_id".into())],
    };

    let args = row(&[("user_id", json!(99))]);
    let resolved = resolver.resolve(&executor, None, &args).await.unwrap();
    assert_eq!(resolved, Resolved::Row(None));
}

#[tokio::test]
async fn test_missing_optional_argument_binds_null() {
    let executor = FakeExecutor::returning(vec![row(&[("user_id", json!(1))])]);
    let resolver = Resolver {
        field: "createUser".into(),
        cardinality: Cardinality::One,
        plan: Plan::Insert {
            table: "users".into(),
            columns: vec!["name".into(), "email".into()],
        },
        bindings: vec![
            ParamSource::Arg("name".into()),
            ParamSource::Arg("email".into()),
        ],
    };

    let args = row(&[("name", json!("Kim"))]);
    resolver.resolve(&executor, None, &args).await.unwrap();

    let calls = executor.calls();
    assert_eq!(calls[0].1, vec![json!("Kim"), Value::Null]);
}

#[tokio::test]
async fn test_missing_parent_column_is_a_field_error() {
    let executor = FakeExecutor::returning(Vec::new());
    let parent = row(&[("name", json!("Kim"))]);

    let err = film_field_resolver()
        .resolve(&executor, Some(&parent), &Row::new())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ResolveError::MissingParentColumn {
            field: "films".into(),
            column: "person_id".into(),
        }
    );
    // The executor was never reached.
    assert!(executor.calls().is_empty());
}

#[tokio::test]
async fn test_execution_failure_is_field_level() {
    let executor = FakeExecutor::failing();
    let parent = row(&[("person_id", json!(7))]);

    let err = film_field_resolver()
        .resolve(&executor, Some(&parent), &Row::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::Execution(_)));
    assert!(err.to_string().contains("connection refused"));
}

#[tokio::test]
async fn test_resolve_all_keeps_failures_per_field() {
    let executor = FakeExecutor::returning(vec![row(&[("film_id", json!(1))])]);
    let parent = row(&[("person_id", json!(7))]);

    let broken = Resolver {
        field: "broken".into(),
        cardinality: Cardinality::One,
        plan: Plan::SelectByKey {
            table: "ghosts".into(),
            key: "ghost_id".into(),
        },
        bindings: vec![ParamSource::Parent("ghost_id".into())],
    };

    let outcomes = resolve_all(&[film_field_resolver(), broken], &executor, &parent).await;
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].0, "films");
    assert!(outcomes[0].1.is_ok());
    assert_eq!(outcomes[1].0, "broken");
    assert!(outcomes[1].1.is_err());
}
