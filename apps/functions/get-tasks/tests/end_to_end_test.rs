//! End-to-end tests against a real PostgreSQL container.
//!
//! Exercises the full per-invocation path (service → repository → database →
//! response) with the same wiring bootstrap produces, minus the secret
//! resolution — credentials come from the container instead of Secrets
//! Manager.

use chrono::{Duration as ChronoDuration, Utc};
use domain_tasks::{CallContext, PgTaskRepository, TaskService};
use get_tasks_fn::{GatewayRequest, Handler};
use sea_orm::ConnectionTrait;
use test_utils::TestDatabase;

async fn seeded_database() -> (TestDatabase, Vec<String>) {
    let db = TestDatabase::new().await;
    let base = Utc::now() - ChronoDuration::minutes(30);

    let mut titles = Vec::new();
    for (i, (title, status)) in [
        ("file taxes", "todo"),
        ("water plants", "in_progress"),
        ("call dentist", "done"),
    ]
    .iter()
    .enumerate()
    {
        db.create_task(
            title,
            "seeded row",
            status,
            base + ChronoDuration::minutes(i as i64),
        )
        .await;
        titles.push(title.to_string());
    }

    (db, titles)
}

#[tokio::test]
async fn test_three_rows_round_trip_through_the_envelope() {
    let (db, titles) = seeded_database().await;

    let repository = PgTaskRepository::new(db.connection());
    let handler = Handler::new(TaskService::new(repository));

    let response = handler
        .invoke(CallContext::unbounded(), GatewayRequest::default())
        .await
        .unwrap();

    // The envelope itself carries the gateway contract
    let envelope = serde_json::to_value(&response).unwrap();
    assert_eq!(envelope["statusCode"], 200);
    assert_eq!(envelope["headers"]["Content-Type"], "application/json");

    // The body is a string holding the serialized array, in storage order
    let body: serde_json::Value =
        serde_json::from_str(envelope["body"].as_str().unwrap()).unwrap();
    let listed: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(listed, titles);

    let statuses: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["status"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(statuses, ["todo", "in_progress", "done"]);
}

#[tokio::test]
async fn test_query_failure_yields_failed_invocation_without_data() {
    let (db, _titles) = seeded_database().await;

    let repository = PgTaskRepository::new(db.connection());
    let handler = Handler::new(TaskService::new(repository));

    // Break the storage out from under the warm process
    db.connection
        .execute_unprepared("DROP TABLE tasks")
        .await
        .unwrap();

    let result = handler
        .invoke(CallContext::unbounded(), GatewayRequest::default())
        .await;

    assert!(result.is_err(), "a failed query must not produce a 200");
}
