//! Shared fixtures for the function's integration tests

use async_trait::async_trait;
use chrono::{Duration, Utc};
use database::postgres::DbErr;
use domain_tasks::{CallContext, Task, TaskError, TaskReader, TaskResult, TaskStatus};
use uuid::Uuid;

/// In-memory reader returning a fixed listing
pub struct FixedReader {
    pub tasks: Vec<Task>,
}

#[async_trait]
impl TaskReader for FixedReader {
    async fn list_tasks(&self, ctx: CallContext) -> TaskResult<Vec<Task>> {
        if ctx.is_expired() {
            return Err(TaskError::Cancelled);
        }
        Ok(self.tasks.clone())
    }
}

/// Reader that always fails like a broken database
pub struct FailingReader;

#[async_trait]
impl TaskReader for FailingReader {
    async fn list_tasks(&self, _ctx: CallContext) -> TaskResult<Vec<Task>> {
        Err(TaskError::from(DbErr::Custom(
            "connection reset by peer".to_string(),
        )))
    }
}

/// Build `n` tasks with ascending creation times
pub fn sample_tasks(n: usize) -> Vec<Task> {
    let base = Utc::now() - Duration::hours(1);
    (0..n)
        .map(|i| {
            let created_at = base + Duration::minutes(i as i64);
            Task {
                id: Uuid::now_v7(),
                title: format!("task {}", i + 1),
                description: format!("description {}", i + 1),
                status: TaskStatus::Todo,
                created_at,
                updated_at: created_at,
            }
        })
        .collect()
}
