use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    context::CallContext,
    entity,
    error::{TaskError, TaskResult},
    models::Task,
    repository::TaskReader,
};

/// PostgreSQL-backed task reader.
///
/// Borrows the process-wide connection pool per call; never owns or
/// re-establishes it.
pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskReader for PgTaskRepository {
    async fn list_tasks(&self, ctx: CallContext) -> TaskResult<Vec<Task>> {
        if ctx.is_expired() {
            return Err(TaskError::Cancelled);
        }

        let query = entity::Entity::find()
            .order_by_asc(entity::Column::CreatedAt)
            .all(&self.db);

        let models = match ctx.deadline() {
            Some(deadline) => match tokio::time::timeout_at(deadline, query).await {
                Ok(result) => result.map_err(TaskError::from)?,
                Err(_) => return Err(TaskError::Cancelled),
            },
            None => query.await.map_err(TaskError::from)?,
        };

        tracing::debug!(count = models.len(), "Listed tasks");
        Ok(models.into_iter().map(Into::into).collect())
    }
}
