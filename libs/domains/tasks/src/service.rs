use std::sync::Arc;
use tracing::instrument;

use crate::context::CallContext;
use crate::error::TaskResult;
use crate::models::Task;
use crate::repository::TaskReader;

/// Service layer over the task reader.
///
/// Delegates reads unchanged today; this is the seam where authorization or
/// filtering rules would attach without touching the repository or the
/// handler.
#[derive(Clone)]
pub struct TaskService<R: TaskReader> {
    repository: Arc<R>,
}

impl<R: TaskReader> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Return all tasks in query order.
    ///
    /// Failures from the reader are re-raised wrapped with this operation's
    /// context.
    #[instrument(skip(self, ctx))]
    pub async fn get_tasks(&self, ctx: CallContext) -> TaskResult<Vec<Task>> {
        self.repository
            .list_tasks(ctx)
            .await
            .map_err(|err| err.in_operation("get tasks"))
    }
}
