use async_trait::async_trait;

use crate::context::CallContext;
use crate::error::TaskResult;
use crate::models::Task;

/// Read capability over the task store.
///
/// The narrow seam between the service layer and storage: the service only
/// ever needs to read, so that is all the trait exposes. Tests substitute an
/// in-memory mock for the PostgreSQL implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskReader: Send + Sync {
    /// List all tasks in query order.
    ///
    /// Exactly one query execution per call; honors the context deadline.
    async fn list_tasks(&self, ctx: CallContext) -> TaskResult<Vec<Task>>;
}
