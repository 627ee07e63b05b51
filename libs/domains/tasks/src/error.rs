use sea_orm::DbErr;
use thiserror::Error;

/// Failures surfaced by the tasks domain.
///
/// Carries the underlying cause as a `#[source]` and, where a layer adds
/// context, the name of the operation that failed — callers and tests can
/// inspect the chain instead of parsing strings.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task query failed: {source}")]
    Query {
        #[source]
        source: DbErr,
    },

    #[error("call cancelled before the task query completed")]
    Cancelled,

    #[error("{operation} failed: {source}")]
    Operation {
        operation: &'static str,
        #[source]
        source: Box<TaskError>,
    },
}

pub type TaskResult<T> = Result<T, TaskError>;

impl TaskError {
    /// Wrap this error with the name of the operation that failed
    pub fn in_operation(self, operation: &'static str) -> Self {
        Self::Operation {
            operation,
            source: Box::new(self),
        }
    }

    /// The root failure, unwrapping any operation context
    pub fn root(&self) -> &TaskError {
        match self {
            Self::Operation { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.root(), Self::Cancelled)
    }
}

impl From<DbErr> for TaskError {
    fn from(source: DbErr) -> Self {
        Self::Query { source }
    }
}
