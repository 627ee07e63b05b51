use chrono::{DateTime, Utc};
use domain_tasks::{Task, TaskStatus};
use serde::Serialize;
use uuid::Uuid;

/// Wire projection of a single task
#[derive(Debug, Clone, Serialize)]
pub struct TaskDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskDto {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

/// Ordered wire projection of a task listing.
///
/// Serializes as a JSON array with one element per task, in input order;
/// an empty listing serializes as `[]`, never `null`. Built fresh per
/// invocation and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct TasksResponse {
    tasks: Vec<TaskDto>,
}

impl TasksResponse {
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: tasks.into_iter().map(Into::into).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
