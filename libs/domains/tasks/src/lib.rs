//! Tasks Domain
//!
//! Read-side domain for listing tasks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← orchestration, seam for future business rules
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ TaskReader  │  ← read capability (trait + PostgreSQL implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← domain entity, status enum
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{CallContext, PgTaskRepository, TaskService};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://...").await?;
//!
//! let repository = PgTaskRepository::new(db);
//! let service = TaskService::new(repository);
//! let tasks = service.get_tasks(CallContext::unbounded()).await?;
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod entity;
pub mod error;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use context::CallContext;
pub use error::{TaskError, TaskResult};
pub use models::{Task, TaskStatus};
pub use postgres::PgTaskRepository;
pub use repository::TaskReader;
pub use service::TaskService;
