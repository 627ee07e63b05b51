use database::postgres::DbErr;
use domain_tasks::TaskError;
use secrets::SecretError;
use thiserror::Error;

/// Failures during process bootstrap.
///
/// All variants are fatal: a process that cannot complete its wiring serves
/// no traffic, and the platform starts a fresh one.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to resolve database secret: {0}")]
    SecretLookup(#[source] SecretError),

    #[error("database secret has an invalid format: {0}")]
    SecretFormat(#[source] SecretError),

    #[error("failed to open database connection: {0}")]
    Connection(#[source] DbErr),
}

/// Failures during a single invocation.
///
/// The gateway boundary collapses every variant into one uniform failed
/// result; the distinction exists for logs and tests.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("failed to get tasks: {0}")]
    GetTasks(#[source] TaskError),

    #[error("failed to serialize tasks response: {0}")]
    Serialize(#[source] serde_json::Error),
}
