use database::postgres::{connect_from_config, PostgresConfig};
use domain_tasks::{CallContext, PgTaskRepository, TaskReader, TaskService};
use secrets::{DatabaseCredentials, SecretStore};
use tracing::info;

use crate::config::Config;
use crate::error::{BootstrapError, InvocationError};
use crate::response::TasksResponse;
use crate::trigger::{GatewayRequest, GatewayResponse};

/// Invocation handler.
///
/// Owns the service wired at bootstrap and turns each trigger event into a
/// gateway response. One instance lives for the whole warm process; the
/// pooled connection inside the repository is never re-acquired per call.
pub struct Handler<R: TaskReader> {
    service: TaskService<R>,
}

impl Handler<PgTaskRepository> {
    /// One-time process bootstrap.
    ///
    /// Resolves the database secret, derives the connection config, opens
    /// the pool, and wires the repository and service. Any failure aborts
    /// initialization — the process must not accept traffic half-wired.
    pub async fn bootstrap(config: &Config) -> Result<Self, BootstrapError> {
        let store = SecretStore::new().await;
        let payload = store
            .get_secret(&config.secret_id)
            .await
            .map_err(BootstrapError::SecretLookup)?;

        let credentials =
            DatabaseCredentials::from_json(&payload).map_err(BootstrapError::SecretFormat)?;

        let db = connect_from_config(PostgresConfig::from_credentials(&credentials))
            .await
            .map_err(BootstrapError::Connection)?;

        let repository = PgTaskRepository::new(db);
        let service = TaskService::new(repository);

        info!("Handler bootstrapped; ready to serve invocations");
        Ok(Self::new(service))
    }
}

impl<R: TaskReader> Handler<R> {
    /// Wrap an already-wired service.
    ///
    /// Tests use this with an in-memory reader instead of a real database.
    pub fn new(service: TaskService<R>) -> Self {
        Self { service }
    }

    /// Handle one invocation.
    ///
    /// The request payload is accepted and ignored — the operation has no
    /// parameters. Returns the gateway envelope on success; all failures
    /// propagate for the boundary to collapse into a uniform error result.
    pub async fn invoke(
        &self,
        ctx: CallContext,
        _request: GatewayRequest,
    ) -> Result<GatewayResponse, InvocationError> {
        let tasks = self
            .service
            .get_tasks(ctx)
            .await
            .map_err(InvocationError::GetTasks)?;

        let body = TasksResponse::from_tasks(tasks)
            .to_json()
            .map_err(InvocationError::Serialize)?;

        Ok(GatewayResponse::json(body))
    }
}
