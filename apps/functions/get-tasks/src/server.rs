//! HTTP adapter and process lifecycle
//!
//! Bootstraps the handler once at startup and exposes it behind a catch-all
//! route: the gateway decides which paths reach this function, so the
//! adapter answers every request the same way. Invocation failures collapse
//! into a single uniform 502 with no body — details go to the logs only.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Router,
};
use domain_tasks::{CallContext, TaskReader};
use eyre::WrapErr;
use tracing::{error, info};

use crate::config::Config;
use crate::handler::Handler;
use crate::trigger::{GatewayRequest, GatewayResponse};

/// Run the function process.
///
/// 1. Loads configuration from the environment
/// 2. Sets up structured logging (JSON for prod, pretty for dev)
/// 3. Bootstraps the handler (secret → credentials → pool → service);
///    any failure here aborts startup
/// 4. Serves the handler over HTTP until shutdown
pub async fn run() -> eyre::Result<()> {
    let config = Config::from_env().wrap_err("Failed to load configuration")?;
    core_config::tracing::init_tracing(&config.environment);

    info!("Bootstrapping get-tasks handler");
    let handler = Handler::bootstrap(&config)
        .await
        .wrap_err("Bootstrap failed; refusing to serve traffic")?;

    let app = router(Arc::new(handler), config.invocation_timeout);

    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", addr))?;
    info!("get-tasks function listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server failed")?;

    info!("get-tasks function shutdown complete");
    Ok(())
}

/// Per-process state shared by every request
pub struct FunctionState<R: TaskReader> {
    handler: Arc<Handler<R>>,
    invocation_timeout: Duration,
}

impl<R: TaskReader> Clone for FunctionState<R> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            invocation_timeout: self.invocation_timeout,
        }
    }
}

/// Build the function router: one catch-all route over the handler.
///
/// Generic over the reader so tests can mount an in-memory implementation.
pub fn router<R: TaskReader + 'static>(
    handler: Arc<Handler<R>>,
    invocation_timeout: Duration,
) -> Router {
    Router::new().fallback(invoke::<R>).with_state(FunctionState {
        handler,
        invocation_timeout,
    })
}

async fn invoke<R: TaskReader + 'static>(
    State(state): State<FunctionState<R>>,
    request: Request,
) -> Response {
    let gateway_request = GatewayRequest {
        path: Some(request.uri().path().to_string()),
        http_method: Some(request.method().to_string()),
        headers: request
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|v| (name.to_string(), v.to_string()))
            })
            .collect(),
        body: None,
    };

    let ctx = CallContext::with_timeout(state.invocation_timeout);
    match state.handler.invoke(ctx, gateway_request).await {
        Ok(response) => into_http(response),
        Err(err) => {
            error!(error = %err, "Invocation failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

fn into_http(response: GatewayResponse) -> Response {
    let mut builder = Response::builder().status(response.status_code);
    for (name, value) in &response.headers {
        builder = builder.header(name, value);
    }
    match builder.body(Body::from(response.body)) {
        Ok(response) => response,
        Err(err) => {
            error!(error = %err, "Failed to build HTTP response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "Failed to listen for shutdown signal");
    }
}
