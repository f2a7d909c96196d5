pub mod handlers;
pub mod types;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::error::ResolveError;
use crate::resolver::AccountResolver;

#[derive(Clone)]
pub struct ServerState {
    pub resolver: Arc<AccountResolver>,
}

pub struct ResolverServer {
    state: ServerState,
    bind_addr: String,
}

impl ResolverServer {
    pub fn new(resolver: Arc<AccountResolver>, port: u16) -> Self {
        Self {
            state: ServerState { resolver },
            bind_addr: format!("0.0.0.0:{}", port),
        }
    }

    /// The route table, separated from `start` so tests can serve it on an
    /// ephemeral port.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/verify", post(handlers::handle_verify))
            .route("/health", get(handlers::handle_health))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    pub async fn start(self) -> Result<(), ResolveError> {
        let app = self.router();
        let listener = tokio::net::TcpListener::bind(&self.bind_addr)
            .await
            .map_err(|e| {
                ResolveError::Unexpected(format!("Failed to bind {}: {}", self.bind_addr, e))
            })?;

        info!("Verification server listening on {}", self.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ResolveError::Unexpected(format!("Server failed: {}", e)))
    }
}
