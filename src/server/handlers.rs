use axum::{extract::State, http::StatusCode, Json};
use tracing::error;

use super::types::{HealthResponse, VerifyRequest, VerifyResponse};
use super::ServerState;
use crate::error::ResolveError;

/// POST /verify: `{ "accountNumber": "0123456789" }` in, the aggregate
/// resolution outcome out. Individual candidate failures never surface here.
pub async fn handle_verify(
    State(state): State<ServerState>,
    Json(req): Json<VerifyRequest>,
) -> (StatusCode, Json<VerifyResponse>) {
    match state.resolver.resolve(&req.account_number).await {
        Ok(resolved) => (
            StatusCode::OK,
            Json(VerifyResponse::resolved(resolved.account_name)),
        ),
        Err(err) => {
            if let ResolveError::Configuration(detail) | ResolveError::Unexpected(detail) = &err {
                error!("verify failed: {}", detail);
            }
            (status_for(&err), Json(VerifyResponse::failed(err.client_message())))
        }
    }
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn status_for(err: &ResolveError) -> StatusCode {
    match err {
        ResolveError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        ResolveError::NotFound => StatusCode::NOT_FOUND,
        ResolveError::Configuration(_)
        | ResolveError::Upstream(_)
        | ResolveError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
