use axum::extract::State;
use axum::http::StatusCode;

use crate::state::AppState;

/// Liveness probe. Reports only that the process is up and serving;
/// deliberately ignores downstream dependencies.
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe. 503 until the database answers.
pub async fn readiness_check(State(state): State<AppState>) -> StatusCode {
    match state.db_pool.ping().await {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            tracing::warn!("readiness probe failed: {err}");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
