use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct PingResponse {
    message: String,
}

/// Wiring smoke test. Static payload, no dependencies.
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong".to_string(),
    })
}
