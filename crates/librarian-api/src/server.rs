use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::BindError;
use crate::handlers;
use crate::state::AppState;

/// Build the fixed route table. Routes are registered once at startup;
/// anything unmatched falls through to axum's default 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check))
        .route("/ping", get(handlers::ping::ping))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener on all interfaces.
pub async fn bind(port: &str) -> Result<TcpListener, BindError> {
    let port: u16 = port.parse().map_err(|_| BindError::InvalidPort {
        port: port.to_string(),
    })?;

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    Ok(listener)
}

/// Serve until the process exits.
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await
}
