use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use librarian_api::config::Settings;
use librarian_api::database::DbPool;
use librarian_api::server;
use librarian_api::state::AppState;

#[tokio::main]
async fn main() {
    // Fall back to info-level logging when RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        error!("startup failed: {err:#}");
        std::process::exit(1);
    }
}

/// Startup is strictly sequential: configuration, then the database
/// probe, then the listener. Each step is a precondition for the next,
/// and any failure is terminal.
async fn run() -> Result<()> {
    let settings = Settings::load()?;
    info!("configuration loaded");

    let db_pool = DbPool::connect(&settings.database).await?;
    info!("database connection established");

    let listener = server::bind(&settings.server.port).await?;
    let router = server::build_router(AppState { db_pool });
    server::serve(listener, router).await?;

    Ok(())
}
