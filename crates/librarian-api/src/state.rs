use crate::database::DbPool;

/// Application state shared across handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: DbPool,
}
