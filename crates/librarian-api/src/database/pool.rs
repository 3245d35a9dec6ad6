use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use crate::config::DatabaseSettings;
use crate::error::ConnectionError;

const MAX_CONNECTIONS: u32 = 20;
const MAX_LIFETIME: Duration = Duration::from_secs(5 * 60);
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct DbPool {
    pool: MySqlPool,
}

impl DbPool {
    /// Open the pool and probe it once. The service must not come up
    /// without a working database link, so a failed probe is fatal.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, ConnectionError> {
        let pool = Self::connect_lazy(settings)?;
        pool.ping().await?;
        Ok(pool)
    }

    /// Build the pool without dialing the database. Connections are
    /// established on first checkout; idle connections are capped by the
    /// same limit as open ones and recycled after [`MAX_LIFETIME`].
    pub fn connect_lazy(settings: &DatabaseSettings) -> Result<Self, ConnectionError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .max_lifetime(MAX_LIFETIME)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_lazy(&settings.connection_url())?;

        Ok(Self { pool })
    }

    /// Round-trip a trivial query to verify connectivity.
    pub async fn ping(&self) -> Result<(), ConnectionError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}
