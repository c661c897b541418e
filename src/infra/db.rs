use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.db_idle_timeout_seconds))
            .max_lifetime(Duration::from_secs(config.db_max_lifetime_seconds))
            .connect(&config.database_url)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Drains the pool. Invoked once on shutdown; in-flight queries finish
    /// before their connections are closed.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// The single failure kind the data-access layer raises. The underlying
/// driver error is logged at the point of failure and never travels past
/// this boundary.
#[derive(Debug, thiserror::Error)]
#[error("database operation failed")]
pub struct DbError;

impl DbError {
    pub(crate) fn log(op: &'static str, err: sqlx::Error) -> Self {
        tracing::error!(error = %err, op, "database operation failed");
        DbError
    }
}
