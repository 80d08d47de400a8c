//! Datastore connectivity probes.
//!
//! A probe is a single connect-plus-ping attempt with no retry; whatever
//! timeout the driver enforces is the only bound. The trait seam exists so
//! router tests can substitute a mock for the real drivers.

use std::time::Duration;

use async_trait::async_trait;
use common::errors::{AppError, AppResult};
use common::models::credentials::MysqlCredentials;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;
use sqlx::mysql::MySqlPoolOptions;

/// Attempts one-shot liveness checks against external datastores.
#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    /// Connects to MySQL with the given credentials and pings it.
    async fn probe_mysql(&self, credentials: &MysqlCredentials) -> AppResult<()>;

    /// Connects to MongoDB at the given URL and pings it.
    async fn probe_mongo(&self, url: &str) -> AppResult<()>;
}

/// Probe implementation backed by the real database drivers.
pub struct DriverProbe {
    connect_timeout: Duration,
}

impl DriverProbe {
    /// Creates a prober with the given driver-level connect timeout.
    pub fn new(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }
}

#[async_trait]
impl ConnectivityProbe for DriverProbe {
    async fn probe_mysql(&self, credentials: &MysqlCredentials) -> AppResult<()> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(self.connect_timeout)
            .connect(&credentials.connection_url())
            .await
            .map_err(|e| AppError::MysqlConnect(e.to_string()))?;

        // Liveness check on the freshly opened connection
        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .map_err(|e| AppError::MysqlPing(e.to_string()))?;

        pool.close().await;
        Ok(())
    }

    async fn probe_mongo(&self, url: &str) -> AppResult<()> {
        let mut options = ClientOptions::parse(url)
            .await
            .map_err(|e| AppError::MongoConnect(e.to_string()))?;
        options.connect_timeout = Some(self.connect_timeout);
        options.server_selection_timeout = Some(self.connect_timeout);

        let client =
            Client::with_options(options).map_err(|e| AppError::MongoConnect(e.to_string()))?;

        // The client connects lazily, so reachability is only proven by
        // actually running a command
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::MongoConnect(e.to_string()))?;

        Ok(())
    }
}
