use std::{sync::Arc, time::Instant};

use sea_orm::DatabaseConnection;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        let start = Instant::now();
        self.db.ping().await.map_err(|e| {
            error!("Database ping failed: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(start.elapsed().as_millis() as u64)
    }

    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let latency_ms = self.health().await?;

        Ok(DatabaseHealthStatus {
            status: "up".to_string(),
            latency_ms,
        })
    }
}
