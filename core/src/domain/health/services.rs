use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
};

#[derive(Debug, Clone)]
pub struct HealthService<H> {
    health_check_repository: H,
}

impl<H: HealthCheckRepository> HealthService<H> {
    pub fn new(health_check_repository: H) -> Self {
        Self {
            health_check_repository,
        }
    }
}

impl<H: HealthCheckRepository> HealthCheckService for HealthService<H> {
    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }

    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        match self.health_check_repository.readiness().await {
            Ok(status) => Ok(status),
            Err(_) => Err(CoreError::ServiceUnavailable),
        }
    }
}
