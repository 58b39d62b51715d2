use std::time::Instant;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
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

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let start = Instant::now();
        let status = match self.db.ping().await {
            Ok(()) => "healthy",
            Err(e) => {
                error!("Database readiness check failed: {}", e);
                "unhealthy"
            }
        };

        Ok(DatabaseHealthStatus {
            status: status.to_string(),
            response_time_ms: start.elapsed().as_millis() as u64,
            checked_at: Utc::now(),
        })
    }
}
