use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, log::LevelFilter};

use crate::domain::common::DatabaseConfig;

#[derive(Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(10)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(options).await?;

        if config.run_migrations {
            sqlx::migrate!("./migrations")
                .run(db.get_postgres_connection_pool())
                .await?;
            info!("database migrations applied");
        }

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
