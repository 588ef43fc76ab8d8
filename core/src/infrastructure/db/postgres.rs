use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{error, info};

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url);
        options
            .max_connections(20)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }

    /// Applies the bundled SQL migrations.
    pub async fn migrate(&self) -> Result<(), CoreError> {
        let pool = self.db.get_postgres_connection_pool();

        sqlx::migrate!("./migrations").run(pool).await.map_err(|e| {
            error!("Failed to run migrations: {}", e);
            CoreError::InternalServerError
        })?;

        info!("database migrations applied");
        Ok(())
    }
}
