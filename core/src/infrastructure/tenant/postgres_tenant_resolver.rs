use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::User, common::entities::app_errors::CoreError,
    tenant::ports::TenantResolver,
};

/// Resolves tenants through the `get_current_tenant_id` database function.
#[derive(Debug, Clone)]
pub struct PostgresTenantResolver {
    pub db: DatabaseConnection,
}

impl PostgresTenantResolver {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl TenantResolver for PostgresTenantResolver {
    async fn resolve_current_tenant_id(&self, user: &User) -> Result<Uuid, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "SELECT get_current_tenant_id($1) AS tenant_id",
            [user.id.into()],
        );

        let row = self.db.query_one(stmt).await.map_err(|e| {
            error!("Failed to resolve tenant: {}", e);
            CoreError::TenantResolution(e.to_string())
        })?;

        row.and_then(|row| row.try_get::<Option<Uuid>>("", "tenant_id").ok().flatten())
            .ok_or_else(|| CoreError::TenantResolution(format!("no tenant for user {}", user.id)))
    }
}
