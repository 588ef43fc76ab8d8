use std::future::Future;

use uuid::Uuid;

use crate::domain::{authentication::value_objects::User, common::entities::app_errors::CoreError};

/// Maps an authenticated user onto the tenant every query is scoped by.
#[cfg_attr(test, mockall::automock)]
pub trait TenantResolver: Send + Sync {
    fn resolve_current_tenant_id(
        &self,
        user: &User,
    ) -> impl Future<Output = Result<Uuid, CoreError>> + Send;
}
