use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    authentication::{
        ports::SessionProvider,
        value_objects::{Session, User},
    },
    common::entities::app_errors::CoreError,
    company::ports::CompanyRepository,
    tenant::ports::TenantResolver,
};

/// Holds the injected collaborators every service operation runs against.
#[derive(Clone)]
pub struct Service<S, T, C>
where
    S: SessionProvider,
    T: TenantResolver,
    C: CompanyRepository,
{
    pub session_provider: S,
    pub tenant_resolver: T,
    pub company_repository: C,
}

impl<S, T, C> Service<S, T, C>
where
    S: SessionProvider,
    T: TenantResolver,
    C: CompanyRepository,
{
    pub fn new(session_provider: S, tenant_resolver: T, company_repository: C) -> Self {
        Self {
            session_provider,
            tenant_resolver,
            company_repository,
        }
    }

    /// Authenticates the session and resolves the tenant it belongs to.
    ///
    /// Runs from scratch on every call; nothing is cached between requests.
    pub async fn resolve_tenant(&self, session: &Session) -> Result<(User, Uuid), CoreError> {
        let user = self
            .session_provider
            .get_current_user(session)
            .await?
            .ok_or(CoreError::NotAuthenticated)?;

        let tenant_id = self
            .tenant_resolver
            .resolve_current_tenant_id(&user)
            .await
            .map_err(|e| match e {
                CoreError::TenantResolution(_) => e,
                other => CoreError::TenantResolution(other.to_string()),
            })?;

        debug!(user_id = %user.id, %tenant_id, "resolved tenant");
        Ok((user, tenant_id))
    }
}
