use crate::domain::common::{StrategyForgeConfig, services::Service};
use crate::infrastructure::{
    authentication::JwtSessionProvider,
    company::PostgresCompanyRepository,
    db::postgres::{Postgres, PostgresConfig},
    tenant::PostgresTenantResolver,
};

pub type StrategyForgeService =
    Service<JwtSessionProvider, PostgresTenantResolver, PostgresCompanyRepository>;

pub async fn create_service(config: StrategyForgeConfig) -> Result<StrategyForgeService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    postgres.migrate().await?;

    let session_provider = JwtSessionProvider::new(&config.auth.jwt_secret);
    let tenant_resolver = PostgresTenantResolver::new(postgres.get_db());
    let company_repository = PostgresCompanyRepository::new(postgres.get_db());

    Ok(Service::new(
        session_provider,
        tenant_resolver,
        company_repository,
    ))
}
