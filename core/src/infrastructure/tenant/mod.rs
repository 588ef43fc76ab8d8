pub mod postgres_tenant_resolver;

pub use postgres_tenant_resolver::PostgresTenantResolver;
