use crate::application::http::{company::router::CompanyApiDoc, health::__path_health};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Strategy Forge API",
        description = "Tenant-scoped company search and management."
    ),
    paths(health),
    nest(
        (path = "/companies", api = CompanyApiDoc),
    )
)]
pub struct ApiDoc;
