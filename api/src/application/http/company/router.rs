use super::handlers::create_company::{__path_create_company, create_company};
use super::handlers::delete_company::{__path_delete_company, delete_company};
use super::handlers::get_companies::{__path_get_companies, get_companies};
use super::handlers::get_company::{__path_get_company, get_company};
use super::handlers::get_company_lists::{__path_get_company_lists, get_company_lists};
use super::handlers::update_company::{__path_update_company, update_company};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_companies,
    get_company,
    get_company_lists,
    create_company,
    update_company,
    delete_company
))]
pub struct CompanyApiDoc;

pub fn company_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/companies"),
            get(get_companies).post(create_company),
        )
        .route(
            &format!("{root_path}/companies/{{company_id}}"),
            get(get_company).put(update_company).delete(delete_company),
        )
        .route(
            &format!("{root_path}/companies/{{company_id}}/lists"),
            get(get_company_lists),
        )
        .layer(middleware::from_fn(auth))
}
