use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::state::AppState;

pub const DOCS_PATH: &str = "/adoptionRequest-docs";

const OPENAPI_DOCUMENT: &str = include_str!("../../docs/openapi.yaml");

pub fn router() -> Router<AppState> {
    Router::new().route(DOCS_PATH, get(openapi_document))
}

async fn openapi_document() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/yaml")], OPENAPI_DOCUMENT)
}
