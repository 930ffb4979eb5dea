use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{directions_handler, get_handler, health_handler, list_handler};
use crate::routes;
use crate::state::AppState;

/// Build the full application router with tracing and API docs
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(health_handler))
        .route(routes::ROUTE_LIST, get(list_handler))
        .route(routes::ROUTE_ITEM, get(get_handler))
        .route(routes::DIRECTIONS, get(directions_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
