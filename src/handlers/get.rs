use crate::catalog::parse_route_id;
use crate::error::{ApiError, ErrorResponse};
use crate::models::Route;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};

/// GET /routes/{id} handler - Retrieve a route with its waypoints
///
/// The id must be an integer; any other text is reported as not found
/// without contacting the catalog store.
#[utoipa::path(
    get,
    path = routes::ROUTE_ITEM,
    params(
        ("id" = i64, Path, description = "Numeric route id")
    ),
    responses(
        (status = 200, description = "Route found", body = Route),
        (status = 404, description = "Route not found", body = ErrorResponse),
        (status = 500, description = "Catalog store error", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Route>), ApiError> {
    let Some(id) = parse_route_id(&id_str) else {
        return Err(ApiError::RouteNotFound(id_str));
    };

    match state
        .catalog
        .find_route(id)
        .await
        .map_err(ApiError::CatalogUnavailable)?
    {
        Some(route) => {
            tracing::info!("Successfully retrieved route with id: {}", id);
            Ok((StatusCode::OK, Json(route)))
        }
        None => {
            tracing::info!("Route not found with id: {}", id);
            Err(ApiError::RouteNotFound(id.to_string()))
        }
    }
}
