use crate::error::{ApiError, ErrorResponse};
use crate::models::RouteSummary;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /routes handler - List all routes without their waypoints
///
/// Entries come back in the order the catalog stores them.
#[utoipa::path(
    get,
    path = routes::ROUTE_LIST,
    responses(
        (status = 200, description = "Route summaries", body = Vec<RouteSummary>),
        (status = 500, description = "Catalog store error", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<RouteSummary>>), ApiError> {
    let summaries = state
        .catalog
        .list_summaries()
        .await
        .map_err(ApiError::CatalogUnavailable)?;

    tracing::info!("Listed {} routes", summaries.len());

    Ok((StatusCode::OK, Json(summaries)))
}
