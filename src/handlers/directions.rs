use crate::directions::{DirectionsRequest, extract_geometry};
use crate::error::{ApiError, ErrorResponse};
use crate::models::{DirectionsQuery, DirectionsResponse};
use crate::routes;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};

/// GET /api/route handler - Walking directions via the routing provider
///
/// Query parameters:
/// - startLon, startLat, endLon, endLat: required decimal degrees
/// - waypoints: optional JSON list of `{"lon": .., "lat": ..}` visited in order
///
/// The provider is only contacted once every parameter has validated.
#[utoipa::path(
    get,
    path = routes::DIRECTIONS,
    params(
        ("startLon" = f64, Query, description = "Start longitude"),
        ("startLat" = f64, Query, description = "Start latitude"),
        ("endLon" = f64, Query, description = "End longitude"),
        ("endLat" = f64, Query, description = "End latitude"),
        ("waypoints" = Option<String>, Query, description = "JSON list of intermediate points, e.g. [{\"lon\":19.9,\"lat\":50.05}]")
    ),
    responses(
        (status = 200, description = "Route geometry", body = DirectionsResponse),
        (status = 400, description = "Missing or invalid parameters", body = ErrorResponse),
        (status = 500, description = "Routing provider error or no route found", body = ErrorResponse)
    ),
    tag = "directions"
)]
pub async fn directions_handler(
    State(state): State<AppState>,
    query: Result<Query<DirectionsQuery>, QueryRejection>,
) -> Result<(StatusCode, Json<DirectionsResponse>), ApiError> {
    let Query(query) =
        query.map_err(|rejection| ApiError::InvalidParameters(rejection.body_text()))?;
    let request = DirectionsRequest::from_query(&query)?;
    let coordinates = request.coordinates();
    let points = coordinates.len();

    let collection = state
        .ors
        .directions(coordinates)
        .await
        .map_err(ApiError::ProviderUnavailable)?;
    let route_geometry = extract_geometry(collection)?;

    tracing::info!(
        "Computed {} route through {} points ({} positions)",
        state.config.ors_profile,
        points,
        route_geometry.len()
    );

    Ok((StatusCode::OK, Json(DirectionsResponse { route_geometry })))
}
