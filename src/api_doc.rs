use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{DirectionsResponse, GeoPoint, Route, RouteSummary, Waypoint};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "walking-route-relay API",
        version = "1.0.0",
        description = "Curated walking routes and a walking-directions proxy"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::directions::directions_handler
    ),
    components(
        schemas(
            GeoPoint,
            Waypoint,
            Route,
            RouteSummary,
            DirectionsResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "routes", description = "Route catalog operations"),
        (name = "directions", description = "Walking directions proxy")
    )
)]
pub struct ApiDoc;
