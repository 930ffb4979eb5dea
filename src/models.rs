use serde::{Deserialize, Serialize};

/// Latitude/longitude pair as stored in the route catalog
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Named stop along a route, in traversal order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Waypoint {
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Full catalog entry, as returned by the route detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Route {
    pub id: i64,
    pub name: String,
    pub start: GeoPoint,
    pub end: GeoPoint,
    #[serde(default)]
    pub waypoints: Vec<Waypoint>,
}

/// Catalog entry without its waypoints, as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RouteSummary {
    pub id: i64,
    pub name: String,
    pub start: GeoPoint,
    pub end: GeoPoint,
}

impl From<&Route> for RouteSummary {
    fn from(route: &Route) -> Self {
        RouteSummary {
            id: route.id,
            name: route.name.clone(),
            start: route.start,
            end: route.end,
        }
    }
}

/// Query parameters for the directions endpoint
///
/// Everything arrives as text; validation happens in `directions`.
#[derive(Debug, Default, Deserialize)]
pub struct DirectionsQuery {
    #[serde(rename = "startLon", alias = "startLongitude")]
    pub start_lon: Option<String>,
    #[serde(rename = "startLat", alias = "startLatitude")]
    pub start_lat: Option<String>,
    #[serde(rename = "endLon", alias = "endLongitude")]
    pub end_lon: Option<String>,
    #[serde(rename = "endLat", alias = "endLatitude")]
    pub end_lat: Option<String>,
    pub waypoints: Option<String>,
}

/// Response type for the directions endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DirectionsResponse {
    /// Path positions exactly as the routing provider returned them
    #[serde(rename = "routeGeometry")]
    pub route_geometry: Vec<Vec<f64>>,
}
