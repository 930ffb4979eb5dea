use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

// Structured error body returned by openrouteservice on failure
#[derive(Deserialize, Debug)]
pub struct OrsErrorDetail {
    pub code: u32,
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub struct OrsErrorPayload {
    pub error: OrsErrorDetail,
}

/// Failure talking to an outbound collaborator (catalog store or routing provider)
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("request timed out: {0}")]
    Timeout(reqwest::Error),

    #[error("request failed: {0}")]
    Request(reqwest::Error),

    #[error("upstream returned {status} (code {code}): {message}")]
    Api {
        status: StatusCode,
        code: u32,
        message: String,
    },

    #[error("upstream returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout(err)
        } else {
            UpstreamError::Request(err)
        }
    }
}

impl UpstreamError {
    /// Classifies a non-success routing provider response, preferring its
    /// structured `{error:{code,message}}` body
    pub fn from_provider_status(status: StatusCode, body: String) -> Self {
        match serde_json::from_str::<OrsErrorPayload>(&body) {
            Ok(payload) => UpstreamError::Api {
                status,
                code: payload.error.code,
                message: payload.error.message,
            },
            Err(_) => UpstreamError::Status { status, body },
        }
    }
}

/// Custom error type for API endpoints
///
/// Every variant maps to one HTTP status and a small JSON body. Upstream
/// causes are logged when the response is built and never echoed to callers.
#[derive(Debug)]
pub enum ApiError {
    /// One or more required directions parameters absent or empty
    MissingParameters(Vec<&'static str>),
    /// Query string could not be decoded (e.g. a repeated field)
    InvalidParameters(String),
    /// Waypoints payload is not a JSON list of points
    InvalidWaypoints(String),
    /// Coordinate text is not a finite, in-range number
    InvalidCoordinate(String),
    /// No catalog entry with the requested id
    RouteNotFound(String),
    /// Catalog store unreachable, non-success, or malformed
    CatalogUnavailable(UpstreamError),
    /// Routing provider unreachable, non-success, or malformed
    ProviderUnavailable(UpstreamError),
    /// Provider answered successfully but with zero features
    NoRouteFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameters(_)
            | ApiError::InvalidParameters(_)
            | ApiError::InvalidWaypoints(_)
            | ApiError::InvalidCoordinate(_) => StatusCode::BAD_REQUEST,
            ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::CatalogUnavailable(_)
            | ApiError::ProviderUnavailable(_)
            | ApiError::NoRouteFound => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match &self {
            ApiError::MissingParameters(names) => {
                format!("Missing required parameters: {}", names.join(", "))
            }
            ApiError::InvalidParameters(msg) => format!("Invalid query parameters: {}", msg),
            ApiError::InvalidWaypoints(err) => format!("Invalid waypoints format: {}", err),
            ApiError::InvalidCoordinate(msg) => format!("Invalid coordinate: {}", msg),
            ApiError::RouteNotFound(id) => format!("Route not found: {}", id),
            ApiError::CatalogUnavailable(err) => {
                tracing::error!("Error fetching routes from catalog store: {}", err);
                "Error fetching routes".to_string()
            }
            ApiError::ProviderUnavailable(err) => {
                tracing::error!("Error fetching route data from routing provider: {}", err);
                "Error fetching route data".to_string()
            }
            ApiError::NoRouteFound => {
                tracing::error!("Routing provider returned no features");
                "No route found".to_string()
            }
        };

        if status.is_client_error() {
            tracing::warn!("Rejecting request ({}): {}", status, error_message);
        }

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(error: ApiError) -> (StatusCode, ErrorResponse) {
        let response = error.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_missing_parameters_lists_names() {
        let (status, body) = body_of(ApiError::MissingParameters(vec!["startLon", "endLat"])).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Missing required parameters: startLon, endLat");
    }

    #[tokio::test]
    async fn test_upstream_cause_is_not_exposed() {
        let cause = UpstreamError::Status {
            status: StatusCode::FORBIDDEN,
            body: "secret detail".to_string(),
        };
        let (status, body) = body_of(ApiError::ProviderUnavailable(cause)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Error fetching route data");
    }

    #[tokio::test]
    async fn test_no_route_found_is_server_error() {
        let (status, _) = body_of(ApiError::NoRouteFound).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_provider_status_parses_structured_error() {
        let body = r#"{"error":{"code":2010,"message":"Could not find routable point"}}"#;
        match UpstreamError::from_provider_status(StatusCode::NOT_FOUND, body.to_string()) {
            UpstreamError::Api { status, code, message } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(code, 2010);
                assert_eq!(message, "Could not find routable point");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_provider_status_falls_back_to_raw_body() {
        match UpstreamError::from_provider_status(StatusCode::BAD_GATEWAY, "oops".to_string()) {
            UpstreamError::Status { status, body } => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(body, "oops");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
