//! Translation between the simplified directions query and the routing
//! provider's wire shapes.
//!
//! Query parameters carry latitude and longitude as separate fields; the
//! provider wants `[longitude, latitude]` pairs. Everything axis-order
//! sensitive goes through [`Coordinate`].

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::ApiError;
use crate::models::DirectionsQuery;

/// A validated position, kept in provider axis order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    /// Validates both components: finite and within WGS84 bounds
    pub fn new(lon: f64, lat: f64) -> Result<Self, ApiError> {
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(ApiError::InvalidCoordinate(format!(
                "longitude {} is outside [-180, 180]",
                lon
            )));
        }
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(ApiError::InvalidCoordinate(format!(
                "latitude {} is outside [-90, 90]",
                lat
            )));
        }
        Ok(Self { lon, lat })
    }

    /// Provider-native `[longitude, latitude]` pair
    pub fn to_lon_lat(self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

/// A validated directions request: start, intermediates in received order, end
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsRequest {
    pub start: Coordinate,
    pub via: Vec<Coordinate>,
    pub end: Coordinate,
}

impl DirectionsRequest {
    /// Validate raw query parameters
    ///
    /// Missing required fields are reported together, before anything else
    /// is looked at. The waypoints payload is only parsed once all four
    /// required fields are present.
    pub fn from_query(query: &DirectionsQuery) -> Result<Self, ApiError> {
        let required = [
            ("startLon", &query.start_lon),
            ("startLat", &query.start_lat),
            ("endLon", &query.end_lon),
            ("endLat", &query.end_lat),
        ];
        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(ApiError::MissingParameters(missing));
        }

        let field = |name: &str, value: &Option<String>| -> Result<f64, ApiError> {
            parse_number(name, value.as_deref().unwrap_or_default())
        };

        let start = Coordinate::new(
            field("startLon", &query.start_lon)?,
            field("startLat", &query.start_lat)?,
        )?;
        let end = Coordinate::new(
            field("endLon", &query.end_lon)?,
            field("endLat", &query.end_lat)?,
        )?;

        let via = match query.waypoints.as_deref() {
            Some(raw) if !raw.trim().is_empty() => parse_waypoints(raw)?,
            _ => Vec::new(),
        };

        Ok(Self { start, via, end })
    }

    /// The ordered coordinate sequence sent to the provider
    pub fn coordinates(&self) -> Vec<[f64; 2]> {
        std::iter::once(self.start)
            .chain(self.via.iter().copied())
            .chain(std::iter::once(self.end))
            .map(Coordinate::to_lon_lat)
            .collect()
    }
}

/// One element of the serialized waypoints list, before validation
#[derive(Debug, Deserialize)]
struct RawPoint {
    #[serde(default, alias = "longitude")]
    lon: Option<JsonValue>,
    #[serde(default, alias = "latitude")]
    lat: Option<JsonValue>,
}

/// Parse the serialized intermediate points
///
/// A point missing either component (absent or null) is skipped. Zero is a
/// present value. A present component that is not numeric rejects the
/// whole request.
pub fn parse_waypoints(raw: &str) -> Result<Vec<Coordinate>, ApiError> {
    let points: Vec<RawPoint> =
        serde_json::from_str(raw).map_err(|e| ApiError::InvalidWaypoints(e.to_string()))?;

    let mut coordinates = Vec::with_capacity(points.len());
    for (index, point) in points.into_iter().enumerate() {
        let (Some(lon), Some(lat)) = (point.lon, point.lat) else {
            tracing::debug!("Skipping waypoint {} without both lon and lat", index);
            continue;
        };
        let lon = json_number(&format!("waypoints[{}].lon", index), &lon)?;
        let lat = json_number(&format!("waypoints[{}].lat", index), &lat)?;
        coordinates.push(Coordinate::new(lon, lat)?);
    }
    Ok(coordinates)
}

fn parse_number(name: &str, text: &str) -> Result<f64, ApiError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ApiError::InvalidCoordinate(format!("{} is not a number: '{}'", name, text)))
}

fn json_number(name: &str, value: &JsonValue) -> Result<f64, ApiError> {
    match value {
        JsonValue::Number(n) => n
            .as_f64()
            .ok_or_else(|| ApiError::InvalidCoordinate(format!("{} is not a number", name))),
        JsonValue::String(s) => parse_number(name, s),
        other => Err(ApiError::InvalidCoordinate(format!(
            "{} is not a number: {}",
            name, other
        ))),
    }
}

/// Body posted to the provider's directions endpoint
#[derive(Debug, Serialize)]
pub struct ProviderRequest {
    pub coordinates: Vec<[f64; 2]>,
}

/// GeoJSON feature collection returned by the provider
#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub coordinates: Vec<Vec<f64>>,
}

/// Take the first feature's geometry verbatim
pub fn extract_geometry(collection: FeatureCollection) -> Result<Vec<Vec<f64>>, ApiError> {
    collection
        .features
        .into_iter()
        .next()
        .map(|feature| feature.geometry.coordinates)
        .ok_or(ApiError::NoRouteFound)
}
