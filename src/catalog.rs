use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::Config;
use crate::error::UpstreamError;
use crate::models::{Route, RouteSummary};

/// Header JSONBin expects the master key in
const MASTER_KEY_HEADER: &str = "X-Master-Key";

/// Document store wrapper around the stored collection
#[derive(Deserialize)]
struct BinEnvelope {
    record: RouteCollection,
}

/// The stored document is either the bare list or an object holding it
#[derive(Deserialize)]
#[serde(untagged)]
enum RouteCollection {
    List(Vec<Route>),
    Wrapped { routes: Vec<Route> },
}

impl RouteCollection {
    fn into_routes(self) -> Vec<Route> {
        match self {
            RouteCollection::List(routes) => routes,
            RouteCollection::Wrapped { routes } => routes,
        }
    }
}

/// Read-only accessor for the route catalog kept in the remote document store
///
/// Nothing is cached: every call fetches the whole document again.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    bin_id: Option<String>,
    api_key: Option<String>,
}

impl CatalogClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .context("Failed to build catalog store HTTP client")?;

        Ok(Self {
            http,
            base_url: config.jsonbin_base_url.clone(),
            bin_id: config.jsonbin_bin_id.clone(),
            api_key: config.jsonbin_api_key.clone(),
        })
    }

    /// Fetch the latest version of the catalog document
    ///
    /// # Errors
    /// Returns an error if the document id is unset, the store cannot be
    /// reached in time, answers with a non-success status, or the body is
    /// not a route collection.
    pub async fn fetch_routes(&self) -> Result<Vec<Route>, UpstreamError> {
        let bin_id = self
            .bin_id
            .as_deref()
            .ok_or(UpstreamError::NotConfigured("JSONBIN_BIN_ID"))?;
        let url = format!("{}/b/{}/latest", self.base_url, bin_id);

        tracing::debug!("Fetching route catalog from {}", url);

        let mut request = self.http.get(&url);
        if let Some(key) = &self.api_key {
            request = request.header(MASTER_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(UpstreamError::Status { status, body: text });
        }

        let envelope: BinEnvelope = serde_json::from_str(&text).map_err(|e| {
            tracing::debug!("Unparseable catalog document: {}", text);
            e
        })?;
        let routes = envelope.record.into_routes();

        tracing::debug!("Fetched {} routes from catalog", routes.len());
        Ok(routes)
    }

    /// All routes projected to their summary fields, in stored order
    pub async fn list_summaries(&self) -> Result<Vec<RouteSummary>, UpstreamError> {
        let routes = self.fetch_routes().await?;
        Ok(summarize(&routes))
    }

    /// The full route with the given id, waypoints included
    ///
    /// # Returns
    /// * `Ok(Some(route))` - Route found
    /// * `Ok(None)` - No route carries this id
    /// * `Err(_)` - Catalog could not be fetched
    pub async fn find_route(&self, id: i64) -> Result<Option<Route>, UpstreamError> {
        let routes = self.fetch_routes().await?;
        Ok(find_by_id(routes, id))
    }
}

pub fn summarize(routes: &[Route]) -> Vec<RouteSummary> {
    routes.iter().map(RouteSummary::from).collect()
}

pub fn find_by_id(routes: Vec<Route>, id: i64) -> Option<Route> {
    routes.into_iter().find(|route| route.id == id)
}

/// Parse a path segment into a route id
///
/// Only a bare integer matches; padded or decimal text does not.
pub fn parse_route_id(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}
