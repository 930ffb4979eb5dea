use anyhow::{Context, Result};

use crate::config::Config;
use crate::directions::{FeatureCollection, ProviderRequest};
use crate::error::UpstreamError;

/// Client for the openrouteservice directions API
#[derive(Clone)]
pub struct OrsClient {
    http: reqwest::Client,
    base_url: String,
    profile: String,
    api_key: Option<String>,
}

impl OrsClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .context("Failed to build routing provider HTTP client")?;

        Ok(Self {
            http,
            base_url: config.ors_base_url.clone(),
            profile: config.ors_profile.clone(),
            api_key: config.ors_api_key.clone(),
        })
    }

    fn directions_url(&self) -> String {
        format!("{}/v2/directions/{}/geojson", self.base_url, self.profile)
    }

    /// Request walking directions through the given `[lon, lat]` positions
    ///
    /// A missing API key is not checked here; the provider rejects the call.
    pub async fn directions(
        &self,
        coordinates: Vec<[f64; 2]>,
    ) -> Result<FeatureCollection, UpstreamError> {
        let url = self.directions_url();
        let body = ProviderRequest { coordinates };

        tracing::debug!(
            "Requesting directions from {} through {} points",
            url,
            body.coordinates.len()
        );

        let mut request = self.http.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.header(reqwest::header::AUTHORIZATION, key);
        }

        let response = request.send().await.map_err(|e| {
            tracing::debug!(
                "Directions request failed. URL: {}\nBody: {}",
                url,
                serde_json::to_string(&body).unwrap_or_default()
            );
            UpstreamError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(UpstreamError::from_provider_status(status, text));
        }

        let collection: FeatureCollection = serde_json::from_str(&text).map_err(|e| {
            tracing::debug!("Unparseable directions response: {}", text);
            e
        })?;

        tracing::debug!(
            "Routing provider returned {} features",
            collection.features.len()
        );
        Ok(collection)
    }
}
