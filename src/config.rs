use std::env;
use std::time::Duration;

use anyhow::{Context, Result, bail};

pub const DEFAULT_ORS_BASE_URL: &str = "https://api.openrouteservice.org";
pub const DEFAULT_ORS_PROFILE: &str = "foot-walking";
pub const DEFAULT_JSONBIN_BASE_URL: &str = "https://api.jsonbin.io/v3";

#[derive(Debug, Clone)]
pub struct Config {
    pub ors_api_key: Option<String>,
    pub ors_base_url: String,
    pub ors_profile: String,
    pub jsonbin_api_key: Option<String>,
    pub jsonbin_bin_id: Option<String>,
    pub jsonbin_base_url: String,
    pub upstream_timeout: Duration,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Credentials are optional here: a missing key only surfaces once a
    /// request reaches the collaborator that needs it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let ors_api_key = non_empty("ORS_API_KEY");
        let jsonbin_api_key = non_empty("JSONBIN_API_KEY");
        let jsonbin_bin_id = non_empty("JSONBIN_BIN_ID");

        let ors_base_url = base_url(
            "ORS_BASE_URL",
            non_empty("ORS_BASE_URL").unwrap_or_else(|| DEFAULT_ORS_BASE_URL.to_string()),
        )?;

        let jsonbin_base_url = base_url(
            "JSONBIN_BASE_URL",
            non_empty("JSONBIN_BASE_URL").unwrap_or_else(|| DEFAULT_JSONBIN_BASE_URL.to_string()),
        )?;

        let ors_profile =
            non_empty("ORS_PROFILE").unwrap_or_else(|| DEFAULT_ORS_PROFILE.to_string());

        let timeout_secs = non_empty("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse::<u64>()
            .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?;
        if timeout_secs == 0 {
            bail!("UPSTREAM_TIMEOUT_SECS must be greater than zero");
        }

        let service_port = non_empty("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = non_empty("SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            ors_api_key,
            ors_base_url,
            ors_profile,
            jsonbin_api_key,
            jsonbin_bin_id,
            jsonbin_base_url,
            upstream_timeout: Duration::from_secs(timeout_secs),
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Routing provider: {} (profile: {})", self.ors_base_url, self.ors_profile);
        tracing::info!("  Routing provider key: {}", set_or_unset(&self.ors_api_key));
        tracing::info!("  Catalog store: {}", self.jsonbin_base_url);
        tracing::info!("  Catalog store key: {}", set_or_unset(&self.jsonbin_api_key));
        tracing::info!(
            "  Catalog document: {}",
            self.jsonbin_bin_id.as_deref().unwrap_or("unset")
        );
        tracing::info!("  Upstream timeout: {:?}", self.upstream_timeout);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);

        if self.ors_api_key.is_none() {
            tracing::warn!("ORS_API_KEY is not set; directions requests will fail upstream");
        }
        if self.jsonbin_api_key.is_none() || self.jsonbin_bin_id.is_none() {
            tracing::warn!(
                "JSONBIN_API_KEY or JSONBIN_BIN_ID is not set; catalog requests will fail upstream"
            );
        }
    }
}

fn base_url(key: &str, value: String) -> Result<String> {
    reqwest::Url::parse(&value).with_context(|| format!("{} must be an absolute URL", key))?;
    Ok(value.trim_end_matches('/').to_string())
}

fn set_or_unset(value: &Option<String>) -> &'static str {
    if value.is_some() { "set" } else { "unset" }
}
