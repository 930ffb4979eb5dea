use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::ors::OrsClient;
use anyhow::Result;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogClient,
    pub ors: OrsClient,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self> {
        Ok(Self {
            catalog: CatalogClient::from_config(&config)?,
            ors: OrsClient::from_config(&config)?,
            config: Arc::new(config),
        })
    }
}
