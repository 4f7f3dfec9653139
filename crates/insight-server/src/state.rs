//! Application State

use std::sync::Arc;

use insight_core::SiteMetadata;

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Settings loaded at startup
    pub config: Arc<ServerConfig>,

    /// Document metadata served to clients
    pub site: &'static SiteMetadata,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            site: &insight_core::SITE,
        }
    }
}
