//! Server shared state
//!
//! Holds configuration and the query service for the HTTP server.

use crate::config::Config;
use crate::service::GeoQueryService;

/// Shared state for the HTTP server
///
/// Constructed once at startup (after ingestion) and shared by reference
/// across concurrent request handling.
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// Query service over the loaded point store
    pub service: GeoQueryService,

    /// Region keys loaded at startup, for the status endpoint
    pub regions: Vec<String>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config, service: GeoQueryService, regions: Vec<String>) -> Self {
        Self {
            config,
            service,
            regions,
        }
    }
}
