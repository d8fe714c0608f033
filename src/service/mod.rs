//! Geo query service
//!
//! The request-handling layer: validates inputs, applies default radii,
//! queries the point store, and shapes the response. Two variants share one
//! query path and differ only in default radius and wrapping:
//!
//! - `find_within_radius`: bare list, default 20 km
//! - `get_within_radius`: `{ results: [...] }` wrapper, default 10 km
//!
//! The two defaults are intentionally different; callers depend on both.

use crate::constants::query::{DEFAULT_FIND_RADIUS_KM, DEFAULT_GET_RADIUS_KM};
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::store::{GeoResult, GeoStore, Unit};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Wrapped response shape for the get variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoResultsResponse {
    pub results: Vec<GeoResult>,
}

/// Query service over an injected point store
///
/// Constructed once at startup and shared by reference across concurrent
/// request handling. A region key that has never been inserted into yields an
/// empty result set rather than an error; `StoreUnavailable` is surfaced
/// as-is, never masked as empty.
#[derive(Clone)]
pub struct GeoQueryService {
    store: Arc<dyn GeoStore>,
}

impl GeoQueryService {
    pub fn new(store: Arc<dyn GeoStore>) -> Self {
        Self { store }
    }

    /// Find points within `within_km` of the center, nearest first
    ///
    /// Default radius 20 km when omitted. Returns the bare sequence.
    pub fn find_within_radius(
        &self,
        region_key: &str,
        lng: f64,
        lat: f64,
        within_km: Option<f64>,
    ) -> Result<Vec<GeoResult>> {
        self.query(region_key, lng, lat, within_km.unwrap_or(DEFAULT_FIND_RADIUS_KM))
    }

    /// Like `find_within_radius`, but default radius 10 km and a wrapped response
    pub fn get_within_radius(
        &self,
        region_key: &str,
        lng: f64,
        lat: f64,
        within_km: Option<f64>,
    ) -> Result<GeoResultsResponse> {
        let results =
            self.query(region_key, lng, lat, within_km.unwrap_or(DEFAULT_GET_RADIUS_KM))?;
        Ok(GeoResultsResponse { results })
    }

    /// Shared validated query path for both variants
    ///
    /// The region key passes through unmodified; case sensitivity is the
    /// store's concern.
    fn query(&self, region_key: &str, lng: f64, lat: f64, radius: f64) -> Result<Vec<GeoResult>> {
        let center = Coordinates::new(lat, lng);
        center.validate()?;

        match self
            .store
            .query_radius(region_key, center, radius, Unit::Kilometers)
        {
            Ok(results) => Ok(results),
            Err(Error::UnknownRegion(_)) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }
}
