//! Point store backends
//!
//! This module defines the `GeoStore` trait and implementations. Ingestion and
//! query shaping only ever talk to the trait, so the brute-force in-memory
//! store can be swapped for an indexed engine without touching either.
//!
//! ## Flex Point
//! Adding a new store backend requires:
//! 1. Create `src/store/{backend_name}.rs` implementing `GeoStore`
//! 2. Add `pub mod {backend_name};` below
//! 3. Register it in `get_store`

pub mod memory;

use crate::coord::Coordinates;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A named point as handed to the store for insertion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    pub fn new(name: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self {
            name: name.into(),
            longitude,
            latitude,
        }
    }

    pub fn coords(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

impl From<crate::ingest::record::PointRecord> for GeoPoint {
    fn from(record: crate::ingest::record::PointRecord) -> Self {
        Self {
            name: record.name,
            longitude: record.longitude,
            latitude: record.latitude,
        }
    }
}

/// One match from a radius query, distance measured from the query center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoResult {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
}

/// Distance unit for radius queries
///
/// Kilometers is the only unit the service speaks today; the enum exists so
/// the wire contract names the unit explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Kilometers,
}

impl Default for Unit {
    fn default() -> Self {
        Self::Kilometers
    }
}

/// Trait for point store backends
///
/// Implementations must be thread-safe (Send + Sync) to work with the async
/// server, and must make each `insert` call all-or-nothing: a concurrent
/// query never observes a partially-inserted batch.
pub trait GeoStore: Send + Sync {
    /// Returns the backend name (e.g., "memory")
    fn name(&self) -> &'static str;

    /// Append points to the collection for `region_key`
    ///
    /// Inserting into an existing key adds to it, it does not replace.
    /// Fails with `InvalidPoint` if any coordinate is out of range and with
    /// `StoreUnavailable` if the backing engine cannot be reached.
    fn insert(&self, region_key: &str, points: &[GeoPoint]) -> Result<()>;

    /// Return all points for `region_key` within `radius` of `center`
    ///
    /// Results are sorted ascending by great-circle distance, ties keeping
    /// insertion order. Fails with `UnknownRegion` if the key has never been
    /// inserted into; callers deciding to treat that as an empty result do so
    /// above this boundary.
    fn query_radius(
        &self,
        region_key: &str,
        center: Coordinates,
        radius: f64,
        unit: Unit,
    ) -> Result<Vec<GeoResult>>;
}

/// Get a store backend by name
///
/// Returns the in-memory backend as default if name is not recognized
pub fn get_store(name: &str) -> Arc<dyn GeoStore> {
    match name {
        "memory" => Arc::new(memory::MemoryGeoStore::new()),
        _ => Arc::new(memory::MemoryGeoStore::new()),
    }
}
