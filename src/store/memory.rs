//! In-memory point store
//!
//! Brute-force haversine scan over a per-region `Vec`. Fine for datasets in
//! the tens of thousands of points; larger deployments should plug an indexed
//! engine into `GeoStore` instead.

use crate::coord::{haversine_km, Coordinates};
use crate::error::{Error, Result};
use crate::store::{GeoPoint, GeoResult, GeoStore, Unit};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory `GeoStore` backed by a region-keyed hash map
#[derive(Debug, Default)]
pub struct MemoryGeoStore {
    // One lock over the whole map: an insert is all-or-nothing with respect
    // to concurrent queries.
    regions: RwLock<HashMap<String, Vec<GeoPoint>>>,
}

impl MemoryGeoStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, Vec<GeoPoint>>>> {
        self.regions
            .read()
            .map_err(|e| Error::StoreUnavailable(format!("Store lock poisoned: {}", e)))
    }

    fn lock_write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, Vec<GeoPoint>>>> {
        self.regions
            .write()
            .map_err(|e| Error::StoreUnavailable(format!("Store lock poisoned: {}", e)))
    }
}

impl GeoStore for MemoryGeoStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn insert(&self, region_key: &str, points: &[GeoPoint]) -> Result<()> {
        // Validate the whole batch before touching the map so a bad point
        // cannot leave a partial insert behind.
        for point in points {
            point
                .coords()
                .validate()
                .map_err(|e| Error::InvalidPoint(format!("{:?}: {}", point.name, e)))?;
        }

        let mut regions = self.lock_write()?;
        regions
            .entry(region_key.to_string())
            .or_default()
            .extend_from_slice(points);
        Ok(())
    }

    fn query_radius(
        &self,
        region_key: &str,
        center: Coordinates,
        radius: f64,
        _unit: Unit,
    ) -> Result<Vec<GeoResult>> {
        let regions = self.lock_read()?;
        let points = regions
            .get(region_key)
            .ok_or_else(|| Error::UnknownRegion(region_key.to_string()))?;

        let mut results: Vec<GeoResult> = points
            .iter()
            .filter_map(|p| {
                let distance = haversine_km(center, p.coords());
                (distance <= radius).then(|| GeoResult {
                    name: p.name.clone(),
                    longitude: p.longitude,
                    latitude: p.latitude,
                    distance,
                })
            })
            .collect();

        // Stable sort keeps insertion order for equidistant points
        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Ok(results)
    }
}
