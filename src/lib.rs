//! georadius: Radius-Bounded Geospatial Lookup
//!
//! A library and CLI tool for serving radius-bounded nearest-first lookups
//! over named geographic points, bulk-loaded from tab-separated datasets.
//!
//! ## Features
//!
//! - Streaming bulk loader: adjacency dedup + per-region batching
//! - Swappable point store behind the `GeoStore` trait
//! - Haversine radius queries, sorted nearest-first
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use georadius::coord::Coordinates;
//! use georadius::store::{memory::MemoryGeoStore, GeoPoint, GeoStore, Unit};
//!
//! let store = MemoryGeoStore::new();
//! store
//!     .insert(
//!         "CA",
//!         &[
//!             GeoPoint::new("San Francisco", -122.4194, 37.7749),
//!             GeoPoint::new("Oakland", -122.2712, 37.8044),
//!         ],
//!     )
//!     .unwrap();
//!
//! let center = Coordinates::new(37.7749, -122.4194);
//! let results = store
//!     .query_radius("CA", center, 20.0, Unit::Kilometers)
//!     .unwrap();
//! println!("{} points within 20 km", results.len());
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod ingest;
pub mod server;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use coord::Coordinates;
pub use error::{Error, Result};
pub use service::{GeoQueryService, GeoResultsResponse};
pub use store::{GeoPoint, GeoResult, GeoStore, Unit};
