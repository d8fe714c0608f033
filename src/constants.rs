//! Centralized constants for the georadius crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in kilometers (IUGG mean radius)
    pub const EARTH_RADIUS_KM: f64 = 6_371.008_8;
}

/// Query defaults
pub mod query {
    /// Default radius for the bare-list (find) variant, in kilometers
    pub const DEFAULT_FIND_RADIUS_KM: f64 = 20.0;

    /// Default radius for the wrapped (get) variant, in kilometers
    pub const DEFAULT_GET_RADIUS_KM: f64 = 10.0;
}

/// Dataset layout (geonames postal-code style, tab-separated)
pub mod dataset {
    /// Minimum number of tab-separated fields per record
    pub const MIN_FIELDS: usize = 11;

    /// Field index of the place name (city)
    pub const FIELD_NAME: usize = 2;

    /// Field index of the region code (state/province)
    pub const FIELD_REGION: usize = 4;

    /// Field index of the latitude
    pub const FIELD_LATITUDE: usize = 9;

    /// Field index of the longitude
    pub const FIELD_LONGITUDE: usize = 10;
}
