//! Dataset record parsing
//!
//! Parses one line of the tab-separated geographic points dataset into a
//! `PointRecord`. The layout follows the geonames postal-code dumps: only the
//! place name, region code, latitude, and longitude fields are read; the rest
//! are ignored.

use crate::constants::dataset::{
    FIELD_LATITUDE, FIELD_LONGITUDE, FIELD_NAME, FIELD_REGION, MIN_FIELDS,
};
use crate::coord::Coordinates;
use crate::error::{Error, Result};

/// One parsed record from the dataset
#[derive(Debug, Clone, PartialEq)]
pub struct PointRecord {
    /// Place name (city)
    pub name: String,
    /// Region key the point is grouped and queried under (state/province code)
    pub region_key: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl PointRecord {
    /// Parse a single tab-separated dataset line
    ///
    /// Returns `MalformedRecord` when the line has too few fields or a
    /// coordinate field is not a decimal number, and `InvalidPoint` when a
    /// coordinate parses but is non-finite or out of range. Values are never
    /// clamped.
    pub fn parse_line(line: &str) -> Result<PointRecord> {
        let fields: Vec<&str> = line.split('\t').collect();

        if fields.len() < MIN_FIELDS {
            return Err(Error::MalformedRecord(format!(
                "Expected at least {} fields, got {}",
                MIN_FIELDS,
                fields.len()
            )));
        }

        let latitude = parse_coordinate(fields[FIELD_LATITUDE], "latitude")?;
        let longitude = parse_coordinate(fields[FIELD_LONGITUDE], "longitude")?;

        Coordinates::new(latitude, longitude)
            .validate()
            .map_err(|e| Error::InvalidPoint(e.to_string()))?;

        Ok(PointRecord {
            name: fields[FIELD_NAME].to_string(),
            region_key: fields[FIELD_REGION].to_string(),
            longitude,
            latitude,
        })
    }
}

fn parse_coordinate(value: &str, field: &str) -> Result<f64> {
    value.trim().parse().map_err(|_| {
        Error::MalformedRecord(format!("Invalid {} value: {:?}", field, value))
    })
}
