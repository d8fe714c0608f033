//! Bulk dataset ingestion
//!
//! This module handles:
//! - Parsing tab-separated dataset lines into records
//! - Adjacency dedup and per-region batching
//! - Bulk-inserting flushed batches into a `GeoStore`
//!
//! Ingestion is a one-shot, single-threaded pass. Overlapping reloads of the
//! same region key are the caller's responsibility to serialize; the loader
//! holds no lock of its own.

pub mod batch;
pub mod record;

use crate::error::{Error, Result};
use crate::store::{GeoPoint, GeoStore};
use batch::{RegionBatch, RegionBatcher};
use record::PointRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Counters from one ingestion pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportStats {
    /// Lines read from the input
    pub lines: usize,
    /// Records accepted and handed to the store
    pub imported: usize,
    /// Lines skipped: malformed, invalid, or adjacent duplicates
    pub skipped: usize,
    /// Batches flushed to the store
    pub batches: usize,
}

/// Ingest a dataset from any buffered reader
///
/// Malformed or invalid lines are skipped with a warning unless `strict`, in
/// which case the first bad line aborts the import. Batches already flushed
/// to the store stay there either way; partial loads are expected on bad
/// input.
pub fn import_reader<R: BufRead>(
    reader: R,
    store: &dyn GeoStore,
    strict: bool,
) -> Result<ImportStats> {
    let mut batcher = RegionBatcher::new();
    let mut stats = ImportStats::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        stats.lines += 1;

        let record = match PointRecord::parse_line(&line) {
            Ok(record) => record,
            Err(e) => {
                if strict {
                    return Err(annotate_line(e, line_no + 1));
                }
                warn!("Skipping line {}: {}", line_no + 1, e);
                continue;
            }
        };

        if let Some(flushed) = batcher.push(record) {
            flush_batch(store, flushed, &mut stats)?;
        }
    }

    if let Some(last) = batcher.finish() {
        flush_batch(store, last, &mut stats)?;
    }

    // Skipped covers malformed lines and adjacent duplicates, so
    // lines == imported + skipped.
    stats.skipped = stats.lines - stats.imported;
    Ok(stats)
}

/// Ingest a dataset file (one region file, e.g. `US.txt`)
pub fn import_file(path: &Path, store: &dyn GeoStore, strict: bool) -> Result<ImportStats> {
    let file = File::open(path)
        .map_err(|e| Error::Io(std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e))))?;
    let stats = import_reader(BufReader::new(file), store, strict)?;
    info!(
        "Imported {} ({} points in {} batches, {} lines skipped)",
        path.display(),
        stats.imported,
        stats.batches,
        stats.skipped
    );
    Ok(stats)
}

/// Prefix a parse error with its 1-based line number, keeping its variant
fn annotate_line(e: Error, line_no: usize) -> Error {
    match e {
        Error::MalformedRecord(msg) => Error::MalformedRecord(format!("Line {}: {}", line_no, msg)),
        Error::InvalidPoint(msg) => Error::InvalidPoint(format!("Line {}: {}", line_no, msg)),
        other => other,
    }
}

fn flush_batch(store: &dyn GeoStore, batch: RegionBatch, stats: &mut ImportStats) -> Result<()> {
    let points: Vec<GeoPoint> = batch.points.into_iter().map(GeoPoint::from).collect();
    store.insert(&batch.region_key, &points)?;
    stats.imported += points.len();
    stats.batches += 1;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coordinates;
    use crate::store::memory::MemoryGeoStore;
    use crate::store::Unit;
    use std::io::Cursor;

    fn line(name: &str, region: &str, lat: f64, lng: f64) -> String {
        format!(
            "US\t00000\t{}\tSomewhere\t{}\tCounty\t000\t\t\t{}\t{}",
            name, region, lat, lng
        )
    }

    fn query_all(store: &MemoryGeoStore, region: &str) -> Vec<String> {
        store
            .query_radius(region, Coordinates::new(37.0, -122.0), 20_000.0, Unit::Kilometers)
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect()
    }

    #[test]
    fn test_import_groups_and_flushes_final_batch() {
        let input = [
            line("San Francisco", "CA", 37.7749, -122.4194),
            line("Oakland", "CA", 37.8044, -122.2712),
            line("Albany", "NY", 42.6526, -73.7562),
        ]
        .join("\n");

        let store = MemoryGeoStore::new();
        let stats = import_reader(Cursor::new(input), &store, false).unwrap();

        assert_eq!(stats.lines, 3);
        assert_eq!(stats.imported, 3);
        assert_eq!(stats.skipped, 0);
        assert_eq!(stats.batches, 2);
        // The trailing NY batch made it into the store
        assert_eq!(query_all(&store, "NY"), vec!["Albany"]);
    }

    #[test]
    fn test_import_dedups_adjacent_names() {
        let input = [
            line("San Francisco", "CA", 37.7749, -122.4194),
            line("San Francisco", "CA", 37.7749, -122.4194),
            line("Oakland", "CA", 37.8044, -122.2712),
        ]
        .join("\n");

        let store = MemoryGeoStore::new();
        let stats = import_reader(Cursor::new(input), &store, false).unwrap();

        assert_eq!(stats.imported, 2);
        assert_eq!(stats.skipped, 1);
        assert_eq!(query_all(&store, "CA").len(), 2);
    }

    #[test]
    fn test_import_skips_malformed_lines() {
        let input = format!(
            "{}\na\tb\n{}",
            line("San Francisco", "CA", 37.7749, -122.4194),
            line("Oakland", "CA", 37.8044, -122.2712)
        );

        let store = MemoryGeoStore::new();
        let stats = import_reader(Cursor::new(input), &store, false).unwrap();

        assert_eq!(stats.lines, 3);
        assert_eq!(stats.imported, 2);
        assert_eq!(stats.skipped, 1);
        let names = query_all(&store, "CA");
        assert!(!names.contains(&"a".to_string()));
    }

    #[test]
    fn test_import_skips_out_of_range_coordinates() {
        let input = [
            line("San Francisco", "CA", 37.7749, -122.4194),
            line("Bad", "CA", 200.0, 0.0),
        ]
        .join("\n");

        let store = MemoryGeoStore::new();
        let stats = import_reader(Cursor::new(input), &store, false).unwrap();

        assert_eq!(stats.imported, 1);
        assert_eq!(query_all(&store, "CA"), vec!["San Francisco"]);
    }

    #[test]
    fn test_import_strict_aborts_on_bad_line() {
        let input = format!(
            "{}\n{}\na\tb\n{}",
            line("San Francisco", "CA", 37.7749, -122.4194),
            line("Oakland", "CA", 37.8044, -122.2712),
            line("Albany", "NY", 42.6526, -73.7562)
        );

        let store = MemoryGeoStore::new();
        let result = import_reader(Cursor::new(input), &store, true);
        assert!(matches!(result, Err(Error::MalformedRecord(_))));
    }

    #[test]
    fn test_import_empty_input() {
        let store = MemoryGeoStore::new();
        let stats = import_reader(Cursor::new(""), &store, false).unwrap();
        assert_eq!(stats, ImportStats::default());
    }

    #[test]
    fn test_import_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", line("San Francisco", "CA", 37.7749, -122.4194)).unwrap();
        writeln!(file, "{}", line("Oakland", "CA", 37.8044, -122.2712)).unwrap();

        let store = MemoryGeoStore::new();
        let stats = import_file(file.path(), &store, false).unwrap();
        assert_eq!(stats.imported, 2);
        assert_eq!(stats.batches, 1);
    }

    #[test]
    fn test_import_file_missing() {
        let store = MemoryGeoStore::new();
        let result = import_file(Path::new("/nonexistent/US.txt"), &store, false);
        assert!(result.is_err());
    }
}
