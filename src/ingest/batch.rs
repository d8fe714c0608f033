//! Dedup-and-group streaming state machine
//!
//! Consumes parsed records in strict arrival order, drops consecutive
//! duplicate-named entries, and partitions the stream into per-region batches.
//! A batch is flushed when the region key changes or the stream ends; an
//! empty batch is never flushed.
//!
//! The dataset is assumed sorted so that rows sharing a region code are
//! contiguous. If a key disappears and reappears later, the reappearance
//! starts a new independent batch rather than merging with the earlier one.

use crate::ingest::record::PointRecord;

/// A finalized group of points sharing one region key
#[derive(Debug, Clone, PartialEq)]
pub struct RegionBatch {
    pub region_key: String,
    pub points: Vec<PointRecord>,
}

/// Streaming batcher: adjacency dedup, then group-by-region with boundary flush
///
/// Two states: *empty* (no batch started) and *accumulating* (batch in
/// progress). `push` returns a flushed batch when the incoming record's key
/// differs from the current one; `finish` flushes whatever is pending.
#[derive(Debug, Default)]
pub struct RegionBatcher {
    /// Name of the last accepted record, for adjacency dedup
    last_name: Option<String>,
    current: Option<RegionBatch>,
}

impl RegionBatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one record, returning a completed batch if this record closed one
    ///
    /// Dedup runs before grouping: a record whose name matches the previously
    /// accepted record's name is dropped regardless of its region key, and
    /// does not affect batch boundaries.
    pub fn push(&mut self, record: PointRecord) -> Option<RegionBatch> {
        if self.last_name.as_deref() == Some(record.name.as_str()) {
            return None;
        }
        self.last_name = Some(record.name.clone());

        let mut flushed = None;
        match &mut self.current {
            Some(batch) if batch.region_key == record.region_key => {
                batch.points.push(record);
            }
            Some(_) => {
                flushed = self.current.take();
                self.current = Some(RegionBatch {
                    region_key: record.region_key.clone(),
                    points: vec![record],
                });
            }
            None => {
                self.current = Some(RegionBatch {
                    region_key: record.region_key.clone(),
                    points: vec![record],
                });
            }
        }
        flushed
    }

    /// Flush the pending batch at end of stream, if any
    pub fn finish(self) -> Option<RegionBatch> {
        self.current.filter(|b| !b.points.is_empty())
    }
}
