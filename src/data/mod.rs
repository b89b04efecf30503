//! Seat data pre-processing
//!
//! The chart accepts either flat per-seat records or aggregated records of
//! the form `{seats: k, ...attrs}`. This module expands aggregated input
//! into `k` flat records each (in input order, so contiguous index ranges
//! keep their semantic grouping) and strips any stale `x`/`y` coordinates
//! a caller may have left on its objects from a previous layout pass.

use crate::layout::display_list::SeatRecord;

/// Keys the layout engine owns; caller data never carries them into a pass.
const POSITION_KEYS: [&str; 2] = ["x", "y"];

/// Strip stale coordinates from flat per-seat records.
pub fn clean_raw(records: Vec<SeatRecord>) -> Vec<SeatRecord> {
    records
        .into_iter()
        .map(|mut record| {
            for key in POSITION_KEYS {
                record.remove(key);
            }
            record
        })
        .collect()
}

/// Expand aggregated records into flat per-seat records.
///
/// Each input record contributes `seats` copies of its remaining attributes,
/// in input order. A missing or non-numeric `seats` key counts as zero, same
/// as the original chart's `{ seats = 0 }` destructuring default.
pub fn expand_aggregated(records: Vec<SeatRecord>) -> Vec<SeatRecord> {
    let mut flat = Vec::new();
    for mut record in records {
        let seats = record
            .remove("seats")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as usize;
        for key in POSITION_KEYS {
            record.remove(key);
        }
        for _ in 0..seats {
            flat.push(record.clone());
        }
    }
    flat
}
