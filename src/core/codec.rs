// Exploration Log - core/codec.rs
//
// JSON encoding of the whole log, the unit of persistence.
// Compact output (no pretty-printing) so the stored value matches what
// earlier releases wrote byte for byte.

use crate::core::model::{Entry, EntryId};
use std::collections::HashSet;

/// Serialise the log as a compact JSON array.
pub fn encode_log(entries: &[Entry]) -> Result<String, serde_json::Error> {
    serde_json::to_string(entries)
}

/// Deserialise a stored log.
///
/// JSON `null` yields `Ok(None)` and is treated by callers like an absent key.
pub fn decode_log(raw: &str) -> Result<Option<Vec<Entry>>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Drop entries whose id already appeared earlier in the sequence.
///
/// Returns the cleaned log and the ids that were dropped, in order.
pub fn dedupe_ids(entries: Vec<Entry>) -> (Vec<Entry>, Vec<EntryId>) {
    let mut seen = HashSet::with_capacity(entries.len());
    let mut dropped = Vec::new();
    let kept = entries
        .into_iter()
        .filter(|e| {
            if seen.insert(e.id) {
                true
            } else {
                dropped.push(e.id);
                false
            }
        })
        .collect();
    (kept, dropped)
}
