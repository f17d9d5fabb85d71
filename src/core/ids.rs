// Exploration Log - core/ids.rs
//
// Entry id assignment. Ids are millisecond timestamps, bumped past the last
// issued id whenever the clock has not advanced, so two creations in the
// same millisecond (or after a clock step backwards) never collide.
//
// Once an id of `u64::MAX` has been issued or loaded there is nothing left
// above it; the generator then reports exhaustion and the caller picks a
// free id from the log itself.

use crate::core::model::EntryId;

/// Monotonic, timestamp-derived id source.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator that will never hand out an id at or below `max_existing`.
    pub fn seeded(max_existing: Option<EntryId>) -> Self {
        Self {
            last: max_existing.map(|id| id.0),
        }
    }

    /// Next id from the wall clock, or `None` once ids above the last one
    /// are exhausted.
    pub fn next(&mut self) -> Option<EntryId> {
        let now_ms = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(now_ms)
    }

    /// Next id given the current time in milliseconds.
    pub fn next_at(&mut self, now_ms: u64) -> Option<EntryId> {
        let id = match self.last {
            Some(last) if now_ms <= last => last.checked_add(1)?,
            _ => now_ms,
        };
        self.last = Some(id);
        Some(EntryId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_timestamp_when_clock_advances() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_at(1_000), Some(EntryId(1_000)));
        assert_eq!(ids.next_at(1_005), Some(EntryId(1_005)));
    }

    #[test]
    fn test_same_millisecond_bumps() {
        let mut ids = IdGenerator::new();
        let a = ids.next_at(1_000);
        let b = ids.next_at(1_000);
        let c = ids.next_at(999);
        assert_eq!(a, Some(EntryId(1_000)));
        assert_eq!(b, Some(EntryId(1_001)));
        assert_eq!(c, Some(EntryId(1_002)));
    }

    #[test]
    fn test_seeded_skips_existing_ids() {
        let mut ids = IdGenerator::seeded(Some(EntryId(5_000)));
        assert_eq!(ids.next_at(4_000), Some(EntryId(5_001)));
        assert_eq!(ids.next_at(6_000), Some(EntryId(6_000)));
    }

    #[test]
    fn test_exhausted_after_max_id() {
        let mut ids = IdGenerator::seeded(Some(EntryId(u64::MAX)));
        assert_eq!(ids.next_at(1_000), None);
        assert_eq!(ids.next_at(u64::MAX), None);

        let mut ids = IdGenerator::seeded(Some(EntryId(u64::MAX - 1)));
        assert_eq!(ids.next_at(1_000), Some(EntryId(u64::MAX)));
        assert_eq!(ids.next_at(1_000), None);
    }

    #[test]
    fn test_wall_clock_ids_strictly_increase() {
        let mut ids = IdGenerator::new();
        let mut prev = ids.next().unwrap();
        for _ in 0..100 {
            let id = ids.next().unwrap();
            assert!(id > prev);
            prev = id;
        }
    }
}
