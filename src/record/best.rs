//! The best record and its ordering.

use serde::{Deserialize, Serialize};

use crate::render::format_clock;

/// A finished run: moves taken and seconds on the clock.
///
/// Ordering is lexicographic: fewer moves wins, then fewer seconds. A run
/// "beats" a record only when strictly smaller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BestRecord {
    pub moves: u32,
    pub seconds: u32,
}

impl BestRecord {
    /// Create a record.
    #[must_use]
    pub const fn new(moves: u32, seconds: u32) -> Self {
        Self { moves, seconds }
    }

    /// Strictly better than `other`.
    #[must_use]
    pub fn beats(&self, other: &BestRecord) -> bool {
        self < other
    }

    /// Better than the stored record, or there is none.
    #[must_use]
    pub fn improves_on(&self, stored: Option<&BestRecord>) -> bool {
        stored.map_or(true, |best| self.beats(best))
    }

    /// Time as `m:ss`.
    #[must_use]
    pub fn time(&self) -> String {
        format_clock(self.seconds)
    }
}

/// Outcome of comparing a finished run with the stored record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordStatus {
    /// The run replaced the stored record.
    NewRecord,
    /// The stored record stands.
    NoNewRecord,
}

impl RecordStatus {
    /// Whether a new record was set.
    #[must_use]
    pub fn is_new(self) -> bool {
        matches!(self, RecordStatus::NewRecord)
    }

    /// Message for the finish notification.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            RecordStatus::NewRecord => "New personal record locked in.",
            RecordStatus::NoNewRecord => "Record stands, but you are close.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fewer_moves_wins() {
        assert!(BestRecord::new(9, 100).beats(&BestRecord::new(10, 5)));
        assert!(!BestRecord::new(11, 5).beats(&BestRecord::new(10, 100)));
    }

    #[test]
    fn test_equal_moves_fewer_seconds_wins() {
        assert!(BestRecord::new(10, 41).beats(&BestRecord::new(10, 42)));
        assert!(!BestRecord::new(10, 43).beats(&BestRecord::new(10, 42)));
    }

    #[test]
    fn test_tie_is_not_better() {
        let record = BestRecord::new(10, 42);
        assert!(!record.beats(&record));
    }

    #[test]
    fn test_improves_on_missing() {
        assert!(BestRecord::new(50, 500).improves_on(None));
        assert!(!BestRecord::new(12, 30).improves_on(Some(&BestRecord::new(10, 42))));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&BestRecord::new(10, 42)).unwrap();
        assert_eq!(json, r#"{"moves":10,"seconds":42}"#);
    }

    #[test]
    fn test_time() {
        assert_eq!(BestRecord::new(10, 75).time(), "1:15");
    }

    #[test]
    fn test_status() {
        assert!(RecordStatus::NewRecord.is_new());
        assert!(!RecordStatus::NoNewRecord.is_new());
    }
}
