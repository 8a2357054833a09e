//! One daily reading of the sentiment index.

use super::classification::Classification;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Highest value the index can take.
pub const MAX_INDEX_VALUE: u8 = 100;

/// A single index reading.
///
/// The classification is the label delivered by the upstream service; it is
/// carried as-is rather than recomputed from `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: DateTime<Local>,
    pub value: u8,
    pub classification: Classification,
}

impl Observation {
    pub fn new(timestamp: DateTime<Local>, value: u8, classification: Classification) -> Self {
        Self {
            timestamp,
            value,
            classification,
        }
    }

    /// True if the upstream label agrees with the banding rule for `value`.
    pub fn is_consistent(&self) -> bool {
        Classification::from_value(self.value) == self.classification
    }
}
