//! The ordered, immutable sequence of observations.

use super::observation::Observation;
use serde::Serialize;

/// Observations ordered newest-first.
///
/// Construction sorts by timestamp, descending, with a stable sort so
/// readings sharing a timestamp keep their delivered order. Position 0 is
/// always the most recent reading; rolling windows anchored at position `i`
/// therefore extend back in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentSeries {
    observations: Vec<Observation>,
}

impl SentimentSeries {
    pub fn new(mut observations: Vec<Observation>) -> Self {
        observations.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Self { observations }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Observations, newest first.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Most recent observation.
    pub fn latest(&self) -> Option<&Observation> {
        self.observations.first()
    }

    /// Index values as floats, in series order (newest first).
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| f64::from(o.value)).collect()
    }

    /// Observations oldest first, for plotting along a time axis.
    pub fn chronological(&self) -> impl DoubleEndedIterator<Item = &Observation> + ExactSizeIterator {
        self.observations.iter().rev()
    }

    /// Number of observations whose label disagrees with the banding rule.
    pub fn inconsistent_count(&self) -> usize {
        self.observations.iter().filter(|o| !o.is_consistent()).count()
    }
}

impl<'a> IntoIterator for &'a SentimentSeries {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}
