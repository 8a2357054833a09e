//! Classification frequencies, modal classification and value histogram.

use crate::domain::{Classification, SentimentSeries, MAX_INDEX_VALUE};
use serde::Serialize;
use std::collections::BTreeMap;
use std::num::NonZeroU8;

/// Frequency table of classification labels present in a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationCounts {
    counts: BTreeMap<Classification, usize>,
}

impl ClassificationCounts {
    pub fn from_series(series: &SentimentSeries) -> Self {
        let mut counts = BTreeMap::new();
        for obs in series {
            *counts.entry(obs.classification).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for one label (0 when absent).
    pub fn get(&self, classification: Classification) -> usize {
        self.counts.get(&classification).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Share of the total for one label, in `[0, 1]`.
    pub fn share(&self, classification: Classification) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(classification) as f64 / total as f64
    }

    /// Labels present, in canonical order, with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (Classification, usize)> + '_ {
        self.counts.iter().map(|(c, n)| (*c, *n))
    }

    pub fn as_map(&self) -> &BTreeMap<Classification, usize> {
        &self.counts
    }

    /// Most frequent label. Ties go to the first label in canonical order.
    pub fn mode(&self) -> Option<Classification> {
        let mut best: Option<(Classification, usize)> = None;
        for c in Classification::ALL {
            let n = self.get(c);
            if n == 0 {
                continue;
            }
            match best {
                Some((_, best_n)) if n <= best_n => {}
                _ => best = Some((c, n)),
            }
        }
        best.map(|(c, _)| c)
    }
}

/// One histogram bucket: `[start, end)`, the last bucket closed at 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistogramBin {
    pub start: u8,
    pub end: u8,
    pub count: usize,
}

/// Distribution of index values in fixed-width buckets over 0..=100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Histogram {
    pub bin_width: u8,
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bucket the series values.
    pub fn from_series(series: &SentimentSeries, bin_width: NonZeroU8) -> Self {
        let bin_width = bin_width.get();
        let max = MAX_INDEX_VALUE as usize;
        let width = bin_width as usize;
        let bin_count = max.div_ceil(width).max(1);

        let mut bins: Vec<HistogramBin> = (0..bin_count)
            .map(|i| HistogramBin {
                start: (i * width).min(max) as u8,
                end: ((i + 1) * width).min(max) as u8,
                count: 0,
            })
            .collect();

        for obs in series {
            let idx = (obs.value as usize / width).min(bin_count - 1);
            bins[idx].count += 1;
        }

        Self { bin_width, bins }
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Largest bucket count (0 for an empty histogram).
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{make_series, make_series_from_values};
    use Classification::*;

    fn width(w: u8) -> NonZeroU8 {
        NonZeroU8::new(w).unwrap()
    }

    #[test]
    fn counts_and_mode() {
        let series = make_series(&[
            (10, ExtremeFear),
            (20, Fear),
            (90, ExtremeGreed),
            (88, ExtremeGreed),
        ]);
        let counts = ClassificationCounts::from_series(&series);

        assert_eq!(counts.get(ExtremeFear), 1);
        assert_eq!(counts.get(Fear), 1);
        assert_eq!(counts.get(ExtremeGreed), 2);
        assert_eq!(counts.get(Neutral), 0);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.as_map().len(), 3);
        assert_eq!(counts.mode(), Some(ExtremeGreed));
    }

    #[test]
    fn mode_tie_goes_to_canonical_order() {
        let series = make_series(&[(80, ExtremeGreed), (30, Fear), (85, ExtremeGreed), (35, Fear)]);
        let counts = ClassificationCounts::from_series(&series);
        assert_eq!(counts.mode(), Some(Fear));
    }

    #[test]
    fn empty_counts() {
        let counts = ClassificationCounts::from_series(&make_series(&[]));
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.mode(), None);
        assert_eq!(counts.share(Fear), 0.0);
    }

    #[test]
    fn iter_is_canonical_order() {
        let series = make_series(&[(90, ExtremeGreed), (50, Neutral), (10, ExtremeFear)]);
        let labels: Vec<_> = ClassificationCounts::from_series(&series)
            .iter()
            .map(|(c, _)| c)
            .collect();
        assert_eq!(labels, vec![ExtremeFear, Neutral, ExtremeGreed]);
    }

    #[test]
    fn histogram_width_5_has_20_bins() {
        let series = make_series_from_values(&[0, 4, 5, 99, 100, 100]);
        let hist = Histogram::from_series(&series, width(5));

        assert_eq!(hist.bins.len(), 20);
        assert_eq!(hist.bins[0].count, 2);
        assert_eq!(hist.bins[1].count, 1);
        // 99 and 100 share the closed last bucket
        assert_eq!(hist.bins[19].start, 95);
        assert_eq!(hist.bins[19].end, 100);
        assert_eq!(hist.bins[19].count, 3);
        assert_eq!(hist.total(), 6);
        assert_eq!(hist.max_count(), 3);
    }

    #[test]
    fn histogram_uneven_width() {
        let series = make_series_from_values(&[100, 97, 0]);
        let hist = Histogram::from_series(&series, width(7));
        assert_eq!(hist.bins.len(), 15);
        assert_eq!(hist.bins[14].start, 98);
        assert_eq!(hist.bins[14].end, 100);
        assert_eq!(hist.bins[14].count, 1);
        assert_eq!(hist.bins[13].count, 1);
        assert_eq!(hist.total(), 3);
    }

    #[test]
    fn histogram_single_bin() {
        let series = make_series_from_values(&[3, 50, 100]);
        let hist = Histogram::from_series(&series, width(200));
        assert_eq!(hist.bins.len(), 1);
        assert_eq!(hist.bins[0].count, 3);
    }
}
