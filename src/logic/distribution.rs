//! Feature distribution explorer
//!
//! Two-panel histogram of one feature over the historical outcome subsets,
//! with the selected client's value marked on both panels and echoed as a
//! textual readout.

use serde::{Deserialize, Serialize};

use super::dataset::{Outcome, TrainingSplit};

/// Bin count of the original dashboard's histograms
pub const DEFAULT_BINS: usize = 2;

/// Upper bound on the bin count; the query parameter is user-controlled
/// and sizes an allocation
pub const MAX_BINS: usize = 100;

/// One histogram panel: equal-width bins over the subset's own value range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramPanel {
    pub label: String,
    pub counts: Vec<u64>,
    /// `counts.len() + 1` edges; empty when the subset has no finite values
    pub bin_edges: Vec<f64>,
    pub sample_count: usize,
}

/// Distribution payload for one feature and one selected client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureDistribution {
    pub feature: String,
    pub client_id: i64,
    /// Marker drawn as a vertical line on both panels
    pub client_value: f64,
    pub no_default: HistogramPanel,
    #[serde(rename = "default")]
    pub defaulted: HistogramPanel,
    pub readout: String,
}

/// Bin a set of values into `bins` equal-width buckets, clamped to
/// `1..=MAX_BINS`. Non-finite values are excluded; values equal to the
/// range maximum land in the last bin.
pub fn histogram(label: &str, values: impl Iterator<Item = f64>, bins: usize) -> HistogramPanel {
    let bins = bins.clamp(1, MAX_BINS);
    let finite: Vec<f64> = values.filter(|v| v.is_finite()).collect();

    if finite.is_empty() {
        return HistogramPanel {
            label: label.to_string(),
            counts: vec![0; bins],
            bin_edges: Vec::new(),
            sample_count: 0,
        };
    }

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in &finite {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    // A degenerate range still gets a drawable bar
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0u64; bins];
    for &v in &finite {
        let mut idx = ((v - lo) / width) as usize;
        if idx >= bins {
            idx = bins - 1;
        }
        counts[idx] += 1;
    }

    let bin_edges = (0..=bins).map(|i| lo + width * i as f64).collect();

    HistogramPanel {
        label: label.to_string(),
        counts,
        bin_edges,
        sample_count: finite.len(),
    }
}

/// Build the full two-panel payload for one feature
pub fn feature_distribution(
    training: &TrainingSplit,
    feature: &str,
    column: usize,
    client_id: i64,
    client_value: f64,
    bins: usize,
) -> FeatureDistribution {
    FeatureDistribution {
        feature: feature.to_string(),
        client_id,
        client_value,
        no_default: histogram(
            "No payment default",
            training.column_values(Outcome::NoDefault, column),
            bins,
        ),
        defaulted: histogram(
            "Payment default",
            training.column_values(Outcome::Defaulted, column),
            bins,
        ),
        readout: format!("{feature} for client {client_id} = {client_value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_splits_range_into_equal_bins() {
        let panel = histogram("h", [0.0, 1.0, 2.0, 3.0, 10.0].into_iter(), 2);
        assert_eq!(panel.counts, vec![4, 1]);
        assert_eq!(panel.bin_edges, vec![0.0, 5.0, 10.0]);
        assert_eq!(panel.sample_count, 5);
    }

    #[test]
    fn range_maximum_lands_in_last_bin() {
        let panel = histogram("h", [0.0, 10.0].into_iter(), 2);
        assert_eq!(panel.counts, vec![1, 1]);
    }

    #[test]
    fn non_finite_values_are_excluded() {
        let panel = histogram("h", [1.0, f64::NAN, 2.0, f64::INFINITY].into_iter(), 2);
        assert_eq!(panel.sample_count, 2);
        assert_eq!(panel.counts.iter().sum::<u64>(), 2);
    }

    #[test]
    fn constant_values_still_produce_a_bar() {
        let panel = histogram("h", [5.0, 5.0, 5.0].into_iter(), 2);
        assert_eq!(panel.counts.iter().sum::<u64>(), 3);
        assert_eq!(panel.bin_edges.first().copied(), Some(4.5));
        assert_eq!(panel.bin_edges.last().copied(), Some(5.5));
    }

    #[test]
    fn empty_subset_produces_zero_counts() {
        let panel = histogram("h", std::iter::empty(), 2);
        assert_eq!(panel.counts, vec![0, 0]);
        assert!(panel.bin_edges.is_empty());
        assert_eq!(panel.sample_count, 0);
    }

    #[test]
    fn zero_bins_is_clamped_to_one() {
        let panel = histogram("h", [1.0, 2.0].into_iter(), 0);
        assert_eq!(panel.counts, vec![2]);
    }

    #[test]
    fn oversized_bin_count_is_clamped() {
        // The bin count sizes an allocation and comes from a query
        // parameter; usize::MAX must not reach the vec constructor
        let panel = histogram("h", [1.0, 2.0].into_iter(), usize::MAX);
        assert_eq!(panel.counts.len(), MAX_BINS);
        assert_eq!(panel.counts.iter().sum::<u64>(), 2);
        assert_eq!(panel.bin_edges.len(), MAX_BINS + 1);

        // An empty subset takes the same clamped path
        let empty = histogram("h", std::iter::empty(), usize::MAX);
        assert_eq!(empty.counts.len(), MAX_BINS);
    }
}
