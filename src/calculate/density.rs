//! Histogram and Epanechnikov kernel density over log10 game earnings.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{DensityEstimate, DensitySample, GameRecord, HistogramBin};

/// Tuning for the earnings distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityParams {
    /// Equal-width histogram bins across the padded domain
    #[serde(default = "default_bin_count")]
    pub bin_count: usize,

    /// Bandwidth is the observed log10 range divided by this
    #[serde(default = "default_bandwidth_divisor")]
    pub bandwidth_divisor: f64,

    /// Decades added on each side of the observed range
    #[serde(default = "default_padding")]
    pub padding: f64,

    /// Bandwidth used when the observed range collapses; a non-positive
    /// value falls back to the default
    #[serde(default = "default_fallback_bandwidth")]
    pub fallback_bandwidth: f64,

    /// Points the density curve is evaluated at
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
}

fn default_bin_count() -> usize {
    20
}

fn default_bandwidth_divisor() -> f64 {
    12.0
}

fn default_padding() -> f64 {
    0.15
}

fn default_fallback_bandwidth() -> f64 {
    0.2
}

fn default_sample_count() -> usize {
    200
}

impl Default for DensityParams {
    fn default() -> Self {
        Self {
            bin_count: default_bin_count(),
            bandwidth_divisor: default_bandwidth_divisor(),
            padding: default_padding(),
            fallback_bandwidth: default_fallback_bandwidth(),
            sample_count: default_sample_count(),
        }
    }
}

/// Epanechnikov kernel.
pub fn epanechnikov(u: f64) -> f64 {
    if u.abs() <= 1.0 {
        0.75 * (1.0 - u * u)
    } else {
        0.0
    }
}

/// Histogram and KDE of `log10(total_earnings)` over games with prize money.
///
/// Games without earnings are ignored; if none remain the estimate is empty.
pub fn estimate_density(games: &[GameRecord], params: &DensityParams) -> DensityEstimate {
    let values: Vec<f64> = games
        .iter()
        .filter(|g| g.has_earnings())
        .map(|g| g.total_earnings.log10())
        .collect();

    if values.is_empty() {
        debug!("No games with earnings, density is empty");
        return DensityEstimate::default();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lo = min - params.padding;
    let hi = max + params.padding;

    let bandwidth = bandwidth(max - min, params);
    let bins = histogram(&values, lo, hi, params.bin_count);
    let curve = kde_curve(&values, lo, hi, bandwidth, params.sample_count);

    debug!(
        "Density over {} games: domain [{:.3}, {:.3}], bandwidth {:.3}",
        values.len(),
        lo,
        hi,
        bandwidth
    );

    DensityEstimate {
        domain: Some((lo, hi)),
        bandwidth,
        observations: values.len(),
        bins,
        curve,
    }
}

fn bandwidth(range: f64, params: &DensityParams) -> f64 {
    let h = range / params.bandwidth_divisor;
    if h.is_finite() && h > 0.0 {
        h
    } else if params.fallback_bandwidth.is_finite() && params.fallback_bandwidth > 0.0 {
        params.fallback_bandwidth
    } else {
        default_fallback_bandwidth()
    }
}

/// Equal-width bins over `[lo, hi]`, half-open except the last.
fn histogram(values: &[f64], lo: f64, hi: f64, bin_count: usize) -> Vec<HistogramBin> {
    if bin_count == 0 {
        return Vec::new();
    }

    let width = (hi - lo) / bin_count as f64;
    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            lower_bound: lo + i as f64 * width,
            upper_bound: if i + 1 == bin_count {
                hi
            } else {
                lo + (i + 1) as f64 * width
            },
            count: 0,
        })
        .collect();

    for &v in values {
        let idx = if width > 0.0 {
            ((v - lo) / width).floor().max(0.0) as usize
        } else {
            0
        };
        bins[idx.min(bin_count - 1)].count += 1;
    }

    bins
}

fn kde_curve(
    values: &[f64],
    lo: f64,
    hi: f64,
    bandwidth: f64,
    sample_count: usize,
) -> Vec<DensitySample> {
    if sample_count == 0 {
        return Vec::new();
    }

    let step = (hi - lo) / sample_count as f64;
    let norm = values.len() as f64 * bandwidth;

    (0..sample_count)
        .map(|i| {
            let x = lo + i as f64 * step;
            let sum: f64 = values
                .iter()
                .map(|&v| epanechnikov((x - v) / bandwidth))
                .sum();
            DensitySample {
                x,
                density: sum / norm,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn games(earnings: &[f64]) -> Vec<GameRecord> {
        earnings
            .iter()
            .enumerate()
            .map(|(i, &e)| GameRecord::new(format!("G{}", i), "Fighting", e))
            .collect()
    }

    #[test]
    fn test_epanechnikov() {
        assert_eq!(epanechnikov(0.0), 0.75);
        assert_eq!(epanechnikov(1.0), 0.0);
        assert_eq!(epanechnikov(-1.5), 0.0);
        assert!((epanechnikov(0.5) - 0.5625).abs() < 1e-12);
    }

    #[test]
    fn test_no_positive_earnings_is_empty() {
        let estimate = estimate_density(&games(&[0.0, 0.0]), &DensityParams::default());
        assert_eq!(estimate, DensityEstimate::default());
        assert!(estimate.bins.is_empty());
        assert!(estimate.curve.is_empty());

        assert!(estimate_density(&[], &DensityParams::default()).is_empty());
    }

    #[test]
    fn test_histogram_counts_match_games() {
        let games = games(&[1e4, 3e4, 1e5, 2.5e5, 1e6, 1e6, 7e7, 1e8, 0.0]);
        let estimate = estimate_density(&games, &DensityParams::default());

        assert_eq!(estimate.bins.len(), 20);
        assert_eq!(estimate.observations, 8);
        assert_eq!(estimate.total_count(), 8);
    }

    #[test]
    fn test_domain_padded() {
        let estimate = estimate_density(&games(&[1e3, 1e6]), &DensityParams::default());
        let (lo, hi) = estimate.domain.unwrap();

        assert!((lo - 2.85).abs() < 1e-9);
        assert!((hi - 6.15).abs() < 1e-9);
        assert_eq!(estimate.bins[0].lower_bound, lo);
        assert_eq!(estimate.bins[19].upper_bound, hi);
        assert!((estimate.bandwidth - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_bins_contiguous() {
        let estimate = estimate_density(&games(&[5e3, 8e5, 2e6]), &DensityParams::default());
        for pair in estimate.bins.windows(2) {
            assert!((pair[0].upper_bound - pair[1].lower_bound).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_value_uses_fallback_bandwidth() {
        let estimate = estimate_density(&games(&[1e5, 1e5]), &DensityParams::default());

        assert_eq!(estimate.bandwidth, 0.2);
        assert_eq!(estimate.total_count(), 2);
        assert!(estimate.max_density() > 0.0);
    }

    #[test]
    fn test_bin_edges_half_open_last_closed() {
        let params = DensityParams {
            bin_count: 2,
            padding: 0.0,
            ..Default::default()
        };
        let estimate = estimate_density(&games(&[1e2, 1e3, 1e4]), &params);

        let counts: Vec<u32> = estimate.bins.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 2]);
    }

    #[test]
    fn test_invalid_fallback_bandwidth_uses_default() {
        let params = DensityParams {
            fallback_bandwidth: 0.0,
            ..Default::default()
        };
        let estimate = estimate_density(&games(&[5e4, 5e4]), &params);

        assert_eq!(estimate.bandwidth, 0.2);
        assert!(estimate.curve.iter().all(|s| s.density.is_finite() && s.density >= 0.0));
        assert!(estimate.max_density() > 0.0);
    }

    #[test]
    fn test_curve_non_negative_and_sized() {
        let estimate = estimate_density(&games(&[2e4, 9e4, 4e5, 3e7, 6e9]), &DensityParams::default());

        assert_eq!(estimate.curve.len(), 200);
        assert!(estimate.curve.iter().all(|s| s.density >= 0.0));
        assert!(estimate.curve.windows(2).all(|p| p[0].x < p[1].x));
    }

    #[test]
    fn test_curve_integrates_to_one() {
        // Range 1.2 decades gives a bandwidth of 0.1, inside the 0.15 padding.
        let estimate = estimate_density(&games(&[1e5, 2e5, 5e5, 1e6, 1.58e6]), &DensityParams::default());
        let (lo, hi) = estimate.domain.unwrap();
        let step = (hi - lo) / estimate.curve.len() as f64;

        let area: f64 = estimate.curve.iter().map(|s| s.density * step).sum();
        assert!((area - 1.0).abs() < 0.05, "area was {}", area);
    }

    #[test]
    fn test_custom_params() {
        let params = DensityParams {
            bin_count: 4,
            sample_count: 10,
            ..Default::default()
        };
        let estimate = estimate_density(&games(&[1e2, 1e3, 1e4]), &params);

        assert_eq!(estimate.bins.len(), 4);
        assert_eq!(estimate.curve.len(), 10);
        assert_eq!(estimate.total_count(), 3);
    }

    #[test]
    fn test_zero_bins_still_has_curve() {
        let params = DensityParams {
            bin_count: 0,
            ..Default::default()
        };
        let estimate = estimate_density(&games(&[1e2, 1e3]), &params);
        assert!(estimate.bins.is_empty());
        assert_eq!(estimate.curve.len(), 200);
    }
}
