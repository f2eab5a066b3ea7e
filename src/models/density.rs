//! Histogram and kernel density output over log10 earnings.

use serde::{Deserialize, Serialize};

/// One histogram bin. Bounds are in log10(earnings) space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub count: u32,
}

impl HistogramBin {
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    pub fn midpoint(&self) -> f64 {
        (self.lower_bound + self.upper_bound) / 2.0
    }
}

/// One sample of the density curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensitySample {
    pub x: f64,
    pub density: f64,
}

/// Histogram plus KDE curve over the same padded domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DensityEstimate {
    /// Padded `[min, max]` in log10 space; `None` when there was no data
    pub domain: Option<(f64, f64)>,

    /// Kernel bandwidth used for the curve
    pub bandwidth: f64,

    /// Number of observations (games with positive earnings)
    pub observations: usize,

    pub bins: Vec<HistogramBin>,
    pub curve: Vec<DensitySample>,
}

impl DensityEstimate {
    pub fn is_empty(&self) -> bool {
        self.observations == 0
    }

    /// Sum of counts across all bins.
    pub fn total_count(&self) -> u32 {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Largest bin count, used to scale the histogram axis.
    pub fn max_count(&self) -> u32 {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Peak of the density curve.
    pub fn max_density(&self) -> f64 {
        self.curve.iter().map(|s| s.density).fold(0.0, f64::max)
    }

    /// Whole decades (10^4 ..= 10^10) that fall inside the padded domain.
    pub fn decade_ticks(&self) -> Vec<i32> {
        match self.domain {
            Some((lo, hi)) => (4..=10)
                .filter(|&t| f64::from(t) >= lo && f64::from(t) <= hi)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_geometry() {
        let bin = HistogramBin {
            lower_bound: 4.0,
            upper_bound: 4.5,
            count: 3,
        };
        assert_eq!(bin.width(), 0.5);
        assert_eq!(bin.midpoint(), 4.25);
    }

    #[test]
    fn test_empty_estimate() {
        let estimate = DensityEstimate::default();
        assert!(estimate.is_empty());
        assert_eq!(estimate.total_count(), 0);
        assert_eq!(estimate.max_count(), 0);
        assert_eq!(estimate.max_density(), 0.0);
        assert!(estimate.decade_ticks().is_empty());
    }

    #[test]
    fn test_decade_ticks_within_domain() {
        let estimate = DensityEstimate {
            domain: Some((4.85, 7.15)),
            ..Default::default()
        };
        assert_eq!(estimate.decade_ticks(), vec![5, 6, 7]);
    }
}
