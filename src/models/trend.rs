//! Log-log trend line.

use serde::{Deserialize, Serialize};

/// A (players, earnings) point in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub players: f64,
    pub earnings: f64,
}

/// Least-squares fit of `ln(earnings) = slope * ln(players) + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionLine {
    pub slope: f64,
    pub intercept: f64,

    /// Number of points the fit was computed from
    pub sample_size: usize,

    /// Line evaluated at the smallest player count
    pub start: TrendPoint,

    /// Line evaluated at the largest player count
    pub end: TrendPoint,
}

impl RegressionLine {
    /// Evaluate the line in log space.
    pub fn predict_ln(&self, ln_players: f64) -> f64 {
        self.slope * ln_players + self.intercept
    }

    /// Predicted earnings for a player count, in data space.
    pub fn predict(&self, players: f64) -> f64 {
        self.predict_ln(players.ln()).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_power_law() {
        // earnings = e^1 * players^2
        let line = RegressionLine {
            slope: 2.0,
            intercept: 1.0,
            sample_size: 3,
            start: TrendPoint { players: 1.0, earnings: 1.0_f64.exp() },
            end: TrendPoint { players: 10.0, earnings: 100.0 * 1.0_f64.exp() },
        };

        assert!((line.predict_ln(0.0) - 1.0).abs() < 1e-12);
        assert!((line.predict(10.0) - 100.0 * 1.0_f64.exp()).abs() < 1e-9);
    }
}
