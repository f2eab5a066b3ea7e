//! Log-log least-squares trend of earnings against players.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{CountryAggregate, RegressionLine, TrendPoint};

/// Tuning for the trend fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendParams {
    /// Fewest plottable countries needed before a line is fitted
    #[serde(default = "default_min_points")]
    pub min_points: usize,
}

fn default_min_points() -> usize {
    3
}

impl Default for TrendParams {
    fn default() -> Self {
        Self {
            min_points: default_min_points(),
        }
    }
}

/// Fit `ln(earnings) = m * ln(players) + b` with the default parameters.
pub fn fit_log_log_trend(aggregates: &[CountryAggregate]) -> Option<RegressionLine> {
    fit_log_log_trend_with(aggregates, &TrendParams::default())
}

/// Fit `ln(earnings) = m * ln(players) + b` over countries with positive
/// players and earnings.
///
/// Returns `None` when there are fewer than `min_points` such countries or
/// every country has the same player count.
pub fn fit_log_log_trend_with(
    aggregates: &[CountryAggregate],
    params: &TrendParams,
) -> Option<RegressionLine> {
    let points: Vec<(f64, f64)> = aggregates
        .iter()
        .filter(|a| a.is_log_plottable())
        .map(|a| (a.players, a.earnings))
        .collect();

    if points.len() < params.min_points.max(2) {
        debug!("Not enough points for a trend line ({})", points.len());
        return None;
    }

    let min_players = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let max_players = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    if min_players == max_players {
        debug!("Degenerate trend: all player counts identical");
        return None;
    }

    let n = points.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
    for &(players, earnings) in &points {
        let x = players.ln();
        let y = earnings.ln();
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let denom = n * sum_x2 - sum_x * sum_x;
    if denom == 0.0 {
        debug!("Degenerate trend: zero denominator");
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;

    let endpoint = |players: f64| {
        let ln_x = players.ln();
        TrendPoint {
            players: ln_x.exp(),
            earnings: (slope * ln_x + intercept).exp(),
        }
    };

    Some(RegressionLine {
        slope,
        intercept,
        sample_size: points.len(),
        start: endpoint(min_players),
        end: endpoint(max_players),
    })
}
