//! Genre-scoped country totals.

use serde::{Deserialize, Serialize};

/// Per-country totals over the rows of one genre.
///
/// `earnings` is the genre-scoped sum of per-game earnings. It is not the
/// country's all-genre total, which lives on [`super::CountryTopShare`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryAggregate {
    pub country: String,

    /// Sum of game earnings over matching rows
    pub earnings: f64,

    /// Sum of player counts over matching rows
    pub players: f64,

    /// Number of matching rows
    pub game_count: u32,
}

impl CountryAggregate {
    /// Create an empty aggregate for a country.
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            earnings: 0.0,
            players: 0.0,
            game_count: 0,
        }
    }

    /// Fold one matching row into the totals.
    pub fn add_row(&mut self, game_earnings: f64, player_count: f64) {
        self.earnings += game_earnings;
        self.players += player_count;
        self.game_count += 1;
    }

    /// Earnings per player, if any players were counted.
    pub fn earnings_per_player(&self) -> Option<f64> {
        if self.players > 0.0 {
            Some(self.earnings / self.players)
        } else {
            None
        }
    }

    /// True if the aggregate can be placed on a log-log plot.
    pub fn is_log_plottable(&self) -> bool {
        self.players > 0.0 && self.earnings > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_row_accumulates() {
        let mut agg = CountryAggregate::new("Sweden");
        agg.add_row(100.0, 4.0);
        agg.add_row(50.0, 6.0);

        assert_eq!(agg.earnings, 150.0);
        assert_eq!(agg.players, 10.0);
        assert_eq!(agg.game_count, 2);
    }

    #[test]
    fn test_earnings_per_player() {
        let mut agg = CountryAggregate::new("Denmark");
        assert_eq!(agg.earnings_per_player(), None);

        agg.add_row(1000.0, 4.0);
        assert_eq!(agg.earnings_per_player(), Some(250.0));
    }

    #[test]
    fn test_is_log_plottable() {
        let mut agg = CountryAggregate::new("Peru");
        assert!(!agg.is_log_plottable());

        agg.add_row(0.0, 3.0);
        assert!(!agg.is_log_plottable());

        agg.add_row(10.0, 0.0);
        assert!(agg.is_log_plottable());
    }
}
