//! Every derived dataset for one genre, bundled for the chart layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CountryAggregate, CountryTopShare, DensityEstimate, GameRecord, RadialWedge, RegressionLine};

/// Derived datasets for a single genre selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreReport {
    /// Selected genre
    pub genre: String,

    /// When the report was computed
    pub computed_at: DateTime<Utc>,

    /// Games of the genre with prize money, ascending by earnings
    pub games: Vec<GameRecord>,

    /// Genre-scoped country totals, descending by earnings
    pub aggregates: Vec<CountryAggregate>,

    /// Top game per country, descending by all-genre country earnings
    pub top_shares: Vec<CountryTopShare>,

    /// Radial layout of the top shares
    pub wedges: Vec<RadialWedge>,

    /// Earnings-vs-players trend, if there is enough data
    pub trend: Option<RegressionLine>,

    /// Earnings distribution across the genre's games
    pub density: DensityEstimate,
}

impl GenreReport {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        genre: String,
        games: Vec<GameRecord>,
        aggregates: Vec<CountryAggregate>,
        top_shares: Vec<CountryTopShare>,
        wedges: Vec<RadialWedge>,
        trend: Option<RegressionLine>,
        density: DensityEstimate,
    ) -> Self {
        Self {
            genre,
            computed_at: Utc::now(),
            games,
            aggregates,
            top_shares,
            wedges,
            trend,
            density,
        }
    }

    /// True if no country rows matched the genre.
    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty() && self.top_shares.is_empty()
    }

    /// Sum of genre-scoped earnings over all countries.
    pub fn total_genre_earnings(&self) -> f64 {
        self.aggregates.iter().map(|a| a.earnings).sum()
    }
}
