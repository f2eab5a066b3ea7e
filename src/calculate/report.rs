//! One-shot computation of every derived dataset for a genre.

use tracing::info;

use super::density::estimate_density;
use super::genre::{aggregate_indexed, games_in_genre, GenreIndex};
use super::share::{allocate_wedges, top_shares_indexed};
use super::trend::fit_log_log_trend_with;
use crate::config::AnalyticsConfig;
use crate::models::{CountryGameRecord, GameRecord, GenreReport};

/// Build the full report for `genre`, sharing one genre index across passes.
///
/// The density estimate covers the genre's own games.
pub fn build_report(
    games: &[GameRecord],
    country_rows: &[CountryGameRecord],
    genre: &str,
    config: &AnalyticsConfig,
) -> GenreReport {
    let index = GenreIndex::new(games);

    let genre_games = games_in_genre(games, genre);
    let aggregates = aggregate_indexed(&index, country_rows, genre);
    let top_shares = top_shares_indexed(&index, country_rows, genre);
    let wedges = allocate_wedges(&top_shares, &config.layout);
    let trend = fit_log_log_trend_with(&aggregates, &config.trend);
    let density = estimate_density(&genre_games, &config.density);

    info!(
        "Report for {:?}: {} games, {} countries, {} wedges, trend {}",
        genre,
        genre_games.len(),
        aggregates.len(),
        wedges.len(),
        if trend.is_some() { "fitted" } else { "unavailable" }
    );

    GenreReport::new(
        genre.to_string(),
        genre_games,
        aggregates,
        top_shares,
        wedges,
        trend,
        density,
    )
}
