//! Genre lookup and genre-scoped country aggregation.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::models::{CountryAggregate, CountryGameRecord, GameRecord};

/// Game name to genre lookup built from the games table.
///
/// Duplicate game names resolve to the last row seen.
#[derive(Debug, Clone, Default)]
pub struct GenreIndex<'a> {
    by_game: HashMap<&'a str, &'a str>,
}

impl<'a> GenreIndex<'a> {
    pub fn new(games: &'a [GameRecord]) -> Self {
        let by_game = games
            .iter()
            .map(|g| (g.name.as_str(), g.genre.as_str()))
            .collect();
        Self { by_game }
    }

    /// Genre of a game, if the game is known.
    pub fn genre_of(&self, game: &str) -> Option<&'a str> {
        self.by_game.get(game).copied()
    }

    /// True if `game` is known and belongs to `genre`.
    pub fn is_in_genre(&self, game: &str, genre: &str) -> bool {
        self.genre_of(game) == Some(genre)
    }

    pub fn len(&self) -> usize {
        self.by_game.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_game.is_empty()
    }
}

/// Distinct genres, sorted. The first entry is the default selection.
pub fn list_genres(games: &[GameRecord]) -> Vec<String> {
    games
        .iter()
        .map(|g| g.genre.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Games of `genre` with prize money, ascending by earnings.
///
/// An empty genre selects every game.
pub fn games_in_genre(games: &[GameRecord], genre: &str) -> Vec<GameRecord> {
    let mut selected: Vec<GameRecord> = games
        .iter()
        .filter(|g| (genre.is_empty() || g.genre == genre) && g.has_earnings())
        .cloned()
        .collect();
    selected.sort_by(|a, b| a.total_earnings.total_cmp(&b.total_earnings));
    selected
}

/// Games of `genre` with prize money, highest earners first.
pub fn leaderboard(games: &[GameRecord], genre: &str) -> Vec<GameRecord> {
    let mut selected = games_in_genre(games, genre);
    selected.sort_by(|a, b| b.total_earnings.total_cmp(&a.total_earnings));
    selected
}

/// Per-country totals for one genre.
///
/// Rows whose game is unknown or of another genre are skipped. Output is
/// descending by earnings; equal earnings keep first-encounter order.
pub fn aggregate_by_country(
    games: &[GameRecord],
    country_rows: &[CountryGameRecord],
    genre: &str,
) -> Vec<CountryAggregate> {
    if games.is_empty() {
        return Vec::new();
    }
    let index = GenreIndex::new(games);
    aggregate_indexed(&index, country_rows, genre)
}

/// [`aggregate_by_country`] against a prebuilt index.
pub fn aggregate_indexed(
    index: &GenreIndex<'_>,
    country_rows: &[CountryGameRecord],
    genre: &str,
) -> Vec<CountryAggregate> {
    if genre.is_empty() || index.is_empty() || country_rows.is_empty() {
        return Vec::new();
    }

    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<CountryAggregate> = Vec::new();

    for row in country_rows {
        if !index.is_in_genre(&row.game, genre) {
            continue;
        }

        let pos = *positions.entry(row.country.as_str()).or_insert_with(|| {
            stats.push(CountryAggregate::new(row.country.clone()));
            stats.len() - 1
        });
        stats[pos].add_row(row.game_earnings, row.country_player_count);
    }

    stats.sort_by(|a, b| b.earnings.total_cmp(&a.earnings));

    debug!(
        "Aggregated {} countries for genre {:?} from {} rows",
        stats.len(),
        genre,
        country_rows.len()
    );
    stats
}
