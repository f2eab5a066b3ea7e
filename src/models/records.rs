//! Raw input tables.
//!
//! Both tables are loaded outside the analytics layer and handed in as
//! read-only slices. Serde aliases accept the column names used by the
//! published earnings datasets.

use serde::{Deserialize, Serialize};

/// One row of the per-game earnings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Game title, the join key into the country table
    #[serde(alias = "Game")]
    pub name: String,

    /// Genre label (e.g. "Multiplayer Online Battle Arena")
    #[serde(alias = "Genre")]
    pub genre: String,

    /// Lifetime prize money across all countries
    #[serde(alias = "TotalEarnings", default)]
    pub total_earnings: f64,
}

impl GameRecord {
    pub fn new(name: impl Into<String>, genre: impl Into<String>, total_earnings: f64) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
            total_earnings,
        }
    }

    /// True if the game has ever paid out prize money.
    pub fn has_earnings(&self) -> bool {
        self.total_earnings > 0.0
    }
}

/// One row of the per-country, per-game table.
///
/// `country_total_earnings` and `country_player_count` describe the whole
/// country across every genre; they are repeated on each of the country's rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryGameRecord {
    pub country: String,

    pub game: String,

    /// All-genre prize money earned by players from this country
    #[serde(alias = "total_earnings", alias = "totalEarningsCountry", default)]
    pub country_total_earnings: f64,

    /// Player count attributed to this country
    #[serde(alias = "player_count", alias = "playerCount", default)]
    pub country_player_count: f64,

    /// Prize money this game paid to players from this country
    #[serde(alias = "gameEarnings", default)]
    pub game_earnings: f64,
}

impl CountryGameRecord {
    pub fn new(
        country: impl Into<String>,
        game: impl Into<String>,
        country_total_earnings: f64,
        country_player_count: f64,
        game_earnings: f64,
    ) -> Self {
        Self {
            country: country.into(),
            game: game.into(),
            country_total_earnings,
            country_player_count,
            game_earnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_record_has_earnings() {
        assert!(GameRecord::new("Dota 2", "MOBA", 300_000_000.0).has_earnings());
        assert!(!GameRecord::new("Unplayed", "MOBA", 0.0).has_earnings());
    }

    #[test]
    fn test_game_record_accepts_dataset_columns() {
        let json = r#"{"Game":"Counter-Strike 2","Genre":"First-Person Shooter","TotalEarnings":1250000.5}"#;
        let game: GameRecord = serde_json::from_str(json).unwrap();

        assert_eq!(game.name, "Counter-Strike 2");
        assert_eq!(game.genre, "First-Person Shooter");
        assert_eq!(game.total_earnings, 1_250_000.5);
    }

    #[test]
    fn test_country_row_accepts_dataset_columns() {
        let json = r#"{"country":"Brazil","game":"Free Fire","total_earnings":9000000,"player_count":1200,"game_earnings":450000}"#;
        let row: CountryGameRecord = serde_json::from_str(json).unwrap();

        assert_eq!(row.country, "Brazil");
        assert_eq!(row.game, "Free Fire");
        assert_eq!(row.country_total_earnings, 9_000_000.0);
        assert_eq!(row.country_player_count, 1200.0);
        assert_eq!(row.game_earnings, 450_000.0);
    }

    #[test]
    fn test_country_row_serializes_field_names() {
        let row = CountryGameRecord::new("Korea", "StarCraft II", 10.0, 2.0, 5.0);
        let json = serde_json::to_string(&row).unwrap();

        assert!(json.contains("\"country_total_earnings\":10.0"));
        let back: CountryGameRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
