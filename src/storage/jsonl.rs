//! JSONL (JSON Lines) table reader.
//!
//! Each line is one JSON object representing one table row.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::{StorageConfig, StorageError};
use crate::models::{CountryGameRecord, GameRecord};

/// Input tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Games,
    CountryGames,
}

impl TableKind {
    /// Get the filename for this table.
    pub fn filename(&self) -> &'static str {
        match self {
            TableKind::Games => "games.jsonl",
            TableKind::CountryGames => "country_games.jsonl",
        }
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a reader for one of the input tables.
    pub fn for_table(config: &StorageConfig, table: TableKind) -> Self {
        Self::new(config.table_path(table))
    }

    /// Read all rows from the file.
    ///
    /// A missing file reads as empty. Lines that fail to parse are logged and
    /// skipped.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut rows = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(row) => rows.push(row),
                Err(e) => {
                    warn!("Failed to parse line {} in {:?}: {}", idx + 1, self.path, e);
                }
            }
        }

        debug!("Read {} rows from {:?}", rows.len(), self.path);
        Ok(rows)
    }
}

/// Both input tables, loaded together.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub games: Vec<GameRecord>,
    pub country_rows: Vec<CountryGameRecord>,
}

/// Load the games and country tables from the data directory.
pub fn load_tables(config: &StorageConfig) -> Result<Tables, StorageError> {
    let games = JsonlReader::<GameRecord>::for_table(config, TableKind::Games).read_all()?;
    let country_rows =
        JsonlReader::<CountryGameRecord>::for_table(config, TableKind::CountryGames).read_all()?;

    info!(
        "Loaded {} games and {} country rows from {:?}",
        games.len(),
        country_rows.len(),
        config.data_dir
    );

    Ok(Tables {
        games,
        country_rows,
    })
}
