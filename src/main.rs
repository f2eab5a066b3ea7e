use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use genre_analytics::calculate::{
    aggregate_by_country, allocate_wedges, build_report, estimate_density,
    fit_log_log_trend_with, games_in_genre, leaderboard, list_genres, top_shares,
};
use genre_analytics::config::AppConfig;
use genre_analytics::format::format_money_short;
use genre_analytics::storage::{load_tables, StorageConfig, Tables};

#[derive(Parser)]
#[command(name = "genre-analytics")]
#[command(about = "Genre-scoped esports earnings analytics")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the genres present in the games table
    Genres,

    /// List a genre's games with prize money
    Games {
        /// Genre to select (default: first genre alphabetically)
        #[arg(long)]
        genre: Option<String>,

        /// Highest earners first instead of runner order
        #[arg(long)]
        leaderboard: bool,
    },

    /// Per-country totals for a genre
    Aggregate {
        #[arg(long)]
        genre: Option<String>,
    },

    /// Top game share per country for a genre
    Shares {
        #[arg(long)]
        genre: Option<String>,
    },

    /// Radial wedge layout of the top shares
    Wedges {
        #[arg(long)]
        genre: Option<String>,

        /// Override the number of countries shown
        #[arg(long)]
        max_countries: Option<usize>,
    },

    /// Log-log earnings vs players trend line
    Trend {
        #[arg(long)]
        genre: Option<String>,
    },

    /// Histogram and density of game earnings
    Density {
        /// Restrict to a genre (default: every game)
        #[arg(long)]
        genre: Option<String>,
    },

    /// Every derived dataset for a genre
    Report {
        #[arg(long)]
        genre: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    let log_level = cli.log_level.as_deref().unwrap_or(config.log_level.as_str());
    init_tracing(log_level, cli.json_logs);

    tracing::info!("Starting genre-analytics v{}", env!("CARGO_PKG_VERSION"));

    let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.data_dir.clone());
    let tables = load_tables(&StorageConfig::new(data_dir))?;
    let analytics = &config.analytics;

    match cli.command {
        Commands::Genres => print_json(&list_genres(&tables.games)),
        Commands::Games { genre, leaderboard: descending } => {
            let genre = resolve_genre(&tables, genre)?;
            if descending {
                print_json(&leaderboard(&tables.games, &genre))
            } else {
                print_json(&games_in_genre(&tables.games, &genre))
            }
        }
        Commands::Aggregate { genre } => {
            let genre = resolve_genre(&tables, genre)?;
            print_json(&aggregate_by_country(&tables.games, &tables.country_rows, &genre))
        }
        Commands::Shares { genre } => {
            let genre = resolve_genre(&tables, genre)?;
            print_json(&top_shares(&tables.country_rows, &tables.games, &genre))
        }
        Commands::Wedges { genre, max_countries } => {
            let genre = resolve_genre(&tables, genre)?;
            let mut layout = analytics.layout.clone();
            if let Some(max) = max_countries {
                if max == 0 {
                    bail!("--max-countries must be greater than 0");
                }
                layout.max_countries = max;
            }
            let shares = top_shares(&tables.country_rows, &tables.games, &genre);
            print_json(&allocate_wedges(&shares, &layout))
        }
        Commands::Trend { genre } => {
            let genre = resolve_genre(&tables, genre)?;
            let aggregates = aggregate_by_country(&tables.games, &tables.country_rows, &genre);
            let trend = fit_log_log_trend_with(&aggregates, &analytics.trend);
            if trend.is_none() {
                tracing::warn!("Not enough data to fit a trend for {:?}", genre);
            }
            print_json(&trend)
        }
        Commands::Density { genre } => {
            let games = match genre {
                Some(genre) => games_in_genre(&tables.games, &genre),
                None => tables.games.clone(),
            };
            print_json(&estimate_density(&games, &analytics.density))
        }
        Commands::Report { genre } => {
            let genre = resolve_genre(&tables, genre)?;
            let report = build_report(&tables.games, &tables.country_rows, &genre, analytics);
            if report.is_empty() {
                tracing::warn!("No country rows matched genre {:?}", genre);
            } else {
                tracing::info!(
                    "Genre {:?} earned {} across {} countries",
                    genre,
                    format_money_short(report.total_genre_earnings()),
                    report.aggregates.len()
                );
            }
            print_json(&report)
        }
    }
}

fn init_tracing(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Use the requested genre, or the first genre alphabetically.
fn resolve_genre(tables: &Tables, requested: Option<String>) -> Result<String> {
    if let Some(genre) = requested {
        return Ok(genre);
    }
    match list_genres(&tables.games).into_iter().next() {
        Some(genre) => {
            tracing::info!("No genre given, defaulting to {:?}", genre);
            Ok(genre)
        }
        None => bail!("No games loaded; cannot pick a default genre"),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
