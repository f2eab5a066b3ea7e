//! Analytics engine.
//!
//! Pure functions from the two input tables and a selected genre to the
//! derived datasets the charts consume:
//! - Genre-scoped country aggregates
//! - Top-game share per country and its radial wedge layout
//! - Log-log earnings vs players trend line
//! - Histogram and kernel density of log10 game earnings

pub mod density;
pub mod genre;
pub mod report;
pub mod share;
pub mod trend;

pub use density::{epanechnikov, estimate_density, DensityParams};
pub use genre::{
    aggregate_by_country, aggregate_indexed, games_in_genre, leaderboard, list_genres, GenreIndex,
};
pub use report::build_report;
pub use share::{allocate_wedges, top_shares, top_shares_indexed, WedgeLayout, SHARE_TICKS};
pub use trend::{fit_log_log_trend, fit_log_log_trend_with, TrendParams};
