//! # Genre Analytics
//!
//! Derived datasets for an esports earnings dashboard, computed from a games
//! table and a per-country, per-game table for one selected genre.
//!
//! ## Architecture
//!
//! - **models**: Input rows and derived records (aggregates, shares, wedges, trend, density)
//! - **calculate**: Pure analytics passes over borrowed tables
//! - **format**: Money, percentage and label formatting
//! - **config**: Configuration loading and validation
//! - **storage**: JSON Lines table loading for the command-line tool

pub mod calculate;
pub mod config;
pub mod format;
pub mod models;
pub mod storage;

pub use models::*;
