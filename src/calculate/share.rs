//! Top-game share per country and the radial wedge layout.

use std::collections::HashMap;
use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::genre::GenreIndex;
use crate::models::{clamp_share, CountryGameRecord, CountryTopShare, GameRecord, Point, RadialWedge};

/// Reference rings drawn behind the wedges.
pub const SHARE_TICKS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

/// Geometry of the radial share chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WedgeLayout {
    /// Countries kept after ranking by total earnings
    #[serde(default = "default_max_countries")]
    pub max_countries: usize,

    /// Radius of a zero share
    #[serde(default = "default_inner_radius")]
    pub inner_radius: f64,

    /// Radius of a full share
    #[serde(default = "default_outer_radius")]
    pub outer_radius: f64,

    /// Fraction of each slot the wedge occupies
    #[serde(default = "default_shrink")]
    pub shrink: f64,

    /// Distance of country labels beyond `outer_radius`
    #[serde(default = "default_label_offset")]
    pub label_offset: f64,
}

fn default_max_countries() -> usize {
    28
}

fn default_inner_radius() -> f64 {
    110.0
}

fn default_outer_radius() -> f64 {
    220.0
}

fn default_shrink() -> f64 {
    0.7
}

fn default_label_offset() -> f64 {
    26.0
}

impl Default for WedgeLayout {
    fn default() -> Self {
        Self {
            max_countries: default_max_countries(),
            inner_radius: default_inner_radius(),
            outer_radius: default_outer_radius(),
            shrink: default_shrink(),
            label_offset: default_label_offset(),
        }
    }
}

impl WedgeLayout {
    /// Linear share-to-radius mapping: 0 at `inner_radius`, 1 at `outer_radius`.
    pub fn radius_for(&self, share: f64) -> f64 {
        self.inner_radius + clamp_share(share) * (self.outer_radius - self.inner_radius)
    }

    /// Radii of the reference rings, paired with their share.
    pub fn share_rings(&self) -> Vec<(f64, f64)> {
        SHARE_TICKS
            .iter()
            .map(|&t| (t, self.radius_for(t)))
            .collect()
    }
}

/// The game with the largest share of each country's all-genre earnings.
///
/// Only rows whose game belongs to `genre` compete, and rows with a
/// non-positive country total or game earnings are skipped. On equal shares
/// the first row seen wins. Output is descending by the country total.
pub fn top_shares(
    country_rows: &[CountryGameRecord],
    games: &[GameRecord],
    genre: &str,
) -> Vec<CountryTopShare> {
    if games.is_empty() {
        return Vec::new();
    }
    let index = GenreIndex::new(games);
    top_shares_indexed(&index, country_rows, genre)
}

/// [`top_shares`] against a prebuilt index.
pub fn top_shares_indexed(
    index: &GenreIndex<'_>,
    country_rows: &[CountryGameRecord],
    genre: &str,
) -> Vec<CountryTopShare> {
    if genre.is_empty() || index.is_empty() || country_rows.is_empty() {
        return Vec::new();
    }

    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut best: Vec<CountryTopShare> = Vec::new();

    for row in country_rows {
        if row.country.is_empty() || row.game.is_empty() {
            continue;
        }
        if !index.is_in_genre(&row.game, genre) {
            continue;
        }
        if !(row.country_total_earnings > 0.0 && row.game_earnings > 0.0) {
            continue;
        }

        let share = row.game_earnings / row.country_total_earnings;
        let candidate = CountryTopShare {
            country: row.country.clone(),
            country_total_earnings: row.country_total_earnings,
            top_game: row.game.clone(),
            top_game_earnings: row.game_earnings,
            share,
        };

        match positions.get(row.country.as_str()).copied() {
            Some(pos) => {
                if share > best[pos].share {
                    best[pos] = candidate;
                }
            }
            None => {
                positions.insert(row.country.as_str(), best.len());
                best.push(candidate);
            }
        }
    }

    for entry in &mut best {
        entry.share = clamp_share(entry.share);
    }
    best.sort_by(|a, b| b.country_total_earnings.total_cmp(&a.country_total_earnings));

    debug!("Found top games for {} countries in genre {:?}", best.len(), genre);
    best
}

/// Lay out one wedge per country around the circle.
///
/// The `max_countries` largest countries by total earnings are kept, then
/// ordered by share (ties by total earnings) so the biggest wedge takes the
/// first slot clockwise from 12 o'clock.
pub fn allocate_wedges(shares: &[CountryTopShare], layout: &WedgeLayout) -> Vec<RadialWedge> {
    let mut entries: Vec<&CountryTopShare> = shares.iter().collect();
    entries.sort_by(|a, b| b.country_total_earnings.total_cmp(&a.country_total_earnings));
    entries.truncate(layout.max_countries);

    entries.sort_by(|a, b| {
        clamp_share(b.share)
            .total_cmp(&clamp_share(a.share))
            .then(b.country_total_earnings.total_cmp(&a.country_total_earnings))
    });

    let n = entries.len();
    if n == 0 {
        return Vec::new();
    }

    let step = TAU / n as f64;
    let half_band = step * layout.shrink.clamp(0.0, 1.0) / 2.0;
    let label_radius = layout.outer_radius + layout.label_offset;

    entries
        .into_iter()
        .enumerate()
        .map(|(i, e)| {
            let share = clamp_share(e.share);
            let slot_start_angle = i as f64 * step;
            let slot_end_angle = (i + 1) as f64 * step;
            let center = (slot_start_angle + slot_end_angle) / 2.0;

            // Wedge angles start at 12 o'clock; labels use cos/sin from 3 o'clock.
            let label_angle = center - FRAC_PI_2;
            let label_anchor = Point {
                x: label_angle.cos() * label_radius,
                y: label_angle.sin() * label_radius,
            };

            RadialWedge {
                country: e.country.clone(),
                game: e.top_game.clone(),
                country_total_earnings: e.country_total_earnings,
                game_earnings: e.top_game_earnings,
                share,
                slot_start_angle,
                slot_end_angle,
                start_angle: center - half_band,
                end_angle: center + half_band,
                inner_radius: layout.inner_radius,
                outer_radius: layout.radius_for(share),
                label_anchor,
                label_rotation: upright_rotation(label_angle.to_degrees()),
            }
        })
        .collect()
}

/// Flip text that would otherwise render upside down.
fn upright_rotation(degrees: f64) -> f64 {
    if (-90.0..=90.0).contains(&degrees) {
        degrees
    } else {
        degrees + 180.0
    }
}
