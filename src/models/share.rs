//! Top-game shares and their radial layout.

use serde::{Deserialize, Serialize};

/// The single game with the largest share of a country's all-genre earnings,
/// restricted to games of the selected genre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryTopShare {
    pub country: String,

    /// Country's earnings across every genre, taken from the source rows
    pub country_total_earnings: f64,

    pub top_game: String,

    /// What `top_game` paid to players from this country
    pub top_game_earnings: f64,

    /// `top_game_earnings / country_total_earnings`, clamped to [0, 1]
    pub share: f64,
}

/// Clamp a share into [0, 1].
pub fn clamp_share(share: f64) -> f64 {
    share.clamp(0.0, 1.0)
}

/// A point in chart coordinates, centred on the radial chart origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One country's wedge in the radial share chart.
///
/// Angles are radians measured clockwise from 12 o'clock. The slot is the
/// full `[i/n, (i+1)/n) * 2π` partition; `start_angle..end_angle` is the slot
/// shrunk around its centre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialWedge {
    pub country: String,
    pub game: String,
    pub country_total_earnings: f64,
    pub game_earnings: f64,
    pub share: f64,

    pub slot_start_angle: f64,
    pub slot_end_angle: f64,
    pub start_angle: f64,
    pub end_angle: f64,

    pub inner_radius: f64,
    pub outer_radius: f64,

    /// Where the country label is anchored
    pub label_anchor: Point,

    /// Label rotation in degrees, flipped to keep text upright
    pub label_rotation: f64,
}

impl RadialWedge {
    /// Angle at the centre of the wedge's slot.
    pub fn center_angle(&self) -> f64 {
        (self.slot_start_angle + self.slot_end_angle) / 2.0
    }

    /// Angular width of the drawn wedge.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}
