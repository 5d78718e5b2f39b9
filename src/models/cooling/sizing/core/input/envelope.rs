use std::fmt;

use serde::{Deserialize, Serialize};

/// Compass orientation of a window or wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "NE")]
    NorthEast,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "SE")]
    SouthEast,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "SW")]
    SouthWest,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "NW")]
    NorthWest,
}

impl Direction {
    /// All eight orientations, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Peak solar heat gain through unshaded glass facing this way, BTU/hr·ft².
    ///
    /// Reference figures for tropical latitudes in the hottest month.
    /// The glass load itself is conduction-only; this factor is reported
    /// alongside it to show how exposed the glazing is.
    #[must_use]
    pub fn peak_solar_gain(self) -> f64 {
        match self {
            Self::North | Self::South => 38.0,
            Self::NorthEast | Self::NorthWest => 160.0,
            Self::East | Self::West => 216.0,
            Self::SouthEast | Self::SouthWest => 116.0,
        }
    }

    /// Short compass label such as `"NE"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A window or wall: an area in ft² facing one direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeElement {
    pub area: f64,
    pub direction: Direction,
}

impl EnvelopeElement {
    #[must_use]
    pub fn new(area: f64, direction: Direction) -> Self {
        Self { area, direction }
    }
}

/// Which envelope list an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Window,
    Wall,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window => f.write_str("window"),
            Self::Wall => f.write_str("wall"),
        }
    }
}

/// Roof construction, which selects the roof U-factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoofCondition {
    /// Bare roof in direct sun.
    #[default]
    Exposed,
    Shaded,
    WaterCovered,
    Insulated,
}

impl fmt::Display for RoofCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exposed => "exposed",
            Self::Shaded => "shaded",
            Self::WaterCovered => "water-covered",
            Self::Insulated => "insulated",
        })
    }
}
