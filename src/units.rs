//! Integer board coordinates and display formatting.
//!
//! All positions and rule values are kept in nanometers (`Coord`), matching
//! the board editor's internal unit. Display formatting converts to the
//! session's grid unit; no global settings object is consulted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Board coordinate in nanometers.
pub type Coord = i64;

/// Nanometers per mil (1/1000 inch).
pub const NM_PER_MIL: Coord = 25_400;

/// Nanometers per millimeter.
pub const NM_PER_MM: Coord = 1_000_000;

/// Coordinate from a value in mils.
pub const fn mil(value: i64) -> Coord {
    value * NM_PER_MIL
}

/// Coordinate from a value in millimeters.
pub const fn mm(value: i64) -> Coord {
    value * NM_PER_MM
}

/// Grid unit used when formatting coordinate values for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Mil,
    Mm,
}

impl Unit {
    fn nm_per_unit(self) -> Coord {
        match self {
            Unit::Mil => NM_PER_MIL,
            Unit::Mm => NM_PER_MM,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Unit::Mil => "mil",
            Unit::Mm => "mm",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mil" => Ok(Unit::Mil),
            "mm" => Ok(Unit::Mm),
            other => Err(format!("unknown grid unit '{}' (expected mil or mm)", other)),
        }
    }
}

/// Format a coordinate value in the given grid unit, e.g. `10.00 mil`.
pub fn format_coord(value: Coord, unit: Unit) -> String {
    let scaled = value as f64 / unit.nm_per_unit() as f64;
    format!("{:.2} {}", scaled, unit.suffix())
}
