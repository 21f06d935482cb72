//! Violation record data carriers.

use crate::units::Coord;
use serde::{Deserialize, Serialize};

/// Type tag for a board object participating in a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Line,
    Arc,
    Pad,
    Via,
    Polygon,
    Text,
}

/// Reference to one board object: identifier plus type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectRef {
    pub id: u64,
    pub kind: ObjectKind,
}

impl ObjectRef {
    pub fn new(id: u64, kind: ObjectKind) -> Self {
        Self { id, kind }
    }
}

/// One finding from the rule-checking engine.
///
/// `measured_value` is meaningful only while `have_measured` is set; some
/// checks (e.g. missing drill) have a requirement but nothing to measure.
/// Missing text fields deserialize as empty strings rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolationRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    pub x: Coord,
    pub y: Coord,
    #[serde(default)]
    pub angle: f64,
    #[serde(default)]
    pub have_measured: bool,
    #[serde(default)]
    pub measured_value: Coord,
    pub required_value: Coord,
    #[serde(default)]
    pub objects: Vec<ObjectRef>,
}

impl ViolationRecord {
    /// Build a record, copying the caller's object list. The engine is free
    /// to reuse or drop its own list afterwards.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: &str,
        explanation: &str,
        x: Coord,
        y: Coord,
        angle: f64,
        measured_value: Option<Coord>,
        required_value: Coord,
        objects: &[ObjectRef],
    ) -> Self {
        Self {
            title: title.to_string(),
            explanation: explanation.to_string(),
            x,
            y,
            angle,
            have_measured: measured_value.is_some(),
            measured_value: measured_value.unwrap_or(0),
            required_value,
            objects: objects.to_vec(),
        }
    }
}
