//! Collaborator seams toward the rest of the layout session.
//!
//! The review core never owns board state. Highlighting, undo bookkeeping,
//! viewport control and rule checking stay behind these traits; flag calls
//! are atomic single-threaded operations with no partial-failure window.

use crate::units::Coord;
use crate::view::record::{ObjectRef, ViolationRecord};

pub use crate::view::pixmap::RegionRenderer;

/// Found-flag bookkeeping on the board-object layer.
pub trait BoardObjects {
    /// Clear the found-flag on every object. Reports whether any flag was
    /// actually set beforehand, so callers can skip redraws on a no-op.
    fn clear_found_flags(&mut self) -> bool;

    /// Set the found-flag on the given objects.
    fn set_found_flags(&mut self, objects: &[ObjectRef]);
}

/// Viewport and undo services of the main board window.
pub trait BoardView {
    fn bump_undo_serial(&mut self);

    fn request_redraw(&mut self);

    /// Move the viewport target to (x, y). A hard recenter forces an
    /// immediate jump; a soft one only adjusts the target.
    fn request_recenter(&mut self, x: Coord, y: Coord, hard: bool);

    /// Raise the main board window.
    fn present_main_window(&mut self);
}

/// The external rule-checking engine, invoked by the refresh action.
pub trait RuleEngine {
    /// Run a full check, handing each finding to `sink` in order.
    fn run_rule_check(&mut self, sink: &mut dyn FnMut(ViolationRecord));
}
