//! DRC violation review core for an interactive PCB layout session.
//!
//! Collects violation reports from a rule-checking engine, keeps them in a
//! numbered list, renders a small preview raster per violation on first
//! display, and maps list selection to board highlight and recenter
//! actions. The board itself (renderer, object flags, undo, window chrome)
//! stays behind the collaborator traits in [`session::board`].
//!
//! # Module Structure
//! - `units` - integer board coordinates and display formatting
//! - `view` - violation records, list model, previews, cell rendering
//! - `session` - selection controller, review session, stdio protocol
//! - `board` - reference collaborators (object store, raster, demo engine)

pub mod board;
pub mod session;
pub mod units;
pub mod view;

pub use session::{ReviewSession, SelectionController, SelectionState};
pub use units::{format_coord, Coord, Unit};
pub use view::{
    ListError, ObjectKind, ObjectRef, Pixmap, RegionRenderer, Row, ViolationCellRenderer,
    ViolationEntry, ViolationListModel, ViolationRecord,
};
