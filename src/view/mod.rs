//! Violation list and visualization core.
//!
//! # Submodules
//! - `record` - violation records and board-object references
//! - `entry` - list entries with memoized previews
//! - `list` - the insertion-ordered list model
//! - `pixmap` - preview rasters, constants, and wire encoding
//! - `cell` - row text formatting, size negotiation, and painting

pub mod cell;
pub mod entry;
pub mod list;
pub mod pixmap;
pub mod record;

pub use cell::{CellArea, CellSize, CellSurface, ViolationCellRenderer};
pub use entry::ViolationEntry;
pub use list::{ListError, Row, ViolationListModel};
pub use pixmap::{
    Pixmap, RegionRenderer, PREVIEW_BOARD_EXTENT, PREVIEW_INSET_SIZE, PREVIEW_PIXEL_BORDER,
    PREVIEW_PIXEL_SIZE, PREVIEW_SCALE,
};
pub use record::{ObjectKind, ObjectRef, ViolationRecord};
