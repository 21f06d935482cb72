//! Reference collaborators backing the session seams in-process.
//!
//! # Submodules
//! - `objects` - insertion-ordered object store with found-flags
//! - `raster` - preview renderer over the store
//! - `engine` - minimal clearance checker
//! - `view` - recording board-view collaborator

pub mod engine;
pub mod objects;
pub mod raster;
pub mod view;

pub use engine::ClearanceEngine;
pub use objects::{BoardObject, BoardStore, Footprint, SharedBoardStore};
pub use raster::BoardRaster;
pub use view::{RecordingView, ViewCounters};
