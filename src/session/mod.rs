//! Session layer: selection control, host-facing API, and the stdio
//! protocol used by the server binary.
//!
//! # Module Structure
//! - `board` - collaborator traits toward the rest of the layout session
//! - `controller` - the selection state machine
//! - `review` - session state owned by the hosting dialog
//! - `protocol` - JSON-RPC request/response types
//! - `handlers` - request handlers for the server binary

pub mod board;
pub mod controller;
pub mod handlers;
pub mod protocol;
pub mod review;

pub use board::{BoardObjects, BoardView, RegionRenderer, RuleEngine};
pub use controller::{SelectionController, SelectionState};
pub use handlers::ServerCtx;
pub use protocol::{error_codes, ErrorResponse, Request, Response};
pub use review::ReviewSession;
