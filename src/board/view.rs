//! Recording board-view collaborator for tests and the server binary.

use crate::session::board::BoardView;
use crate::units::Coord;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Counters of every view-side effect the controller has requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewCounters {
    pub undo_serial: u64,
    pub redraws: u64,
    pub soft_recenters: u64,
    pub hard_recenters: u64,
    pub presents: u64,
    pub last_center: Option<(Coord, Coord)>,
}

/// `BoardView` implementation that records calls instead of driving a real
/// window. Clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    counters: Rc<RefCell<ViewCounters>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counters(&self) -> ViewCounters {
        *self.counters.borrow()
    }
}

impl BoardView for RecordingView {
    fn bump_undo_serial(&mut self) {
        self.counters.borrow_mut().undo_serial += 1;
    }

    fn request_redraw(&mut self) {
        self.counters.borrow_mut().redraws += 1;
    }

    fn request_recenter(&mut self, x: Coord, y: Coord, hard: bool) {
        let mut counters = self.counters.borrow_mut();
        if hard {
            counters.hard_recenters += 1;
        } else {
            counters.soft_recenters += 1;
        }
        counters.last_center = Some((x, y));
    }

    fn present_main_window(&mut self) {
        self.counters.borrow_mut().presents += 1;
    }
}
