//! Shared mock collaborators for the integration tests.

#![allow(dead_code)]

use drc_review::board::{BoardObject, BoardStore, RecordingView, SharedBoardStore};
use drc_review::session::board::{RegionRenderer, RuleEngine};
use drc_review::session::review::ReviewSession;
use drc_review::units::{mil, Coord, Unit};
use drc_review::view::pixmap::Pixmap;
use drc_review::view::record::{ObjectKind, ObjectRef, ViolationRecord};
use std::cell::RefCell;
use std::rc::Rc;

/// Build a record located at (50, 70) mil referencing the given object ids.
pub fn record(
    title: &str,
    explanation: &str,
    measured: Option<Coord>,
    required: Coord,
    objects: &[u64],
) -> ViolationRecord {
    let refs: Vec<ObjectRef> = objects
        .iter()
        .map(|&id| ObjectRef::new(id, ObjectKind::Line))
        .collect();
    ViolationRecord::new(title, explanation, mil(50), mil(70), 0.0, measured, required, &refs)
}

/// Board store seeded with unit-square objects at distinct positions.
pub fn seeded_store(ids: &[u64]) -> SharedBoardStore {
    let mut store = BoardStore::new();
    for (i, &id) in ids.iter().enumerate() {
        let offset = mil(20 * i as i64);
        store.insert(BoardObject::new(
            id,
            ObjectKind::Line,
            [offset, 0, offset + mil(1), mil(1)],
        ));
    }
    Rc::new(RefCell::new(store))
}

/// Region renderer that counts invocations. Each successful call paints a
/// different solid color, so cache hits are distinguishable from silent
/// re-renders.
#[derive(Clone, Default)]
pub struct CountingRenderer {
    calls: Rc<RefCell<u8>>,
    produce: bool,
}

impl CountingRenderer {
    pub fn producing() -> Self {
        Self {
            calls: Rc::default(),
            produce: true,
        }
    }

    pub fn declining() -> Self {
        Self {
            calls: Rc::default(),
            produce: false,
        }
    }

    pub fn call_count(&self) -> u8 {
        *self.calls.borrow()
    }
}

impl RegionRenderer for CountingRenderer {
    fn render_region(
        &mut self,
        _x: Coord,
        _y: Coord,
        _scale: Coord,
        width: u32,
        height: u32,
        depth: u8,
    ) -> Option<Pixmap> {
        let mut calls = self.calls.borrow_mut();
        *calls += 1;
        if !self.produce {
            return None;
        }
        let mut pixmap = Pixmap::new(width, height, depth);
        pixmap.fill([*calls, *calls, *calls, 0xff]);
        Some(pixmap)
    }
}

/// Rule engine that replays a canned list of findings.
#[derive(Default)]
pub struct StaticEngine {
    pub records: Vec<ViolationRecord>,
}

impl StaticEngine {
    pub fn new(records: Vec<ViolationRecord>) -> Self {
        Self { records }
    }
}

impl RuleEngine for StaticEngine {
    fn run_rule_check(&mut self, sink: &mut dyn FnMut(ViolationRecord)) {
        for record in &self.records {
            sink(record.clone());
        }
    }
}

/// Review session wired to the given store/view and mock renderer/engine.
pub fn review_session(
    store: SharedBoardStore,
    view: RecordingView,
    renderer: impl RegionRenderer + 'static,
    engine: impl RuleEngine + 'static,
) -> ReviewSession {
    ReviewSession::new(
        Unit::Mil,
        32,
        Box::new(renderer),
        Box::new(store),
        Box::new(view),
        Box::new(engine),
    )
}
