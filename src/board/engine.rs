//! Minimal clearance checker used to drive the review list end to end.
//!
//! Pairwise bounding-box clearance with R-tree candidate filtering, each
//! pair checked once. This exists for the server binary and integration
//! tests; a production rule engine lives outside this crate and feeds the
//! same `RuleEngine` seam.

use crate::board::objects::SharedBoardStore;
use crate::session::board::RuleEngine;
use crate::units::Coord;
use crate::view::record::ViolationRecord;
use rstar::AABB;
use tracing::debug;

pub struct ClearanceEngine {
    store: SharedBoardStore,
    clearance: Coord,
}

impl ClearanceEngine {
    pub fn new(store: SharedBoardStore, clearance: Coord) -> Self {
        Self { store, clearance }
    }
}

impl RuleEngine for ClearanceEngine {
    fn run_rule_check(&mut self, sink: &mut dyn FnMut(ViolationRecord)) {
        let store = self.store.borrow();
        let index = store.spatial_index();
        let mut findings = 0usize;

        for a in store.objects() {
            let search = AABB::from_corners(
                [a.bounds[0] - self.clearance, a.bounds[1] - self.clearance],
                [a.bounds[2] + self.clearance, a.bounds[3] + self.clearance],
            );
            for b in index.locate_in_envelope_intersecting(&search) {
                // Each pair once.
                if a.id >= b.id {
                    continue;
                }
                let distance = aabb_distance(&a.bounds, &b.bounds);
                if distance >= self.clearance {
                    continue;
                }
                findings += 1;
                let x = (a.bounds[0].max(b.bounds[0]) + a.bounds[2].min(b.bounds[2])) / 2;
                let y = (a.bounds[1].max(b.bounds[1]) + a.bounds[3].min(b.bounds[3])) / 2;
                sink(ViolationRecord::new(
                    "Copper clearance",
                    &format!("Objects #{} and #{} are too close together", a.id, b.id),
                    x,
                    y,
                    0.0,
                    Some(distance),
                    self.clearance,
                    &[
                        a.object_ref(),
                        crate::view::record::ObjectRef::new(b.id, b.kind),
                    ],
                ));
            }
        }

        debug!(findings, clearance = self.clearance, "clearance check complete");
    }
}

/// Minimum distance between two axis-aligned boxes, zero when they touch
/// or overlap.
fn aabb_distance(a: &[Coord; 4], b: &[Coord; 4]) -> Coord {
    let dx = (a[0].max(b[0]) - a[2].min(b[2])).max(0);
    let dy = (a[1].max(b[1]) - a[3].min(b[3])).max(0);
    ((dx as f64).hypot(dy as f64)) as Coord
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::objects::{BoardObject, BoardStore};
    use crate::units::mil;
    use crate::view::record::ObjectKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_aabb_distance() {
        let a = [0, 0, 10, 10];
        let b = [20, 0, 30, 10];
        assert_eq!(aabb_distance(&a, &b), 10);
        let c = [5, 5, 15, 15];
        assert_eq!(aabb_distance(&a, &c), 0);
    }

    #[test]
    fn test_emits_one_finding_per_close_pair() {
        let mut store = BoardStore::new();
        store.insert(BoardObject::new(1, ObjectKind::Line, [0, 0, mil(1), mil(1)]));
        store.insert(BoardObject::new(
            2,
            ObjectKind::Line,
            [mil(1) + mil(2), 0, mil(4), mil(1)],
        ));
        // Far away from both.
        store.insert(BoardObject::new(
            3,
            ObjectKind::Pad,
            [mil(100), mil(100), mil(101), mil(101)],
        ));

        let mut engine = ClearanceEngine::new(Rc::new(RefCell::new(store)), mil(10));
        let mut records = Vec::new();
        engine.run_rule_check(&mut |r| records.push(r));

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert!(record.have_measured);
        assert_eq!(record.measured_value, mil(2));
        assert_eq!(record.required_value, mil(10));
        assert_eq!(record.objects.len(), 2);
    }
}
