//! In-memory board-object store with found-flag bookkeeping.

use crate::session::board::BoardObjects;
use crate::units::Coord;
use crate::view::record::{ObjectKind, ObjectRef};
use indexmap::IndexMap;
use rstar::{RTree, RTreeObject, AABB};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// One object on the board: identifier, type tag, and bounding box
/// `[min_x, min_y, max_x, max_y]` in board units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardObject {
    pub id: u64,
    pub kind: ObjectKind,
    pub bounds: [Coord; 4],
    #[serde(skip)]
    pub found: bool,
}

impl BoardObject {
    pub fn new(id: u64, kind: ObjectKind, bounds: [Coord; 4]) -> Self {
        Self {
            id,
            kind,
            bounds,
            found: false,
        }
    }

    pub fn object_ref(&self) -> ObjectRef {
        ObjectRef::new(self.id, self.kind)
    }
}

/// Spatial-index entry for one board object.
#[derive(Debug, Clone)]
pub struct Footprint {
    pub id: u64,
    pub kind: ObjectKind,
    pub bounds: [Coord; 4],
}

impl RTreeObject for Footprint {
    type Envelope = AABB<[Coord; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds[0], self.bounds[1]],
            [self.bounds[2], self.bounds[3]],
        )
    }
}

/// Insertion-ordered object store keyed by id.
#[derive(Debug, Default)]
pub struct BoardStore {
    objects: IndexMap<u64, BoardObject>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, object: BoardObject) {
        self.objects.insert(object.id, object);
    }

    /// Replace the whole board contents, dropping all flags.
    pub fn replace_all(&mut self, objects: Vec<BoardObject>) {
        self.objects = objects.into_iter().map(|o| (o.id, o)).collect();
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&BoardObject> {
        self.objects.get(&id)
    }

    pub fn objects(&self) -> impl Iterator<Item = &BoardObject> {
        self.objects.values()
    }

    /// Ids of all objects currently carrying the found-flag, in board order.
    pub fn flagged_ids(&self) -> Vec<u64> {
        self.objects
            .values()
            .filter(|o| o.found)
            .map(|o| o.id)
            .collect()
    }

    /// Bulk-load a spatial index over the current object bounds.
    pub fn spatial_index(&self) -> RTree<Footprint> {
        RTree::bulk_load(
            self.objects
                .values()
                .map(|o| Footprint {
                    id: o.id,
                    kind: o.kind,
                    bounds: o.bounds,
                })
                .collect(),
        )
    }
}

impl BoardObjects for BoardStore {
    fn clear_found_flags(&mut self) -> bool {
        let mut changed = false;
        for object in self.objects.values_mut() {
            changed |= object.found;
            object.found = false;
        }
        changed
    }

    fn set_found_flags(&mut self, objects: &[ObjectRef]) {
        for reference in objects {
            // References to objects no longer on the board are ignored.
            if let Some(object) = self.objects.get_mut(&reference.id) {
                object.found = true;
            }
        }
    }
}

/// Store handle shared between the session's collaborators and the host.
pub type SharedBoardStore = Rc<RefCell<BoardStore>>;

impl BoardObjects for SharedBoardStore {
    fn clear_found_flags(&mut self) -> bool {
        self.borrow_mut().clear_found_flags()
    }

    fn set_found_flags(&mut self, objects: &[ObjectRef]) {
        self.borrow_mut().set_found_flags(objects);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::mil;

    fn store_with(ids: &[u64]) -> BoardStore {
        let mut store = BoardStore::new();
        for &id in ids {
            store.insert(BoardObject::new(
                id,
                ObjectKind::Line,
                [0, 0, mil(1), mil(1)],
            ));
        }
        store
    }

    #[test]
    fn test_clear_reports_change() {
        let mut store = store_with(&[1, 2]);
        assert!(!store.clear_found_flags());
        store.set_found_flags(&[ObjectRef::new(1, ObjectKind::Line)]);
        assert_eq!(store.flagged_ids(), vec![1]);
        assert!(store.clear_found_flags());
        assert!(!store.clear_found_flags());
    }

    #[test]
    fn test_set_ignores_unknown_ids() {
        let mut store = store_with(&[1]);
        store.set_found_flags(&[ObjectRef::new(99, ObjectKind::Via)]);
        assert!(store.flagged_ids().is_empty());
    }
}
