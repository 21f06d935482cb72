//! Reference preview renderer over the in-memory board store.

use crate::board::objects::SharedBoardStore;
use crate::units::Coord;
use crate::view::pixmap::{Pixmap, RegionRenderer};
use rstar::AABB;

/// Background color of rendered previews.
const BACKGROUND: [u8; 4] = [0x12, 0x14, 0x18, 0xff];

/// Fill color for object footprints.
const COPPER: [u8; 4] = [0xb8, 0x73, 0x33, 0xff];

/// Rasterizes the board region around a point by filling the bounding
/// rectangles of nearby objects. Previews render at most once per entry,
/// so the spatial index is rebuilt per call from the current store.
pub struct BoardRaster {
    store: SharedBoardStore,
}

impl BoardRaster {
    pub fn new(store: SharedBoardStore) -> Self {
        Self { store }
    }
}

impl RegionRenderer for BoardRaster {
    fn render_region(
        &mut self,
        x: Coord,
        y: Coord,
        scale: Coord,
        width: u32,
        height: u32,
        depth: u8,
    ) -> Option<Pixmap> {
        // Only true-color targets are supported; anything else degrades to
        // a text-only row.
        if depth != 24 && depth != 32 {
            return None;
        }
        if scale <= 0 || width == 0 || height == 0 {
            return None;
        }

        let min_x = x - scale * width as Coord / 2;
        let min_y = y - scale * height as Coord / 2;
        let max_x = x + scale * width as Coord / 2;
        let max_y = y + scale * height as Coord / 2;

        let mut pixmap = Pixmap::new(width, height, depth);
        pixmap.fill(BACKGROUND);

        let store = self.store.borrow();
        let index = store.spatial_index();
        let viewport = AABB::from_corners([min_x, min_y], [max_x, max_y]);
        for footprint in index.locate_in_envelope_intersecting(&viewport) {
            let px0 = (footprint.bounds[0] - min_x) / scale;
            let py0 = (footprint.bounds[1] - min_y) / scale;
            let px1 = (footprint.bounds[2] - min_x) / scale + 1;
            let py1 = (footprint.bounds[3] - min_y) / scale + 1;
            pixmap.fill_rect(px0, py0, px1, py1, COPPER);
        }

        Some(pixmap)
    }
}
