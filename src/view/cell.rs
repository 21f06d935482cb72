//! Row rendering: formatted text block plus preview overlay.
//!
//! The renderer composes two independent drawing steps instead of
//! subclassing a base cell: the text block is painted first through the
//! host surface, then the preview raster is blitted to the right of it.
//! Size negotiation reserves a full preview square of extra width so the
//! image never overlaps the text.

use crate::units::{format_coord, Unit};
use crate::view::entry::ViolationEntry;
use crate::view::pixmap::{RegionRenderer, PREVIEW_PIXEL_BORDER, PREVIEW_PIXEL_SIZE};
use crate::view::record::ViolationRecord;

/// Fixed glyph advance used by the deterministic text measurement.
const GLYPH_WIDTH: u32 = 7;

/// Fixed line height used by the deterministic text measurement.
const LINE_HEIGHT: u32 = 16;

/// Negotiated cell dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

/// Pixel region a row occupies inside the list view.
#[derive(Debug, Clone, Copy)]
pub struct CellArea {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Host drawing surface for one list cell.
pub trait CellSurface {
    /// Paint the formatted text block with its top-left corner at (x, y).
    fn draw_markup(&mut self, x: i32, y: i32, markup: &str);

    /// Copy a raster onto the surface with its top-left corner at (x, y).
    fn blit(&mut self, x: i32, y: i32, pixmap: &crate::view::pixmap::Pixmap);
}

/// Paints one violation entry into a list row.
#[derive(Debug, Clone, Copy)]
pub struct ViolationCellRenderer {
    unit: Unit,
    depth: u8,
}

impl ViolationCellRenderer {
    pub fn new(unit: Unit, depth: u8) -> Self {
        Self { unit, depth }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Formatted text block for a record: bold title (with the measured
    /// value when one exists), the explanation in italics, and the
    /// required value.
    pub fn markup(&self, record: &ViolationRecord) -> String {
        if record.have_measured {
            format!(
                "<b>{} ({})</b>\n<small><i>{}</i>\nRequired: {}</small>",
                record.title,
                format_coord(record.measured_value, self.unit),
                record.explanation,
                format_coord(record.required_value, self.unit),
            )
        } else {
            format!(
                "<b>{}</b>\n<small><i>{}</i>\nRequired: {}</small>",
                record.title,
                record.explanation,
                format_coord(record.required_value, self.unit),
            )
        }
    }

    /// The markup with tags stripped, split into display lines. Used for
    /// measurement and by hosts without a markup text system.
    pub fn text_block(&self, record: &ViolationRecord) -> Vec<String> {
        self.markup(record)
            .lines()
            .map(strip_tags)
            .collect()
    }

    /// Deterministic measurement of the bare text block.
    pub fn measure_text(&self, record: &ViolationRecord) -> CellSize {
        let lines = self.text_block(record);
        let width = lines
            .iter()
            .map(|line| line.chars().count() as u32 * GLYPH_WIDTH)
            .max()
            .unwrap_or(0);
        CellSize {
            width,
            height: lines.len() as u32 * LINE_HEIGHT,
        }
    }

    /// Size negotiation: the preview square is added to the base width and
    /// floors the height.
    pub fn preferred_size(&self, base: CellSize) -> CellSize {
        CellSize {
            width: base.width + PREVIEW_PIXEL_SIZE,
            height: base.height.max(PREVIEW_PIXEL_SIZE),
        }
    }

    /// Preferred size for a record using the built-in text measurement.
    pub fn natural_size(&self, record: &ViolationRecord) -> CellSize {
        self.preferred_size(self.measure_text(record))
    }

    /// Paint one row: text block first, then the preview (rendered on
    /// first paint) inset into the reserved square at the right edge.
    /// A missing preview leaves the square empty; that is not an error.
    pub fn paint(
        &self,
        entry: &ViolationEntry,
        renderer: &mut dyn RegionRenderer,
        surface: &mut dyn CellSurface,
        area: CellArea,
    ) {
        surface.draw_markup(area.x, area.y, &self.markup(entry.record()));

        let Some(pixmap) = entry.thumbnail(renderer, self.depth) else {
            return;
        };

        let x = area.x + area.width as i32 - PREVIEW_PIXEL_SIZE as i32
            + PREVIEW_PIXEL_BORDER as i32;
        let y = area.y + PREVIEW_PIXEL_BORDER as i32;
        surface.blit(x, y, pixmap);
    }
}

fn strip_tags(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_tag = false;
    for c in line.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
