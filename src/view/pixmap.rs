//! Preview raster type and wire encoding.
//!
//! Violation previews are fixed-size RGBA8 rasters. The wire format used by
//! the stdio protocol is a little-endian header followed by the raw pixel
//! payload, base64-encoded for transport inside JSON.

use crate::units::{mil, Coord};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use byteorder::{LittleEndian, WriteBytesExt};

/// Outer edge of the preview square in pixels.
pub const PREVIEW_PIXEL_SIZE: u32 = 100;

/// Border inset between the cell edge and the rendered image.
pub const PREVIEW_PIXEL_BORDER: u32 = 5;

/// Rendered image edge after removing the border on both sides.
pub const PREVIEW_INSET_SIZE: u32 = PREVIEW_PIXEL_SIZE - 2 * PREVIEW_PIXEL_BORDER;

/// Physical board extent depicted by one preview.
pub const PREVIEW_BOARD_EXTENT: Coord = mil(100);

/// Board units per preview pixel.
pub const PREVIEW_SCALE: Coord = PREVIEW_BOARD_EXTENT / PREVIEW_INSET_SIZE as Coord;

/// Magic prefix of the preview wire format.
const WIRE_MAGIC: &[u8; 8] = b"DRCPIXM1";

/// A small RGBA8 raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    depth: u8,
    pixels: Vec<u8>,
}

impl Pixmap {
    /// Create a raster of the given size, cleared to transparent black.
    pub fn new(width: u32, height: u32, depth: u8) -> Self {
        Self {
            width,
            height,
            depth,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color depth the producing renderer targeted, in bits per pixel.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Raw RGBA pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Fill the whole raster with one color.
    pub fn fill(&mut self, rgba: [u8; 4]) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let base = ((y * self.width + x) * 4) as usize;
        Some([
            self.pixels[base],
            self.pixels[base + 1],
            self.pixels[base + 2],
            self.pixels[base + 3],
        ])
    }

    /// Fill an axis-aligned rectangle, clipped to the raster bounds.
    /// Coordinates are half-open: `x1`/`y1` are exclusive.
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, rgba: [u8; 4]) {
        let x0 = x0.clamp(0, self.width as i64) as u32;
        let y0 = y0.clamp(0, self.height as i64) as u32;
        let x1 = x1.clamp(0, self.width as i64) as u32;
        let y1 = y1.clamp(0, self.height as i64) as u32;

        for y in y0..y1 {
            let row = ((y * self.width + x0) * 4) as usize;
            let end = ((y * self.width + x1) * 4) as usize;
            for chunk in self.pixels[row..end].chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Wire encoding: magic, width/height/depth header (little-endian),
    /// then the raw pixel payload.
    pub fn to_wire_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(20 + self.pixels.len());
        buffer.extend_from_slice(WIRE_MAGIC);
        buffer.write_u32::<LittleEndian>(self.width).unwrap();
        buffer.write_u32::<LittleEndian>(self.height).unwrap();
        buffer.write_u32::<LittleEndian>(self.depth as u32).unwrap();
        buffer.extend_from_slice(&self.pixels);
        buffer
    }

    /// Wire encoding as base64 for embedding in a JSON response.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.to_wire_bytes())
    }
}

/// External board renderer used to produce preview rasters.
///
/// Returns `None` when no image can be produced at the requested depth; the
/// caller caches that outcome and does not retry.
pub trait RegionRenderer {
    fn render_region(
        &mut self,
        x: Coord,
        y: Coord,
        scale: Coord,
        width: u32,
        height: u32,
        depth: u8,
    ) -> Option<Pixmap>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_scale_constants() {
        assert_eq!(PREVIEW_INSET_SIZE, 90);
        assert_eq!(PREVIEW_SCALE, mil(100) / 90);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut pixmap = Pixmap::new(4, 4, 32);
        pixmap.fill_rect(-2, -2, 2, 2, [255, 0, 0, 255]);
        assert_eq!(pixmap.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(pixmap.pixel(1, 1), Some([255, 0, 0, 255]));
        assert_eq!(pixmap.pixel(2, 2), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_wire_bytes_header() {
        let pixmap = Pixmap::new(3, 2, 24);
        let bytes = pixmap.to_wire_bytes();
        assert_eq!(&bytes[..8], b"DRCPIXM1");
        assert_eq!(bytes[8..12], 3u32.to_le_bytes());
        assert_eq!(bytes[12..16], 2u32.to_le_bytes());
        assert_eq!(bytes[16..20], 24u32.to_le_bytes());
        assert_eq!(bytes.len(), 20 + 3 * 2 * 4);
    }
}
