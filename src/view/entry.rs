//! List entries: one violation plus its memoized preview.

use crate::view::pixmap::{Pixmap, RegionRenderer, PREVIEW_INSET_SIZE, PREVIEW_SCALE};
use crate::view::record::ViolationRecord;
use std::cell::OnceCell;
use tracing::debug;

/// The addressable unit held by the list: exclusive owner of one
/// `ViolationRecord` and of the preview rendered for it.
///
/// The preview slot memoizes the renderer outcome, including "no image":
/// a renderer that declines once is never asked again for this entry.
/// There is no invalidation path; the cache lives as long as the entry.
#[derive(Debug)]
pub struct ViolationEntry {
    record: ViolationRecord,
    pixmap: OnceCell<Option<Pixmap>>,
}

impl ViolationEntry {
    /// Wrap a record, copying it (and its object list) out of the caller's
    /// buffer.
    pub fn new(record: &ViolationRecord) -> Self {
        Self {
            record: record.clone(),
            pixmap: OnceCell::new(),
        }
    }

    pub fn record(&self) -> &ViolationRecord {
        &self.record
    }

    /// The preview for this entry, rendering it on first access.
    ///
    /// The region is centered on the violation location at the fixed
    /// preview scale. A renderer that cannot produce an image (degenerate
    /// depth) yields `None`, and that outcome is cached.
    pub fn thumbnail(&self, renderer: &mut dyn RegionRenderer, depth: u8) -> Option<&Pixmap> {
        self.pixmap
            .get_or_init(|| {
                let rendered = renderer.render_region(
                    self.record.x,
                    self.record.y,
                    PREVIEW_SCALE,
                    PREVIEW_INSET_SIZE,
                    PREVIEW_INSET_SIZE,
                    depth,
                );
                if rendered.is_none() {
                    debug!(
                        title = %self.record.title,
                        depth, "preview renderer produced no image; caching the miss"
                    );
                }
                rendered
            })
            .as_ref()
    }

    /// The cached preview, if one has been rendered, without invoking the
    /// renderer.
    pub fn cached_thumbnail(&self) -> Option<&Pixmap> {
        self.pixmap.get().and_then(|p| p.as_ref())
    }
}
