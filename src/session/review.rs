//! Session state owned by the hosting dialog controller.

use crate::session::board::{BoardObjects, BoardView, RegionRenderer, RuleEngine};
use crate::session::controller::{SelectionController, SelectionState};
use crate::units::Unit;
use crate::view::cell::ViolationCellRenderer;
use crate::view::list::{ListError, ViolationListModel};
use crate::view::pixmap::Pixmap;
use crate::view::record::ViolationRecord;
use tracing::info;

/// One DRC review session: the violation list, its selection state, and
/// the collaborators the core calls into. The hosting dialog owns this
/// struct explicitly; there are no file-scope singletons.
pub struct ReviewSession {
    model: ViolationListModel,
    controller: SelectionController,
    cell: ViolationCellRenderer,
    renderer: Box<dyn RegionRenderer>,
    objects: Box<dyn BoardObjects>,
    view: Box<dyn BoardView>,
    engine: Box<dyn RuleEngine>,
}

impl ReviewSession {
    pub fn new(
        unit: Unit,
        depth: u8,
        renderer: Box<dyn RegionRenderer>,
        objects: Box<dyn BoardObjects>,
        view: Box<dyn BoardView>,
        engine: Box<dyn RuleEngine>,
    ) -> Self {
        Self {
            model: ViolationListModel::new(),
            controller: SelectionController::new(),
            cell: ViolationCellRenderer::new(unit, depth),
            renderer,
            objects,
            view,
            engine,
        }
    }

    /// Clear the list and restart display numbering. Called before a fresh
    /// check run.
    pub fn reset(&mut self) {
        self.model.reset();
    }

    /// Sole ingestion entry point, called once per finding.
    pub fn append_violation(&mut self, record: &ViolationRecord) -> usize {
        self.model.append(record)
    }

    /// Insert a header row for hosts that cluster related violations.
    pub fn append_group(&mut self, title: &str) -> usize {
        self.model.append_group(title)
    }

    /// Reset, then re-run the rule check, streaming findings back into the
    /// list. Mirrors the dialog's refresh button.
    pub fn refresh(&mut self) {
        self.model.reset();
        let model = &mut self.model;
        self.engine.run_rule_check(&mut |record| {
            model.append(&record);
        });
        info!(violations = self.model.len(), "rule check refreshed");
    }

    pub fn row_count(&self) -> usize {
        self.model.len()
    }

    pub fn row_number(&self, row: usize) -> Result<Option<u32>, ListError> {
        self.model.number_of(row)
    }

    /// Formatted text block for a row, `Ok(None)` on a header row.
    pub fn row_markup(&self, row: usize) -> Result<Option<String>, ListError> {
        Ok(self
            .model
            .get(row)?
            .map(|entry| self.cell.markup(entry.record())))
    }

    /// Plain text lines for a row, `Ok(None)` on a header row.
    pub fn row_text(&self, row: usize) -> Result<Option<Vec<String>>, ListError> {
        Ok(self
            .model
            .get(row)?
            .map(|entry| self.cell.text_block(entry.record())))
    }

    /// Preview for a row, rendering it on first access. `Ok(None)` on a
    /// header row or when the renderer cannot produce an image.
    pub fn row_thumbnail(&mut self, row: usize) -> Result<Option<&Pixmap>, ListError> {
        match self.model.get(row)? {
            Some(entry) => Ok(entry.thumbnail(self.renderer.as_mut(), self.cell.depth())),
            None => Ok(None),
        }
    }

    /// Selection-changed event sink for the list view.
    pub fn selection_changed(&mut self, row: Option<usize>) {
        self.controller.selection_changed(
            &self.model,
            row,
            self.objects.as_mut(),
            self.view.as_mut(),
        );
    }

    /// Row-activated event sink for the list view.
    pub fn row_activated(&mut self, row: usize) {
        self.controller
            .row_activated(&self.model, row, self.objects.as_mut(), self.view.as_mut());
    }

    pub fn selection(&self) -> SelectionState {
        self.controller.state()
    }

    pub fn model(&self) -> &ViolationListModel {
        &self.model
    }

    pub fn cell(&self) -> &ViolationCellRenderer {
        &self.cell
    }
}
