//! Maps list selection events to board highlight and recenter actions.

use crate::session::board::{BoardObjects, BoardView};
use crate::view::entry::ViolationEntry;
use crate::view::list::ViolationListModel;
use tracing::debug;

/// Current selection of the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    NoSelection,
    /// A leaf row is selected, by row index.
    Selected(usize),
}

/// Reactive mapper from selection-changed / row-activated events to
/// collaborator calls. Holds no state beyond the current selection; entry
/// references are only borrowed for the duration of one event.
#[derive(Debug, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Selection changed. `None`, a header row, and an out-of-range row all
    /// count as nothing selected: flags are cleared, and the redraw/undo
    /// bump happens only if a flag was actually set (the transition is
    /// idempotent). Selecting a leaf highlights its objects and softly
    /// recenters the view on the violation.
    pub fn selection_changed(
        &mut self,
        model: &ViolationListModel,
        row: Option<usize>,
        objects: &mut dyn BoardObjects,
        view: &mut dyn BoardView,
    ) {
        let entry = row.and_then(|r| model.get(r).ok().flatten());
        match entry {
            None => {
                debug!("selection cleared");
                self.state = SelectionState::NoSelection;
                if objects.clear_found_flags() {
                    view.bump_undo_serial();
                    view.request_redraw();
                }
            }
            Some(entry) => {
                let row = row.unwrap();
                debug!(row, title = %entry.record().title, "violation selected");
                self.state = SelectionState::Selected(row);
                highlight(entry, objects, view);
                view.request_recenter(entry.record().x, entry.record().y, false);
            }
        }
    }

    /// Row activated (double invocation). Highlights like a plain
    /// selection, then forces a hard recenter and raises the main board
    /// window. Activating a header row behaves as nothing selected.
    pub fn row_activated(
        &mut self,
        model: &ViolationListModel,
        row: usize,
        objects: &mut dyn BoardObjects,
        view: &mut dyn BoardView,
    ) {
        match model.get(row).ok().flatten() {
            None => self.selection_changed(model, None, objects, view),
            Some(entry) => {
                debug!(row, title = %entry.record().title, "violation activated");
                self.state = SelectionState::Selected(row);
                highlight(entry, objects, view);
                view.request_recenter(entry.record().x, entry.record().y, true);
                view.present_main_window();
            }
        }
    }
}

/// Common highlight effect: clear all found-flags unconditionally, flag the
/// violating objects, bump the undo serial and request a redraw.
fn highlight(entry: &ViolationEntry, objects: &mut dyn BoardObjects, view: &mut dyn BoardView) {
    objects.clear_found_flags();
    objects.set_found_flags(&entry.record().objects);
    view.bump_undo_serial();
    view.request_redraw();
}
