//! Ordered violation list with 1-based display numbering.

use crate::view::entry::ViolationEntry;
use crate::view::record::ViolationRecord;
use thiserror::Error;
use tracing::debug;

/// Row access errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("row index {0} is out of range")]
    IndexOutOfRange(usize),
}

/// One display row. Leaf rows carry an entry; group rows are headers used
/// by hosts that cluster related violations. The ingestion path never
/// creates groups, so a group normally has zero children.
#[derive(Debug)]
pub enum Row {
    Leaf { number: u32, entry: ViolationEntry },
    Group { title: String },
}

/// Insertion-ordered collection of violation entries.
///
/// The display counter increments once per appended violation and is reset
/// only by [`ViolationListModel::reset`], so the Nth entry appended since
/// the last reset always shows number N.
#[derive(Debug, Default)]
pub struct ViolationListModel {
    rows: Vec<Row>,
    next_number: u32,
}

impl ViolationListModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one violation, copying the record. Returns the new row index.
    pub fn append(&mut self, record: &ViolationRecord) -> usize {
        self.next_number += 1;
        let number = self.next_number;
        debug!(number, title = %record.title, "appending violation");
        self.rows.push(Row::Leaf {
            number,
            entry: ViolationEntry::new(record),
        });
        self.rows.len() - 1
    }

    /// Append a header row. Does not consume a display number.
    pub fn append_group(&mut self, title: &str) -> usize {
        self.rows.push(Row::Group {
            title: title.to_string(),
        });
        self.rows.len() - 1
    }

    /// Drop all rows (and their previews) and restart numbering at 1.
    pub fn reset(&mut self) {
        debug!(dropped = self.rows.len(), "resetting violation list");
        self.rows.clear();
        self.next_number = 0;
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The entry at a row. Header rows yield `Ok(None)`; an index past the
    /// end is an error.
    pub fn get(&self, row: usize) -> Result<Option<&ViolationEntry>, ListError> {
        match self.rows.get(row) {
            Some(Row::Leaf { entry, .. }) => Ok(Some(entry)),
            Some(Row::Group { .. }) => Ok(None),
            None => Err(ListError::IndexOutOfRange(row)),
        }
    }

    /// The display number at a row, `Ok(None)` for headers.
    pub fn number_of(&self, row: usize) -> Result<Option<u32>, ListError> {
        match self.rows.get(row) {
            Some(Row::Leaf { number, .. }) => Ok(Some(*number)),
            Some(Row::Group { .. }) => Ok(None),
            None => Err(ListError::IndexOutOfRange(row)),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Leaf entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = &ViolationEntry> {
        self.rows.iter().filter_map(|row| match row {
            Row::Leaf { entry, .. } => Some(entry),
            Row::Group { .. } => None,
        })
    }
}
