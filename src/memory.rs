//! Sheet memory: the cell storage seam
//!
//! The evaluator only ever needs to fetch a cell by label, so that single
//! capability is the whole interface boundary. [`SheetMemory`] is the
//! in-memory implementation callers (and tests) use.

use crate::cell::Cell;
use ahash::AHashMap;

/// Lookup capability the evaluator requires from cell storage.
///
/// Implementations must be read-consistent for the duration of one
/// `evaluate` call; the evaluator never mutates cells and never
/// enumerates them.
pub trait CellLookup {
    /// Fetch a cell by its label (e.g. `"A1"`). `None` means the cell is
    /// absent or the backing store could not produce it.
    fn get_cell_by_label(&self, label: &str) -> Option<&Cell>;
}

/// In-memory sheet keyed by cell label
#[derive(Debug, Default)]
pub struct SheetMemory {
    cells: AHashMap<String, Cell>,
}

impl SheetMemory {
    /// Create an empty sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a cell under the given label
    pub fn insert_cell(&mut self, label: impl Into<String>, cell: Cell) {
        self.cells.insert(label.into(), cell);
    }

    /// Number of stored cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if no cells are stored
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl CellLookup for SheetMemory {
    fn get_cell_by_label(&self, label: &str) -> Option<&Cell> {
        self.cells.get(label)
    }
}
