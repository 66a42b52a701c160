//! A minimal concrete sheet model backed entirely by the edit cache.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::state::SheetState;
use super::traits::SheetModel;

/// A sheet model with no row store of its own.
///
/// `ScratchSheet` only knows how many rows it has; every cell attribute
/// comes from the column configuration and the staged edits. This is the
/// smallest useful model: configure columns, let the view edit, read the
/// staged values back out. Anything with real data should implement
/// [`SheetModel`] directly instead.
///
/// # Example
///
/// ```
/// use gridsheet::model::{ScratchSheet, SheetModel};
///
/// let sheet = ScratchSheet::new(3);
/// sheet.state().configure_columns(2, vec![], vec![], 0);
///
/// sheet.request_checked_change(0, 1, true);
/// assert!(sheet.is_checked(0, 1));
/// ```
pub struct ScratchSheet {
    rows: AtomicUsize,
    state: SheetState,
}

impl ScratchSheet {
    /// Creates a scratch sheet with the given number of rows and the default
    /// single-column configuration.
    pub fn new(rows: usize) -> Self {
        Self {
            rows: AtomicUsize::new(rows),
            state: SheetState::new(),
        }
    }

    /// Changes the row count.
    ///
    /// This is structural: previously fetched row records are invalid, so
    /// the change runs through the reset pair. Staged edits are kept; edits
    /// beyond the new count become visible again if the count grows back.
    pub fn set_row_count(&self, rows: usize) {
        self.state.signals().emit_reset(|| {
            self.rows.store(rows, Ordering::SeqCst);
        });
    }
}

impl SheetModel for ScratchSheet {
    fn row_count(&self) -> usize {
        self.rows.load(Ordering::SeqCst)
    }

    fn state(&self) -> &SheetState {
        &self.state
    }
}
