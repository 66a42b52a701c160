//! The sheet model contract and its change notifications.

use gridsheet_core::logging::targets;
use gridsheet_core::Signal;

use super::column::Alignment;
use super::record::RowRecord;
use super::state::SheetState;

/// Collection of signals emitted by sheet models.
///
/// Views connect to these signals to stay synchronized with the model.
///
/// # Signal Usage
///
/// - **Structural changes**: the `model_about_to_reset` / `model_reset` pair
///   brackets any change after which previously fetched column and row
///   bindings are invalid (column reconfiguration, visibility toggles).
/// - **Column attribute changes**: `columns_changed` fires whenever the
///   column-level lists (names, widths, flags) must be re-read.
/// - **Row changes**: `row_changed` carries the row index whose
///   [`RowRecord`] must be fetched again.
pub struct SheetSignals {
    /// Emitted when column-level attributes changed and the column lists
    /// must be re-read.
    pub columns_changed: Signal<()>,

    /// Emitted when the number of columns (or the pinned-column count)
    /// changed.
    pub column_count_changed: Signal<()>,

    /// Emitted just before a structural reset.
    pub model_about_to_reset: Signal<()>,

    /// Emitted after a structural reset has completed.
    pub model_reset: Signal<()>,

    /// Emitted when a row's staged state was mutated. Carries the row index.
    pub row_changed: Signal<usize>,
}

impl std::fmt::Debug for SheetSignals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetSignals").finish_non_exhaustive()
    }
}

impl Default for SheetSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetSignals {
    /// Creates a new set of sheet signals.
    pub fn new() -> Self {
        Self {
            columns_changed: Signal::new(),
            column_count_changed: Signal::new(),
            model_about_to_reset: Signal::new(),
            model_reset: Signal::new(),
            row_changed: Signal::new(),
        }
    }

    /// Emits signals for a structural reset.
    ///
    /// Calls the provided function between the about_to_reset and reset
    /// signals.
    pub fn emit_reset<F>(&self, reset_fn: F)
    where
        F: FnOnce(),
    {
        self.model_about_to_reset.emit(());
        reset_fn();
        self.model_reset.emit(());
    }
}

/// The core trait for sheet models.
///
/// A `SheetModel` mediates between a view layer and an application-defined
/// row store. Implementations supply the row count and embed a
/// [`SheetState`] for column configuration and edit staging; everything else
/// has cache-backed defaults, so a minimally-configured model is usable
/// without overriding any query.
///
/// # Implementation Requirements
///
/// At minimum, you must implement:
/// - [`row_count`](SheetModel::row_count) - Number of rows in the store
/// - [`state`](SheetModel::state) - The embedded shared state
///
/// Models with real row data override the per-cell queries ([`text`],
/// [`is_checked`], [`combo_index`], [`cell_background`], ...) to read from
/// their store, and the `request_*` handlers to commit edits to it. The
/// default handlers only stage edits in the state's cache and announce the
/// row change.
///
/// # Example
///
/// ```
/// use gridsheet::model::{SheetModel, SheetState};
///
/// struct NumberSheet {
///     values: Vec<i64>,
///     state: SheetState,
/// }
///
/// impl SheetModel for NumberSheet {
///     fn row_count(&self) -> usize {
///         self.values.len()
///     }
///
///     fn state(&self) -> &SheetState {
///         &self.state
///     }
///
///     fn text(&self, row: usize, column: usize) -> String {
///         match (self.values.get(row), column) {
///             (Some(value), 0) => value.to_string(),
///             _ => String::new(),
///         }
///     }
/// }
/// ```
///
/// [`text`]: SheetModel::text
/// [`is_checked`]: SheetModel::is_checked
/// [`combo_index`]: SheetModel::combo_index
/// [`cell_background`]: SheetModel::cell_background
pub trait SheetModel: Send + Sync {
    /// Returns the number of rows the row store holds.
    fn row_count(&self) -> usize;

    /// Returns the shared column configuration and edit staging state.
    fn state(&self) -> &SheetState;

    /// Returns the signals for this model (convenience for
    /// `state().signals()`).
    fn signals(&self) -> &SheetSignals {
        self.state().signals()
    }

    // -------------------------------------------------------------------------
    // Per-cell queries (overridable; defaults read the edit cache / columns)
    // -------------------------------------------------------------------------

    /// Display text for a cell. Default: staged edit, else empty.
    fn text(&self, row: usize, column: usize) -> String {
        self.state().edit_text(row, column).unwrap_or_default()
    }

    /// Per-cell background override. Default: none; the bulk fetch falls
    /// back to the column-level color when this yields `None`.
    fn cell_background(&self, _row: usize, _column: usize) -> Option<String> {
        None
    }

    /// Selected combo entry for a cell. Default: staged edit, else 0.
    fn combo_index(&self, row: usize, column: usize) -> usize {
        self.state().edit_combo_index(row, column).unwrap_or(0)
    }

    /// Text alignment for a cell. Default: the column alignment.
    fn alignment(&self, _row: usize, column: usize) -> Alignment {
        self.state().column_alignment(column)
    }

    /// Combo choices for a cell. Default: the column choices.
    fn combo_choices(&self, _row: usize, column: usize) -> Vec<String> {
        self.state().column_combo_choices(column)
    }

    /// Whether a cell rejects editing. Default: the column flag.
    fn is_read_only(&self, _row: usize, column: usize) -> bool {
        self.state().column_read_only(column)
    }

    /// Whether activating a cell triggers an action. Default: the column flag.
    fn is_action(&self, _row: usize, column: usize) -> bool {
        self.state().column_action(column)
    }

    /// Whether a cell renders as a checkbox. Default: the column flag.
    fn is_checkable(&self, _row: usize, column: usize) -> bool {
        self.state().column_checkable(column)
    }

    /// Checkbox state for a cell. Default: staged edit, else unchecked.
    fn is_checked(&self, row: usize, column: usize) -> bool {
        self.state().edit_checked(row, column).unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Bulk fetch
    // -------------------------------------------------------------------------

    /// Computes the full per-row record the view binds to.
    ///
    /// Iterates all columns and calls the per-cell queries above, so
    /// overrides flow through. Records are computed on demand and never
    /// cached by the model.
    fn row_record(&self, row: usize) -> RowRecord {
        let count = self.state().column_count();
        let mut record = RowRecord::with_capacity(count);
        for column in 0..count {
            record.text.push(self.text(row, column));
            record.read_only.push(self.is_read_only(row, column));
            record.action.push(self.is_action(row, column));
            record.combo_index.push(self.combo_index(row, column));
            record.combo_choices.push(self.combo_choices(row, column));
            record.checkable.push(self.is_checkable(row, column));
            record.checked.push(self.is_checked(row, column));
            record.alignment.push(self.alignment(row, column));
            record.background.push(
                self.cell_background(row, column)
                    .or_else(|| self.state().column_background(column)),
            );
        }
        record
    }

    // -------------------------------------------------------------------------
    // Edit request handlers (invoked by the view on user interaction)
    // -------------------------------------------------------------------------

    /// Handles a checkbox toggle. Default: stage in the edit cache and
    /// announce the row change. Override to commit to real storage.
    fn request_checked_change(&self, row: usize, column: usize, checked: bool) {
        self.state().stage_checked(row, column, checked);
        self.signals().row_changed.emit(row);
    }

    /// Handles a combo selection. Default: stage and announce.
    fn request_combo_index_change(&self, row: usize, column: usize, combo_index: usize) {
        self.state().stage_combo_index(row, column, combo_index);
        self.signals().row_changed.emit(row);
    }

    /// Handles a text edit. Default: stage and announce.
    fn request_text_change(&self, row: usize, column: usize, text: String) {
        self.state().stage_text(row, column, text);
        self.signals().row_changed.emit(row);
    }

    /// Handles activation of an action cell. Default: log only; override to
    /// run domain logic.
    fn request_action(&self, row: usize, column: usize) {
        tracing::debug!(target: targets::MODEL, row, column, "action requested without an override");
    }

    /// Sorts by a column. Default: log only; models that support sorting
    /// override this.
    fn sort_by_column(&self, column: usize, _ascending: bool) {
        tracing::debug!(target: targets::MODEL, column, "sorting not supported by this model");
    }
}
