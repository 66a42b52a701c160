//! Shared model state: column configuration, edit staging, signals.

use std::collections::HashMap;

use gridsheet_core::logging::targets;
use parking_lot::RwLock;

use super::column::{default_column_name, Alignment, ColumnSpec, DEFAULT_COLUMN_WIDTH, MIN_COLUMN_WIDTH};
use super::traits::SheetSignals;

/// Staged, UI-driven edits for one row.
///
/// Each map is keyed by column index and only holds cells the user actually
/// touched. The edits exist to stage changes independently of the
/// authoritative row data source; they do not represent the dataset itself.
#[derive(Debug, Clone, Default)]
pub struct RowEdits {
    text: HashMap<usize, String>,
    checked: HashMap<usize, bool>,
    combo_index: HashMap<usize, usize>,
}

impl RowEdits {
    /// Staged text for a column, if any.
    pub fn text(&self, column: usize) -> Option<&str> {
        self.text.get(&column).map(String::as_str)
    }

    /// Staged checkbox state for a column, if any.
    pub fn checked(&self, column: usize) -> Option<bool> {
        self.checked.get(&column).copied()
    }

    /// Staged combo selection for a column, if any.
    pub fn combo_index(&self, column: usize) -> Option<usize> {
        self.combo_index.get(&column).copied()
    }

    /// `true` when no cell of the row has been touched.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.checked.is_empty() && self.combo_index.is_empty()
    }
}

#[derive(Debug)]
struct ColumnLayout {
    specs: Vec<ColumnSpec>,
    left_count: usize,
}

/// Column configuration, edit staging and signals for a sheet model.
///
/// `SheetState` is the non-overridable part of every [`SheetModel`]
/// implementation: the implementing type embeds one and hands it out via
/// [`SheetModel::state`](super::SheetModel::state). All mutation goes through
/// `&self` (interior mutability), so models stay shareable the way the rest
/// of the model layer expects.
///
/// Invalid input never fails loudly: out-of-range indices and rejected
/// values are no-ops, at most logged. The view layer must not be able to
/// crash the model with a stray index.
///
/// A fresh state is already configured with a single default column, so
/// `column_count` is never zero.
///
/// [`SheetModel`]: super::SheetModel
#[derive(Debug)]
pub struct SheetState {
    columns: RwLock<ColumnLayout>,
    edits: RwLock<HashMap<usize, RowEdits>>,
    signals: SheetSignals,
}

impl Default for SheetState {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetState {
    /// Creates a state with one default column ("A", default width).
    pub fn new() -> Self {
        Self {
            columns: RwLock::new(ColumnLayout {
                specs: vec![ColumnSpec::new(0)],
                left_count: 0,
            }),
            edits: RwLock::new(HashMap::new()),
            signals: SheetSignals::new(),
        }
    }

    /// The signals emitted by this state.
    pub fn signals(&self) -> &SheetSignals {
        &self.signals
    }

    // -------------------------------------------------------------------------
    // Column configuration
    // -------------------------------------------------------------------------

    /// Replaces the entire column configuration.
    ///
    /// Builds `count` fresh columns: provided `names` and `widths` are used
    /// in order (truncated if longer than `count`), missing names fall back
    /// to letter labels and missing widths to [`DEFAULT_COLUMN_WIDTH`].
    /// Sub-minimum widths are clamped to [`MIN_COLUMN_WIDTH`]. All other
    /// per-column attributes (flags, combo choices, alignment, colors,
    /// visibility, resizability, sortability) reset to their defaults.
    ///
    /// `left_count` pins the leading columns; an out-of-range value resets
    /// to 0. A `count` of zero is rejected with a warning and leaves the
    /// prior configuration fully unchanged.
    ///
    /// Consumers are notified through the structural reset pair; previously
    /// fetched column and row bindings are invalid afterwards.
    pub fn configure_columns(
        &self,
        count: usize,
        names: Vec<String>,
        widths: Vec<f64>,
        left_count: usize,
    ) {
        if count < 1 {
            tracing::warn!(target: targets::MODEL, count, "column count out of range");
            return;
        }
        self.signals.emit_reset(|| {
            {
                let mut layout = self.columns.write();
                layout.specs = (0..count)
                    .map(|i| {
                        let mut spec = ColumnSpec::new(i);
                        if let Some(name) = names.get(i) {
                            if !name.is_empty() {
                                spec.name = name.clone();
                            }
                        }
                        if let Some(&width) = widths.get(i) {
                            spec.width = width.max(MIN_COLUMN_WIDTH);
                        }
                        spec
                    })
                    .collect();
                layout.left_count = if left_count > count - 1 { 0 } else { left_count };
            }
            self.signals.columns_changed.emit(());
            self.signals.column_count_changed.emit(());
        });
    }

    /// Renames a column. An empty name restores the default letter label.
    pub fn set_column_name(&self, index: usize, name: &str) {
        let applied = self.update_column(index, |spec| {
            spec.name = if name.is_empty() {
                default_column_name(index)
            } else {
                name.to_string()
            };
        });
        if applied {
            self.signals.columns_changed.emit(());
        }
    }

    /// Sets a column width. Requests below [`MIN_COLUMN_WIDTH`] are rejected.
    pub fn set_column_width(&self, index: usize, width: f64) {
        if width < MIN_COLUMN_WIDTH {
            tracing::debug!(target: targets::MODEL, index, width, "rejecting sub-minimum column width");
            return;
        }
        if self.update_column(index, |spec| spec.width = width) {
            self.signals.columns_changed.emit(());
        }
    }

    /// Shows or hides a column.
    ///
    /// Hiding changes the effective width list consumers see, so this runs
    /// through a structural reset rather than a plain column change.
    pub fn set_column_visible(&self, index: usize, visible: bool) {
        if index >= self.column_count() {
            return;
        }
        self.signals.emit_reset(|| {
            self.update_column(index, |spec| spec.visible = visible);
            self.signals.columns_changed.emit(());
        });
    }

    /// Sets whether the view may resize a column.
    pub fn set_column_resizable(&self, index: usize, resizable: bool) {
        if self.update_column(index, |spec| spec.resizable = resizable) {
            self.signals.columns_changed.emit(());
        }
    }

    /// Sets whether the view may offer sorting on a column.
    pub fn set_column_sort_enabled(&self, index: usize, sort_enabled: bool) {
        if self.update_column(index, |spec| spec.sort_enabled = sort_enabled) {
            self.signals.columns_changed.emit(());
        }
    }

    /// Sets the column-level default background color.
    pub fn set_column_background(&self, index: usize, color: Option<String>) {
        if self.update_column(index, |spec| spec.background = color) {
            self.signals.columns_changed.emit(());
        }
    }

    /// Sets the text alignment for a whole column.
    pub fn set_column_alignment(&self, index: usize, alignment: Alignment) {
        if self.update_column(index, |spec| spec.alignment = alignment) {
            self.signals.columns_changed.emit(());
        }
    }

    /// Turns a column into a combo-box column with the given choices.
    pub fn set_column_combo_choices(&self, index: usize, choices: Vec<String>) {
        if self.update_column(index, |spec| spec.combo_choices = choices) {
            self.signals.columns_changed.emit(());
        }
    }

    /// Marks a column read-only. There is no unmark; flags are fixed at setup.
    pub fn mark_read_only(&self, index: usize) {
        if self.update_column(index, |spec| spec.read_only = true) {
            self.signals.columns_changed.emit(());
        }
    }

    /// Marks a column as rendering checkboxes. There is no unmark.
    pub fn mark_checkable(&self, index: usize) {
        if self.update_column(index, |spec| spec.checkable = true) {
            self.signals.columns_changed.emit(());
        }
    }

    /// Marks a column as action-triggering. There is no unmark.
    pub fn mark_action(&self, index: usize) {
        if self.update_column(index, |spec| spec.action = true) {
            self.signals.columns_changed.emit(());
        }
    }

    fn update_column(&self, index: usize, f: impl FnOnce(&mut ColumnSpec)) -> bool {
        let mut layout = self.columns.write();
        match layout.specs.get_mut(index) {
            Some(spec) => {
                f(spec);
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Column getters (what a view reads after a reset or column change)
    // -------------------------------------------------------------------------

    /// Number of columns. Always at least 1.
    pub fn column_count(&self) -> usize {
        self.columns.read().specs.len()
    }

    /// Number of pinned leading columns, in `[0, column_count - 1]`.
    pub fn left_column_count(&self) -> usize {
        self.columns.read().left_count
    }

    /// Header labels in column order.
    pub fn column_name_list(&self) -> Vec<String> {
        self.columns.read().specs.iter().map(|spec| spec.name.clone()).collect()
    }

    /// Widths in column order. Hidden columns report 0.
    pub fn column_width_list(&self) -> Vec<f64> {
        self.columns
            .read()
            .specs
            .iter()
            .map(|spec| if spec.visible { spec.width } else { 0.0 })
            .collect()
    }

    /// Resizability in column order.
    pub fn resizable_column_list(&self) -> Vec<bool> {
        self.columns.read().specs.iter().map(|spec| spec.resizable).collect()
    }

    /// Sortability in column order.
    pub fn sort_enabled_column_list(&self) -> Vec<bool> {
        self.columns.read().specs.iter().map(|spec| spec.sort_enabled).collect()
    }

    /// A snapshot of one column's full configuration.
    pub fn column(&self, index: usize) -> Option<ColumnSpec> {
        self.columns.read().specs.get(index).cloned()
    }

    /// Stored width of a column, ignoring visibility. Defaults when out of range.
    pub fn column_width(&self, index: usize) -> f64 {
        self.columns
            .read()
            .specs
            .get(index)
            .map_or(DEFAULT_COLUMN_WIDTH, |spec| spec.width)
    }

    /// Alignment of a column. `Left` when out of range.
    pub fn column_alignment(&self, index: usize) -> Alignment {
        self.columns
            .read()
            .specs
            .get(index)
            .map_or(Alignment::default(), |spec| spec.alignment)
    }

    /// Combo choices of a column. Empty when out of range.
    pub fn column_combo_choices(&self, index: usize) -> Vec<String> {
        self.columns
            .read()
            .specs
            .get(index)
            .map_or_else(Vec::new, |spec| spec.combo_choices.clone())
    }

    /// Column-level default background color.
    pub fn column_background(&self, index: usize) -> Option<String> {
        self.columns
            .read()
            .specs
            .get(index)
            .and_then(|spec| spec.background.clone())
    }

    /// Whether a column is marked read-only.
    pub fn column_read_only(&self, index: usize) -> bool {
        self.columns.read().specs.get(index).is_some_and(|spec| spec.read_only)
    }

    /// Whether a column is marked checkable.
    pub fn column_checkable(&self, index: usize) -> bool {
        self.columns.read().specs.get(index).is_some_and(|spec| spec.checkable)
    }

    /// Whether a column is marked action-triggering.
    pub fn column_action(&self, index: usize) -> bool {
        self.columns.read().specs.get(index).is_some_and(|spec| spec.action)
    }

    // -------------------------------------------------------------------------
    // Edit staging
    // -------------------------------------------------------------------------

    /// Staged text for a cell, if the user edited it.
    pub fn edit_text(&self, row: usize, column: usize) -> Option<String> {
        self.edits
            .read()
            .get(&row)
            .and_then(|edits| edits.text(column).map(str::to_string))
    }

    /// Staged checkbox state for a cell, if the user toggled it.
    pub fn edit_checked(&self, row: usize, column: usize) -> Option<bool> {
        self.edits.read().get(&row).and_then(|edits| edits.checked(column))
    }

    /// Staged combo selection for a cell, if the user picked one.
    pub fn edit_combo_index(&self, row: usize, column: usize) -> Option<usize> {
        self.edits.read().get(&row).and_then(|edits| edits.combo_index(column))
    }

    /// Stages edited text for a cell, creating the row entry if absent.
    pub fn stage_text(&self, row: usize, column: usize, text: String) {
        self.edits.write().entry(row).or_default().text.insert(column, text);
    }

    /// Stages a checkbox toggle for a cell.
    pub fn stage_checked(&self, row: usize, column: usize, checked: bool) {
        self.edits.write().entry(row).or_default().checked.insert(column, checked);
    }

    /// Stages a combo selection for a cell.
    pub fn stage_combo_index(&self, row: usize, column: usize, combo_index: usize) {
        self.edits
            .write()
            .entry(row)
            .or_default()
            .combo_index
            .insert(column, combo_index);
    }

    /// `true` when any cell of the row has staged edits.
    pub fn has_edits(&self, row: usize) -> bool {
        self.edits.read().get(&row).is_some_and(|edits| !edits.is_empty())
    }

    /// A snapshot of a row's staged edits, if the row was ever touched.
    ///
    /// Useful for models that commit staged values to their row store in
    /// bulk.
    pub fn row_edits(&self, row: usize) -> Option<RowEdits> {
        self.edits.read().get(&row).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_new_state_has_one_default_column() {
        let state = SheetState::new();
        assert_eq!(state.column_count(), 1);
        assert_eq!(state.column_name_list(), vec!["A".to_string()]);
        assert_eq!(state.column_width_list(), vec![DEFAULT_COLUMN_WIDTH]);
        assert_eq!(state.left_column_count(), 0);
    }

    #[test]
    fn test_configure_pads_names_and_widths() {
        let state = SheetState::new();
        state.configure_columns(3, vec![], vec![], 0);

        assert_eq!(
            state.column_name_list(),
            vec!["A".to_string(), "B".to_string(), "C".to_string()]
        );
        assert_eq!(state.column_width_list(), vec![150.0, 150.0, 150.0]);
    }

    #[test]
    fn test_configure_preserves_provided_values() {
        let state = SheetState::new();
        state.configure_columns(
            2,
            vec!["Name".to_string(), "Age".to_string()],
            vec![200.0],
            0,
        );

        assert_eq!(
            state.column_name_list(),
            vec!["Name".to_string(), "Age".to_string()]
        );
        assert_eq!(state.column_width_list(), vec![200.0, 150.0]);
    }

    #[test]
    fn test_configure_truncates_excess_input() {
        let state = SheetState::new();
        state.configure_columns(
            2,
            vec!["X".to_string(), "Y".to_string(), "Z".to_string()],
            vec![10.0, 20.0, 30.0],
            0,
        );

        assert_eq!(state.column_name_list(), vec!["X".to_string(), "Y".to_string()]);
        assert_eq!(state.column_width_list(), vec![10.0, 20.0]);
    }

    #[test]
    fn test_configure_rejects_zero_count() {
        let _ = tracing_subscriber::fmt().with_env_filter("warn").try_init();

        let state = SheetState::new();
        state.configure_columns(2, vec!["Name".to_string()], vec![42.0], 1);

        state.configure_columns(0, vec![], vec![], 0);

        // prior configuration fully unchanged
        assert_eq!(state.column_count(), 2);
        assert_eq!(state.column_name_list(), vec!["Name".to_string(), "B".to_string()]);
        assert_eq!(state.column_width_list(), vec![42.0, 150.0]);
        assert_eq!(state.left_column_count(), 1);
    }

    #[test]
    fn test_configure_clamps_sub_minimum_widths() {
        let state = SheetState::new();
        state.configure_columns(2, vec![], vec![1.0, 0.5], 0);
        assert_eq!(state.column_width_list(), vec![MIN_COLUMN_WIDTH, MIN_COLUMN_WIDTH]);
    }

    #[test]
    fn test_configure_resets_column_scoped_state() {
        let state = SheetState::new();
        state.configure_columns(3, vec![], vec![], 0);
        state.mark_read_only(1);
        state.mark_checkable(2);
        state.set_column_alignment(0, Alignment::Right);
        state.set_column_background(0, Some("#ff0000".to_string()));
        state.set_column_combo_choices(1, vec!["on".to_string(), "off".to_string()]);
        state.set_column_resizable(0, false);
        state.set_column_sort_enabled(0, false);
        state.set_column_visible(2, false);

        state.configure_columns(3, vec![], vec![], 0);

        for i in 0..3 {
            let spec = state.column(i).unwrap();
            assert!(!spec.read_only);
            assert!(!spec.checkable);
            assert_eq!(spec.alignment, Alignment::Left);
            assert!(spec.background.is_none());
            assert!(spec.combo_choices.is_empty());
            assert!(spec.resizable);
            assert!(spec.sort_enabled);
            assert!(spec.visible);
        }
    }

    #[test]
    fn test_left_column_count_clamping() {
        let state = SheetState::new();
        state.configure_columns(3, vec![], vec![], 2);
        assert_eq!(state.left_column_count(), 2);

        // column_count - 1 is the maximum; anything larger resets to 0
        state.configure_columns(3, vec![], vec![], 3);
        assert_eq!(state.left_column_count(), 0);

        state.configure_columns(3, vec![], vec![], 99);
        assert_eq!(state.left_column_count(), 0);
    }

    #[test]
    fn test_set_column_name() {
        let state = SheetState::new();
        state.configure_columns(2, vec![], vec![], 0);

        state.set_column_name(1, "Total");
        assert_eq!(state.column_name_list(), vec!["A".to_string(), "Total".to_string()]);

        // empty resets to the letter label
        state.set_column_name(1, "");
        assert_eq!(state.column_name_list(), vec!["A".to_string(), "B".to_string()]);

        // out of range is a no-op
        state.set_column_name(5, "ignored");
        assert_eq!(state.column_count(), 2);
    }

    #[test]
    fn test_set_column_width_rejects_sub_minimum() {
        let state = SheetState::new();
        state.configure_columns(1, vec![], vec![], 0);

        state.set_column_width(0, 80.0);
        assert_eq!(state.column_width_list(), vec![80.0]);

        state.set_column_width(0, 1.9);
        assert_eq!(state.column_width_list(), vec![80.0]);

        state.set_column_width(7, 80.0); // out of range, no-op
        assert_eq!(state.column_count(), 1);
    }

    #[test]
    fn test_hidden_column_reports_zero_width() {
        let state = SheetState::new();
        state.configure_columns(3, vec![], vec![], 0);
        state.set_column_width(1, 90.0);

        state.set_column_visible(1, false);
        assert_eq!(state.column_count(), 3);
        assert_eq!(state.column_width_list(), vec![150.0, 0.0, 150.0]);
        // the stored width survives hiding
        assert_eq!(state.column_width(1), 90.0);

        state.set_column_visible(1, true);
        assert_eq!(state.column_width_list(), vec![150.0, 90.0, 150.0]);
    }

    #[test]
    fn test_mark_flags() {
        let state = SheetState::new();
        state.configure_columns(3, vec![], vec![], 0);

        state.mark_read_only(1);
        state.mark_checkable(2);
        state.mark_action(0);

        assert!(state.column_read_only(1));
        assert!(!state.column_read_only(0));
        assert!(state.column_checkable(2));
        assert!(!state.column_checkable(1));
        assert!(state.column_action(0));
        assert!(!state.column_action(2));
        // out of range reads are false
        assert!(!state.column_read_only(9));
    }

    #[test]
    fn test_edit_staging_round_trip() {
        let state = SheetState::new();
        state.configure_columns(3, vec![], vec![], 0);

        assert!(state.edit_text(0, 0).is_none());
        assert!(!state.has_edits(0));

        state.stage_text(0, 1, "X".to_string());
        assert_eq!(state.edit_text(0, 1), Some("X".to_string()));
        assert!(state.edit_text(0, 0).is_none());
        assert!(state.edit_text(1, 1).is_none());
        assert!(state.has_edits(0));

        state.stage_checked(2, 0, true);
        assert_eq!(state.edit_checked(2, 0), Some(true));
        assert!(state.edit_checked(2, 1).is_none());

        state.stage_combo_index(2, 1, 4);
        assert_eq!(state.edit_combo_index(2, 1), Some(4));
        assert!(state.edit_combo_index(2, 0).is_none());
    }

    #[test]
    fn test_row_edits_snapshot() {
        let state = SheetState::new();
        state.configure_columns(2, vec![], vec![], 0);

        assert!(state.row_edits(0).is_none());

        state.stage_text(0, 0, "a".to_string());
        state.stage_checked(0, 1, true);

        let edits = state.row_edits(0).unwrap();
        assert_eq!(edits.text(0), Some("a"));
        assert_eq!(edits.checked(1), Some(true));
        assert!(edits.combo_index(0).is_none());
        assert!(!edits.is_empty());
    }

    #[test]
    fn test_configure_emits_reset_pair_and_column_signals() {
        let state = SheetState::new();
        let events = Arc::new(Mutex::new(Vec::new()));

        let e = events.clone();
        state.signals().model_about_to_reset.connect(move |_| e.lock().push("about"));
        let e = events.clone();
        state.signals().model_reset.connect(move |_| e.lock().push("reset"));
        let e = events.clone();
        state.signals().columns_changed.connect(move |_| e.lock().push("columns"));
        let e = events.clone();
        state.signals().column_count_changed.connect(move |_| e.lock().push("count"));

        state.configure_columns(2, vec![], vec![], 0);
        assert_eq!(*events.lock(), vec!["about", "columns", "count", "reset"]);

        events.lock().clear();
        state.configure_columns(0, vec![], vec![], 0);
        assert!(events.lock().is_empty());
    }

    #[test]
    fn test_visibility_toggle_emits_reset_pair() {
        let state = SheetState::new();
        state.configure_columns(2, vec![], vec![], 0);

        let events = Arc::new(Mutex::new(Vec::new()));
        let e = events.clone();
        state.signals().model_about_to_reset.connect(move |_| e.lock().push("about"));
        let e = events.clone();
        state.signals().model_reset.connect(move |_| e.lock().push("reset"));
        let e = events.clone();
        state.signals().columns_changed.connect(move |_| e.lock().push("columns"));

        state.set_column_visible(0, false);
        assert_eq!(*events.lock(), vec!["about", "columns", "reset"]);

        // out of range does not notify
        events.lock().clear();
        state.set_column_visible(9, false);
        assert!(events.lock().is_empty());
    }

    #[test]
    fn test_simple_setters_emit_columns_changed_only() {
        let state = SheetState::new();
        state.configure_columns(2, vec![], vec![], 0);

        let columns = Arc::new(Mutex::new(0));
        let resets = Arc::new(Mutex::new(0));
        let c = columns.clone();
        state.signals().columns_changed.connect(move |_| *c.lock() += 1);
        let r = resets.clone();
        state.signals().model_reset.connect(move |_| *r.lock() += 1);

        state.set_column_resizable(0, false);
        state.set_column_sort_enabled(1, false);
        state.set_column_background(0, Some("#eee".to_string()));
        state.set_column_alignment(1, Alignment::Center);
        state.set_column_combo_choices(0, vec!["a".to_string()]);
        state.mark_read_only(0);
        state.mark_checkable(1);
        state.mark_action(0);
        state.set_column_name(0, "N");
        state.set_column_width(1, 50.0);

        assert_eq!(*columns.lock(), 10);
        assert_eq!(*resets.lock(), 0);

        // rejected input does not notify
        state.set_column_width(1, 0.0);
        state.set_column_resizable(9, false);
        assert_eq!(*columns.lock(), 10);
    }
}
