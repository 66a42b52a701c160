//! The typed per-row record a view binds to.

use super::column::Alignment;

/// Every per-cell attribute of one row, in column order.
///
/// A `RowRecord` is the bulk fetch the view layer performs per row: each
/// field is an ordered sequence across all columns, computed on demand by
/// [`SheetModel::row_record`](super::SheetModel::row_record). Records are not
/// cached; a `row_changed` notification means the record for that row must
/// be fetched again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowRecord {
    /// Display text per column.
    pub text: Vec<String>,
    /// Whether editing is rejected, per column.
    pub read_only: Vec<bool>,
    /// Whether activation triggers an action instead of an editor, per column.
    pub action: Vec<bool>,
    /// Selected combo-box entry per column (0 when not a combo column).
    pub combo_index: Vec<usize>,
    /// Combo-box choices per column (empty when not a combo column).
    pub combo_choices: Vec<Vec<String>>,
    /// Whether the cell renders as a checkbox, per column.
    pub checkable: Vec<bool>,
    /// Checkbox state per column.
    pub checked: Vec<bool>,
    /// Text alignment per column.
    pub alignment: Vec<Alignment>,
    /// Effective background color per column (cell override, falling back
    /// to the column default).
    pub background: Vec<Option<String>>,
}

impl RowRecord {
    /// Creates an empty record with capacity for `columns` entries per field.
    pub fn with_capacity(columns: usize) -> Self {
        Self {
            text: Vec::with_capacity(columns),
            read_only: Vec::with_capacity(columns),
            action: Vec::with_capacity(columns),
            combo_index: Vec::with_capacity(columns),
            combo_choices: Vec::with_capacity(columns),
            checkable: Vec::with_capacity(columns),
            checked: Vec::with_capacity(columns),
            alignment: Vec::with_capacity(columns),
            background: Vec::with_capacity(columns),
        }
    }

    /// Number of columns covered by this record.
    pub fn column_count(&self) -> usize {
        self.text.len()
    }
}
