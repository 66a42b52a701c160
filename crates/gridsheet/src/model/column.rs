//! Per-column configuration.
//!
//! All attributes of a column live in a single [`ColumnSpec`], and the model
//! holds one spec per column position. This keeps the invariant "every
//! per-column attribute list has exactly `column_count` entries" local to one
//! structure instead of scattering defaults across independent maps.

/// Default column width, in view units.
pub const DEFAULT_COLUMN_WIDTH: f64 = 150.0;

/// Smallest accepted column width. Narrower requests are rejected.
pub const MIN_COLUMN_WIDTH: f64 = 2.0;

/// Text alignment within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// Align to the left edge.
    #[default]
    Left,
    /// Align to the center.
    Center,
    /// Align to the right edge.
    Right,
}

/// Configuration for a single column.
///
/// A fresh spec carries the defaults a minimally-configured model needs:
/// a spreadsheet-style letter label, the default width, visible, resizable,
/// sortable, left-aligned, no color, no combo choices, and no flags set.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    /// Header label. Never empty; defaults to the letter label.
    pub name: String,
    /// Width in view units, at least [`MIN_COLUMN_WIDTH`].
    pub width: f64,
    /// Hidden columns report width 0 to consumers but keep their index.
    pub visible: bool,
    /// Whether the view may resize this column.
    pub resizable: bool,
    /// Whether the view may offer sorting on this column.
    pub sort_enabled: bool,
    /// Cell text alignment for the whole column.
    pub alignment: Alignment,
    /// Column-level default background color, e.g. `"#ffe0e0"`.
    pub background: Option<String>,
    /// Choices for a combo-box column; empty when not a combo column.
    pub combo_choices: Vec<String>,
    /// Cells in this column cannot be edited.
    pub read_only: bool,
    /// Cells in this column render as checkboxes.
    pub checkable: bool,
    /// Activating a cell in this column triggers an action instead of an editor.
    pub action: bool,
}

impl ColumnSpec {
    /// Creates the default spec for the column at `index`.
    pub fn new(index: usize) -> Self {
        Self {
            name: default_column_name(index),
            width: DEFAULT_COLUMN_WIDTH,
            visible: true,
            resizable: true,
            sort_enabled: true,
            alignment: Alignment::default(),
            background: None,
            combo_choices: Vec::new(),
            read_only: false,
            checkable: false,
            action: false,
        }
    }
}

/// Returns the spreadsheet-style letter label for a column position:
/// `A, B, .., Z, AA, AB, ..`.
pub fn default_column_name(index: usize) -> String {
    let mut label = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        label.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    label.reverse();
    // label only ever contains ASCII uppercase letters
    String::from_utf8(label).unwrap_or_default()
}
