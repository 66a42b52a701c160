//! The gridsheet model layer.
//!
//! This module adapts an application-defined row store into a list-based
//! data-binding model: per-row, per-column attributes are exposed to a view
//! layer as typed records, and UI-originated edit requests are routed back
//! toward the row store. It separates three concerns:
//!
//! - **Column configuration** ([`ColumnSpec`], held by [`SheetState`]):
//!   names, widths, visibility, flags, alignment, colors, combo choices.
//! - **Edit staging** ([`RowEdits`]): a sparse per-row cache of UI-driven
//!   edits, independent of the authoritative row data.
//! - **The model contract** ([`SheetModel`]): row count plus overridable
//!   per-cell queries and edit handlers, with cache-backed defaults.
//!
//! # Core Types
//!
//! - [`SheetModel`]: the trait that models implement
//! - [`SheetState`]: column configuration + edit cache + signals
//! - [`SheetSignals`]: change notifications consumed by the bound view
//! - [`RowRecord`]: the per-row bulk fetch a view binds to
//! - [`ScratchSheet`]: a minimal concrete model backed by the edit cache
//!
//! # Example
//!
//! ```
//! use gridsheet::model::{ScratchSheet, SheetModel};
//!
//! let sheet = ScratchSheet::new(4);
//! sheet.state().configure_columns(
//!     2,
//!     vec!["Name".to_string(), "Age".to_string()],
//!     vec![200.0],
//!     0,
//! );
//!
//! // Connect to change notifications
//! sheet.signals().row_changed.connect(|row| {
//!     println!("Row {} must be re-fetched", row);
//! });
//!
//! sheet.request_text_change(1, 0, "Ada".to_string());
//!
//! let record = sheet.row_record(1);
//! assert_eq!(record.text, vec!["Ada".to_string(), String::new()]);
//! ```
//!
//! Views fetch one [`RowRecord`] per row on demand; models emit signals when
//! state changes, which views listen to for re-fetching. A structural reset
//! (`model_about_to_reset` / `model_reset`) means all previously fetched
//! column and row bindings are invalid and must be re-queried.

mod column;
mod record;
mod scratch;
mod state;
mod traits;

pub use column::{default_column_name, Alignment, ColumnSpec, DEFAULT_COLUMN_WIDTH, MIN_COLUMN_WIDTH};
pub use record::RowRecord;
pub use scratch::ScratchSheet;
pub use state::{RowEdits, SheetState};
pub use traits::{SheetModel, SheetSignals};
