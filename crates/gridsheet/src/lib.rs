//! gridsheet - a column-configured table model with edit staging.
//!
//! This is the main umbrella crate. It provides the [`model`] layer and
//! re-exports the signal machinery from `gridsheet-core`.
//!
//! # Example
//!
//! ```
//! use gridsheet::model::{ScratchSheet, SheetModel};
//!
//! let sheet = ScratchSheet::new(10);
//! sheet.state().configure_columns(3, vec![], vec![], 0);
//!
//! sheet.request_text_change(0, 1, "42".to_string());
//! assert_eq!(sheet.text(0, 1), "42");
//! ```

pub use gridsheet_core::{ConnectionGuard, ConnectionId, Signal};

pub mod model;
pub mod prelude;
