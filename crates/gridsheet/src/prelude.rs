//! Prelude module for gridsheet.
//!
//! This module re-exports the most commonly used types for convenient
//! importing:
//!
//! ```ignore
//! use gridsheet::prelude::*;
//! ```

pub use crate::model::{
    Alignment, ColumnSpec, RowEdits, RowRecord, ScratchSheet, SheetModel, SheetSignals, SheetState,
};
pub use crate::{ConnectionId, Signal};
