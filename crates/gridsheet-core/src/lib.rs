//! Core systems for gridsheet.
//!
//! This crate provides the change-notification machinery that the gridsheet
//! model layer is built on:
//!
//! - **Signal/Slot System**: Type-safe, synchronous observer notifications
//! - **Logging targets**: `tracing` target names for filtering by subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use gridsheet_core::Signal;
//!
//! // Create a signal that notifies when a row changes
//! let row_changed = Signal::<usize>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = row_changed.connect(|row| {
//!     println!("Row {} changed", row);
//! });
//!
//! // Emit the signal
//! row_changed.emit(3);
//!
//! // Disconnect when done
//! row_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
