//! Logging facilities for gridsheet.
//!
//! gridsheet uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "gridsheet_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "gridsheet_core::signal";
    /// Model layer target.
    pub const MODEL: &str = "gridsheet::model";
}
