//! Core data model, invoice arithmetic, and session state.
//!
//! The calculator is a pure function of (mode, work-day list, rate text);
//! totals are derived on every call and never persisted, so they cannot go
//! stale. Degenerate input degrades to zero rather than erroring.

mod calculator;
mod numbering;
mod session;
mod types;
mod worklog;

pub use calculator::*;
pub use numbering::*;
pub use session::*;
pub use types::*;
pub use worklog::*;
