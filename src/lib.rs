//! # cisbill
//!
//! Invoice arithmetic and document assembly for UK Construction Industry
//! Scheme (CIS) subcontractor invoices: worked days or hours × a rate,
//! a flat-percentage deduction withheld from gross, and a deterministic
//! mapping from the invoice data to a printable document layout.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Degenerate input (blank or unparsable rates, malformed dates, empty
//! work-day lists) degrades silently to zero/blank instead of erroring;
//! rounding happens only at presentation time.
//!
//! ## Quick Start
//!
//! ```rust
//! use cisbill::core::*;
//! use cisbill::render;
//! use rust_decimal_macros::dec;
//!
//! let mut log = WorkLog::new(CalculationMode::ByDay);
//! log.add_dates(["2026-01-05", "2026-01-06", "2026-01-07"]);
//!
//! let totals = compute(log.mode(), log.days(), "100", "", DEFAULT_DEDUCTION_RATE);
//! assert_eq!(totals.gross, dec!(300));
//! assert_eq!(totals.deduction, dec!(60));
//! assert_eq!(totals.net, dec!(240));
//!
//! let doc = render::render_printable(&InvoiceHeader::default(), &log, &totals);
//! assert_eq!(doc.totals.net_value, "£240.00");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Data model, calculator, work log, session state, document layout |
//! | `pdf` | Printable document → standalone PDF bytes (lopdf) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod render;

#[cfg(feature = "pdf")]
pub mod pdf;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
