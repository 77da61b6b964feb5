//! Document assembly: the deterministic mapping from invoice data to a
//! structured, renderable document.
//!
//! Two targets consume the same data model at different fidelity:
//!
//! - [`render_preview`] — the on-screen surface: raw ISO dates, plain
//!   fixed-point money, optional row windowing, localized labels.
//! - [`render_printable`] — the downloadable document: display dates,
//!   grouped en-GB currency, work-date range summarization, fixed English
//!   copy.
//!
//! Both are pure, stateless transformations; they agree byte-for-byte on
//! every computed monetary value and differ only in typography and layout.

pub mod labels;
pub mod layout;
mod preview;
mod printable;

pub use labels::Labels;
pub use preview::{PreviewDocument, PreviewOptions, PreviewRow, TotalsBlock, render_preview};
pub use printable::{
    MetaBox, PartyCard, PrintableDocument, SummaryLine, render_printable,
};
