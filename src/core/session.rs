use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calculator::compute;
use super::numbering::default_invoice_number;
use super::types::{
    CalculationMode, DEFAULT_DEDUCTION_RATE, InvoiceHeader, InvoiceTotals, Language,
};
use super::worklog::WorkLog;

/// Payer company the client field defaults to at session start.
pub const DEFAULT_CLIENT: &str = "Blériot Building Construction Services";

/// Fallback download file name when the invoice number is blank.
pub const DEFAULT_PDF_FILE_NAME: &str = "invoice.pdf";

/// The mutable application state an invoice is edited through: header
/// fields, rate texts, language, and the work-day list. Passed by reference
/// into the pure calculator and renderer — there is no global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceSession {
    pub header: InvoiceHeader,
    pub language: Language,
    /// Raw per-day rate text, unparsed.
    pub daily_rate: String,
    /// Raw per-hour rate text, unparsed.
    pub hourly_rate: String,
    pub work_log: WorkLog,
}

impl InvoiceSession {
    /// Fresh session with the start-of-session defaults: invoice number
    /// `INV-YYYYMMDD` for `today`, client defaulted to the payer company,
    /// day-based mode, everything else blank.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            header: InvoiceHeader {
                invoice_number: default_invoice_number(today),
                client_name: DEFAULT_CLIENT.to_string(),
                ..InvoiceHeader::default()
            },
            language: Language::default(),
            daily_rate: String::new(),
            hourly_rate: String::new(),
            work_log: WorkLog::new(CalculationMode::ByDay),
        }
    }

    /// Recompute totals from the current state at the default 20% rate.
    pub fn totals(&self) -> InvoiceTotals {
        compute(
            self.work_log.mode(),
            self.work_log.days(),
            &self.daily_rate,
            &self.hourly_rate,
            DEFAULT_DEDUCTION_RATE,
        )
    }

    /// Switch calculation mode; resets the work-day list when it changes.
    pub fn set_mode(&mut self, mode: CalculationMode) {
        self.work_log.set_mode(mode);
    }

    /// Whether the download action should be enabled. A UX guard, not a
    /// computational necessity — an empty document still renders.
    pub fn can_download(&self) -> bool {
        !self.work_log.is_empty()
    }

    /// Download file name: `<invoice-number>.pdf`, or `invoice.pdf` when
    /// the number is blank.
    pub fn pdf_file_name(&self) -> String {
        if self.header.invoice_number.is_empty() {
            DEFAULT_PDF_FILE_NAME.to_string()
        } else {
            format!("{}.pdf", self.header.invoice_number)
        }
    }
}
