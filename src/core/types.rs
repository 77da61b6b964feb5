use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Flat CIS deduction rate withheld from gross pay (20%).
pub const DEFAULT_DEDUCTION_RATE: Decimal = dec!(0.20);

/// How a work-day list is billed. The two variants are mutually exclusive
/// datasets, not convertible — switching mode resets the list (see
/// [`WorkLog::set_mode`](super::WorkLog::set_mode)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationMode {
    /// Rate is per worked day; `hours` values are ignored.
    #[serde(rename = "days")]
    ByDay,
    /// Rate is per hour, summed across all entries.
    #[serde(rename = "hours")]
    ByHour,
}

impl CalculationMode {
    /// Conventional hour count for entries auto-added by the bulk calendar
    /// path: 8 in day mode, 0 in hour mode.
    pub fn default_hours(&self) -> Decimal {
        match self {
            Self::ByDay => dec!(8),
            Self::ByHour => Decimal::ZERO,
        }
    }
}

/// One unit of billable work.
///
/// The date is raw ISO text (`YYYY-MM-DD`) and may be empty or malformed;
/// malformed dates are passed through at render time rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDay {
    /// Calendar date in ISO form, possibly empty.
    pub date: String,
    /// Hour count; meaningful only in [`CalculationMode::ByHour`].
    pub hours: Decimal,
}

impl WorkDay {
    pub fn new(date: impl Into<String>, hours: Decimal) -> Self {
        Self {
            date: date.into(),
            hours,
        }
    }

    /// Entry with the mode-conventional hour count.
    pub fn for_mode(date: impl Into<String>, mode: CalculationMode) -> Self {
        Self::new(date, mode.default_hours())
    }
}

/// Free-form identifying fields of the invoice. All are strings with no
/// structural validation; empty renders as a placeholder, never verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceHeader {
    pub company_name: String,
    pub client_name: String,
    pub invoice_number: String,
    /// UTR (tax reference) — opaque to calculation.
    pub utr_number: String,
    /// Billing period start, ISO text.
    pub start_date: String,
    /// Billing period end, ISO text.
    pub end_date: String,
}

/// Derived invoice totals. Always recomputed from the current work-day list,
/// rate text, and mode — never stored, so they cannot go stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Day count or summed hours, depending on mode.
    pub unit_count: Decimal,
    /// The rate applicable to the active mode.
    pub unit_rate: Decimal,
    /// `unit_count × unit_rate`, unrounded.
    pub gross: Decimal,
    /// `gross × deduction_rate`, unrounded.
    pub deduction: Decimal,
    /// `gross − deduction`, unrounded.
    pub net: Decimal,
    /// The flat rate applied, e.g. 0.20.
    pub deduction_rate: Decimal,
}

impl InvoiceTotals {
    /// All-zero totals at the given deduction rate (empty work-day list).
    pub fn zero(deduction_rate: Decimal) -> Self {
        Self {
            unit_count: Decimal::ZERO,
            unit_rate: Decimal::ZERO,
            gross: Decimal::ZERO,
            deduction: Decimal::ZERO,
            net: Decimal::ZERO,
            deduction_rate,
        }
    }
}

/// Label-dictionary key for the on-screen target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// British English.
    #[serde(rename = "en-GB")]
    EnGb,
    /// Romanian.
    #[serde(rename = "ro")]
    Ro,
}

impl Default for Language {
    fn default() -> Self {
        Self::EnGb
    }
}
