use serde::{Deserialize, Serialize};

use super::layout::{
    format_date_display, format_money_gbp, format_quantity, percent_label, work_dates_range,
};
use super::preview::TotalsBlock;
use crate::core::{CalculationMode, InvoiceHeader, InvoiceTotals, WorkLog};

/// Meta box in the top-right corner of the printable invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaBox {
    /// Invoice number, `"-"` when blank.
    pub invoice_number: String,
    /// Display-formatted invoice date: period end if present, else start.
    pub invoice_date: String,
    /// `<start> – <end>`, both display-formatted.
    pub period: String,
    /// UTR, `"-"` when blank.
    pub utr: String,
}

/// From / Bill To card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyCard {
    pub title: String,
    /// Party name, `"-"` when blank.
    pub name: String,
}

/// The single summary row of the line-items table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    /// `Labour services (daily)` or `(hourly)`.
    pub description: String,
    /// `Work dates: <first … last>` subtext.
    pub work_dates: String,
    /// Unit count, trailing zeros stripped.
    pub quantity: String,
    /// Unit rate, grouped GBP.
    pub rate: String,
    /// Gross, grouped GBP.
    pub amount: String,
}

/// Structured, layout-ready description of the downloadable invoice.
/// The PDF generator consumes this verbatim; any other paginated sink
/// (print dialog, HTML-to-print) can too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintableDocument {
    /// Document title, always `INVOICE`.
    pub title: String,
    pub meta: MetaBox,
    pub from: PartyCard,
    pub bill_to: PartyCard,
    pub line_items: SummaryLine,
    pub totals: TotalsBlock,
    /// `Unit: Days • Total days: N` note under the totals.
    pub unit_note: String,
    pub footer: String,
}

/// Render the printable target. Same data, same computed values as the
/// preview — only the formatting convention differs (grouped GBP, display
/// dates). Fixed English copy; the printable invoice is not localized.
pub fn render_printable(
    header: &InvoiceHeader,
    log: &WorkLog,
    totals: &InvoiceTotals,
) -> PrintableDocument {
    let (service, unit_label) = match log.mode() {
        CalculationMode::ByDay => ("Labour services (daily)", "Days"),
        CalculationMode::ByHour => ("Labour services (hourly)", "Hours"),
    };

    // Invoice date resolves to whichever period bound is set first: end,
    // then start; both blank renders the placeholder.
    let invoice_date_source = if header.end_date.is_empty() {
        header.start_date.as_str()
    } else {
        header.end_date.as_str()
    };

    let quantity = format_quantity(totals.unit_count);

    PrintableDocument {
        title: "INVOICE".to_string(),
        meta: MetaBox {
            invoice_number: dash_fallback(&header.invoice_number),
            invoice_date: format_date_display(invoice_date_source),
            period: format!(
                "{} – {}",
                format_date_display(&header.start_date),
                format_date_display(&header.end_date)
            ),
            utr: dash_fallback(&header.utr_number),
        },
        from: PartyCard {
            title: "From".to_string(),
            name: dash_fallback(&header.company_name),
        },
        bill_to: PartyCard {
            title: "Bill To".to_string(),
            name: dash_fallback(&header.client_name),
        },
        line_items: SummaryLine {
            description: service.to_string(),
            work_dates: format!("Work dates: {}", work_dates_range(log.days())),
            quantity: quantity.clone(),
            rate: format_money_gbp(totals.unit_rate),
            amount: format_money_gbp(totals.gross),
        },
        totals: TotalsBlock {
            gross_label: "Gross".to_string(),
            gross_value: format_money_gbp(totals.gross),
            deduction_label: format!(
                "CIS Deduction ({})",
                percent_label(totals.deduction_rate)
            ),
            deduction_value: format!("- {}", format_money_gbp(totals.deduction)),
            net_label: "Net Payable".to_string(),
            net_value: format_money_gbp(totals.net),
        },
        unit_note: format!(
            "Unit: {unit_label} • Total {}: {quantity}",
            unit_label.to_lowercase()
        ),
        footer: "Generated by CIS Invoice Calculator".to_string(),
    }
}

fn dash_fallback(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}
