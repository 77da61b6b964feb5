use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::labels::Labels;
use super::layout::{format_money_plain, format_quantity, percent_label, row_amount};
use crate::core::{CalculationMode, InvoiceHeader, InvoiceTotals, Language, WorkLog};

/// Options for the on-screen target.
#[derive(Debug, Clone, Copy)]
pub struct PreviewOptions {
    /// Show only the first N rows; totals still reflect the full dataset.
    pub max_rows: Option<usize>,
    /// Render the "Invoice Preview" heading.
    pub show_title: bool,
    /// Date stamped next to the invoice number (typically "today");
    /// omitted when `None`.
    pub issued_on: Option<NaiveDate>,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            max_rows: None,
            show_title: true,
            issued_on: None,
        }
    }
}

/// One rendered work-day row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRow {
    /// 1-based position in the list.
    pub index: usize,
    /// Raw ISO date text, `"-"` when blank.
    pub date: String,
    /// Hour count; present only in hour mode.
    pub hours: Option<String>,
    /// Row amount, plain fixed-point.
    pub amount: String,
}

/// Gross / deduction / net block. Values carry their display sign:
/// the deduction is prefixed `-` in both targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsBlock {
    pub gross_label: String,
    pub gross_value: String,
    pub deduction_label: String,
    pub deduction_value: String,
    pub net_label: String,
    pub net_value: String,
}

/// Structured description of the on-screen invoice preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewDocument {
    pub title: Option<String>,
    /// Company name, `"Company"` fallback.
    pub company: String,
    /// `UTR: <value>` line; omitted when the field is blank.
    pub utr_line: Option<String>,
    /// `#` + invoice number, verbatim.
    pub invoice_number: String,
    /// Locale-formatted issue date, when requested.
    pub issued_on: Option<String>,
    pub from_label: String,
    pub from_value: String,
    pub to_label: String,
    pub to_value: String,
    pub period_label: String,
    /// `<start> - <end>` with `N/A` fallbacks, raw ISO text.
    pub period_value: String,
    /// Windowed rows; empty when the work-day list is empty.
    pub rows: Vec<PreviewRow>,
    pub totals: TotalsBlock,
}

/// Render the on-screen preview. Pure and stateless: the document is a
/// fresh value derived from the inputs, nothing is cached or diffed.
pub fn render_preview(
    header: &InvoiceHeader,
    log: &WorkLog,
    totals: &InvoiceTotals,
    language: Language,
    opts: &PreviewOptions,
) -> PreviewDocument {
    let t = Labels::for_language(language);
    let mode = log.mode();

    let window = opts.max_rows.unwrap_or(usize::MAX);
    let rows = log
        .days()
        .iter()
        .take(window)
        .enumerate()
        .map(|(i, day)| PreviewRow {
            index: i + 1,
            date: if day.date.is_empty() {
                "-".to_string()
            } else {
                day.date.clone()
            },
            hours: match mode {
                CalculationMode::ByDay => None,
                CalculationMode::ByHour => Some(format_quantity(day.hours)),
            },
            amount: format_money_plain(row_amount(mode, totals.unit_rate, day.hours)),
        })
        .collect();

    PreviewDocument {
        title: opts.show_title.then(|| t.preview.to_string()),
        company: fallback(&header.company_name, "Company"),
        utr_line: (!header.utr_number.is_empty()).then(|| format!("UTR: {}", header.utr_number)),
        invoice_number: format!("#{}", header.invoice_number),
        issued_on: opts.issued_on.map(|d| stamp_date(d, language)),
        from_label: t.from.to_string(),
        from_value: fallback(&header.company_name, "Company"),
        to_label: t.to.to_string(),
        to_value: fallback(&header.client_name, "Client"),
        period_label: t.period.to_string(),
        period_value: format!(
            "{} - {}",
            fallback(&header.start_date, "N/A"),
            fallback(&header.end_date, "N/A")
        ),
        rows,
        totals: TotalsBlock {
            gross_label: t.gross.to_string(),
            gross_value: format_money_plain(totals.gross),
            deduction_label: format!("{} ({})", t.cis, percent_label(totals.deduction_rate)),
            deduction_value: format!("-{}", format_money_plain(totals.deduction)),
            net_label: t.net.to_string(),
            net_value: format_money_plain(totals.net),
        },
    }
}

fn fallback(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Issue-date stamp in the preview's locale convention:
/// en-GB `28/01/2026`, ro `28.01.2026`.
fn stamp_date(date: NaiveDate, language: Language) -> String {
    match language {
        Language::EnGb => date.format("%d/%m/%Y").to_string(),
        Language::Ro => date.format("%d.%m.%Y").to_string(),
    }
}
