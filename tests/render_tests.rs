use cisbill::core::*;
use cisbill::render::{self, PreviewOptions, layout};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn header() -> InvoiceHeader {
    InvoiceHeader {
        company_name: "J. Popescu Groundworks".into(),
        client_name: "Blériot Building Construction Services".into(),
        invoice_number: "INV-20260128".into(),
        utr_number: "1234567890".into(),
        start_date: "2026-01-05".into(),
        end_date: "2026-01-23".into(),
    }
}

fn hour_log() -> WorkLog {
    let mut log = WorkLog::new(CalculationMode::ByHour);
    log.push(WorkDay::new("2026-01-05", dec!(8)));
    log.push(WorkDay::new("2026-01-06", dec!(7.5)));
    log.push(WorkDay::new("2026-01-07", dec!(0)));
    log
}

fn totals_for(log: &WorkLog) -> InvoiceTotals {
    compute(log.mode(), log.days(), "100", "15", DEFAULT_DEDUCTION_RATE)
}

// --- Shared layout rules ---

#[test]
fn date_display_table() {
    assert_eq!(layout::format_date_display("2026-01-05"), "05/01/2026");
    assert_eq!(layout::format_date_display(""), "-");
    assert_eq!(layout::format_date_display("not-a-date"), "not-a-date");
    // Near-misses of the 4-2-2 shape pass through unchanged.
    assert_eq!(layout::format_date_display("2026/01/05"), "2026/01/05");
    assert_eq!(layout::format_date_display("2026-1-5"), "2026-1-5");
}

#[test]
fn range_uses_list_order_not_date_order() {
    let mut log = WorkLog::new(CalculationMode::ByDay);
    log.push(WorkDay::new("2026-01-20", dec!(8)));
    log.push(WorkDay::new("2026-01-05", dec!(8)));
    assert_eq!(
        layout::work_dates_range(log.days()),
        "20/01/2026 … 05/01/2026"
    );
}

#[test]
fn range_of_empty_list_is_placeholder() {
    assert_eq!(layout::work_dates_range(&[]), "-");
}

#[test]
fn range_of_single_entry_repeats_it() {
    let days = [WorkDay::new("2026-01-05", dec!(8))];
    assert_eq!(layout::work_dates_range(&days), "05/01/2026 … 05/01/2026");
}

// --- Preview target ---

#[test]
fn preview_windows_rows_but_not_totals() {
    let mut log = WorkLog::new(CalculationMode::ByDay);
    log.add_dates([
        "2026-01-05",
        "2026-01-06",
        "2026-01-07",
        "2026-01-08",
        "2026-01-09",
        "2026-01-12",
        "2026-01-13",
    ]);
    let totals = totals_for(&log);

    let opts = PreviewOptions {
        max_rows: Some(5),
        ..PreviewOptions::default()
    };
    let doc = render::render_preview(&header(), &log, &totals, Language::EnGb, &opts);

    assert_eq!(doc.rows.len(), 5);
    // Totals reflect all 7 days at £100, never the window.
    assert_eq!(doc.totals.gross_value, "£700.00");
    assert_eq!(doc.totals.deduction_value, "-£140.00");
    assert_eq!(doc.totals.net_value, "£560.00");
}

#[test]
fn preview_rows_show_raw_iso_or_placeholder() {
    let mut log = WorkLog::new(CalculationMode::ByDay);
    log.push(WorkDay::new("2026-01-05", dec!(8)));
    log.push(WorkDay::new("", dec!(8)));
    let totals = totals_for(&log);

    let doc = render::render_preview(
        &header(),
        &log,
        &totals,
        Language::EnGb,
        &PreviewOptions::default(),
    );
    assert_eq!(doc.rows[0].date, "2026-01-05");
    assert_eq!(doc.rows[1].date, "-");
    // Day mode: no hours cell, every amount equals the unit rate.
    assert!(doc.rows[0].hours.is_none());
    assert_eq!(doc.rows[0].amount, "£100.00");
    assert_eq!(doc.rows[1].amount, "£100.00");
}

#[test]
fn preview_hour_mode_rows() {
    let log = hour_log();
    let totals = totals_for(&log);
    let doc = render::render_preview(
        &header(),
        &log,
        &totals,
        Language::EnGb,
        &PreviewOptions::default(),
    );

    assert_eq!(doc.rows[0].hours.as_deref(), Some("8"));
    assert_eq!(doc.rows[1].hours.as_deref(), Some("7.5"));
    assert_eq!(doc.rows[0].amount, "£120.00");
    assert_eq!(doc.rows[1].amount, "£112.50");
    assert_eq!(doc.rows[2].amount, "£0.00");
}

#[test]
fn preview_empty_list_renders_no_rows_but_full_document() {
    let log = WorkLog::new(CalculationMode::ByDay);
    let totals = totals_for(&log);
    let doc = render::render_preview(
        &header(),
        &log,
        &totals,
        Language::EnGb,
        &PreviewOptions::default(),
    );
    assert!(doc.rows.is_empty());
    assert_eq!(doc.totals.gross_value, "£0.00");
}

#[test]
fn preview_header_fallbacks() {
    let log = WorkLog::new(CalculationMode::ByDay);
    let totals = totals_for(&log);
    let blank = InvoiceHeader::default();
    let doc = render::render_preview(
        &blank,
        &log,
        &totals,
        Language::EnGb,
        &PreviewOptions::default(),
    );

    assert_eq!(doc.company, "Company");
    assert_eq!(doc.to_value, "Client");
    assert_eq!(doc.utr_line, None);
    assert_eq!(doc.period_value, "N/A - N/A");
    assert_eq!(doc.invoice_number, "#");
}

#[test]
fn preview_localizes_labels_and_date_stamp() {
    let log = hour_log();
    let totals = totals_for(&log);
    let opts = PreviewOptions {
        issued_on: NaiveDate::from_ymd_opt(2026, 1, 28),
        ..PreviewOptions::default()
    };

    let en = render::render_preview(&header(), &log, &totals, Language::EnGb, &opts);
    assert_eq!(en.totals.gross_label, "Gross");
    assert_eq!(en.totals.deduction_label, "CIS (20%)");
    assert_eq!(en.issued_on.as_deref(), Some("28/01/2026"));

    let ro = render::render_preview(&header(), &log, &totals, Language::Ro, &opts);
    assert_eq!(ro.totals.gross_label, "Brut");
    assert_eq!(ro.period_label, "Perioadă");
    assert_eq!(ro.issued_on.as_deref(), Some("28.01.2026"));
    // Computed values are identical across languages.
    assert_eq!(ro.totals.net_value, en.totals.net_value);
}

#[test]
fn per_row_amounts_sum_to_gross() {
    let log = hour_log();
    let totals = totals_for(&log);
    let sum: Decimal = log
        .days()
        .iter()
        .map(|d| layout::row_amount(log.mode(), totals.unit_rate, d.hours))
        .sum();
    assert_eq!(sum, totals.gross);
}

// --- Printable target ---

#[test]
fn printable_summary_line() {
    let log = hour_log();
    let totals = totals_for(&log);
    let doc = render::render_printable(&header(), &log, &totals);

    assert_eq!(doc.title, "INVOICE");
    assert_eq!(doc.line_items.description, "Labour services (hourly)");
    assert_eq!(
        doc.line_items.work_dates,
        "Work dates: 05/01/2026 … 07/01/2026"
    );
    assert_eq!(doc.line_items.quantity, "15.5");
    assert_eq!(doc.line_items.rate, "£15.00");
    assert_eq!(doc.line_items.amount, "£232.50");
    assert_eq!(doc.unit_note, "Unit: Hours • Total hours: 15.5");
}

#[test]
fn printable_totals_block() {
    let log = hour_log();
    let totals = totals_for(&log);
    let doc = render::render_printable(&header(), &log, &totals);

    assert_eq!(doc.totals.gross_value, "£232.50");
    assert_eq!(doc.totals.deduction_label, "CIS Deduction (20%)");
    assert_eq!(doc.totals.deduction_value, "- £46.50");
    assert_eq!(doc.totals.net_label, "Net Payable");
    assert_eq!(doc.totals.net_value, "£186.00");
}

#[test]
fn printable_invoice_date_prefers_period_end() {
    let log = WorkLog::new(CalculationMode::ByDay);
    let totals = totals_for(&log);

    let mut h = header();
    let doc = render::render_printable(&h, &log, &totals);
    assert_eq!(doc.meta.invoice_date, "23/01/2026");

    h.end_date.clear();
    let doc = render::render_printable(&h, &log, &totals);
    assert_eq!(doc.meta.invoice_date, "05/01/2026");

    h.start_date.clear();
    let doc = render::render_printable(&h, &log, &totals);
    assert_eq!(doc.meta.invoice_date, "-");
}

#[test]
fn printable_blank_header_renders_placeholders() {
    let log = WorkLog::new(CalculationMode::ByDay);
    let totals = totals_for(&log);
    let doc = render::render_printable(&InvoiceHeader::default(), &log, &totals);

    assert_eq!(doc.meta.invoice_number, "-");
    assert_eq!(doc.meta.utr, "-");
    assert_eq!(doc.meta.period, "- – -");
    assert_eq!(doc.from.name, "-");
    assert_eq!(doc.bill_to.name, "-");
    assert_eq!(doc.line_items.work_dates, "Work dates: -");
}

#[test]
fn printable_groups_thousands_preview_does_not() {
    let mut log = WorkLog::new(CalculationMode::ByDay);
    log.add_dates((1..=20).map(|d| format!("2026-01-{d:02}")));
    let totals = compute(log.mode(), log.days(), "250", "", DEFAULT_DEDUCTION_RATE);

    let printable = render::render_printable(&header(), &log, &totals);
    assert_eq!(printable.totals.gross_value, "£5,000.00");

    let preview = render::render_preview(
        &header(),
        &log,
        &totals,
        Language::EnGb,
        &PreviewOptions::default(),
    );
    assert_eq!(preview.totals.gross_value, "£5000.00");
}

#[test]
fn day_mode_summary_labels() {
    let mut log = WorkLog::new(CalculationMode::ByDay);
    log.add_dates(["2026-01-05", "2026-01-06", "2026-01-07"]);
    let totals = totals_for(&log);
    let doc = render::render_printable(&header(), &log, &totals);

    assert_eq!(doc.line_items.description, "Labour services (daily)");
    assert_eq!(doc.line_items.quantity, "3");
    assert_eq!(doc.unit_note, "Unit: Days • Total days: 3");
    // In day mode every row amount equals the unit rate and gross is the
    // row amount times the count.
    assert_eq!(doc.line_items.rate, "£100.00");
    assert_eq!(doc.line_items.amount, "£300.00");
}

#[test]
fn malformed_dates_pass_through_everywhere() {
    let mut log = WorkLog::new(CalculationMode::ByDay);
    log.push(WorkDay::new("next tuesday", dec!(8)));
    let totals = totals_for(&log);

    let mut h = header();
    h.start_date = "soon".into();
    let doc = render::render_printable(&h, &log, &totals);
    assert!(doc.meta.period.starts_with("soon"));
    assert_eq!(
        doc.line_items.work_dates,
        "Work dates: next tuesday … next tuesday"
    );
}
