//! Target-independent layout rules: per-row amounts, monetary and date
//! formatting, and work-date range summarization.
//!
//! The two render targets deliberately use different monetary conventions:
//! the on-screen preview prints plain fixed-point (`£232.50`), the printable
//! target prints en-GB grouped currency (`£1,232.50`). Both round the same
//! way, so they agree on every computed value.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::{CalculationMode, WorkDay};

/// Amount for a single work-day row: the unit rate itself in day mode,
/// rate × hours in hour mode. Recomputed per row; in day mode every row
/// equals the unit rate, in hour mode the row amounts sum to gross.
pub fn row_amount(mode: CalculationMode, unit_rate: Decimal, hours: Decimal) -> Decimal {
    match mode {
        CalculationMode::ByDay => unit_rate,
        CalculationMode::ByHour => unit_rate * hours,
    }
}

/// Round to 2 decimal places for display, half away from zero.
fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Plain fixed-point money: `£` + 2dp, no grouping. Preview convention;
/// negatives keep the arithmetic sign after the symbol (`£-46.50`).
pub fn format_money_plain(value: Decimal) -> String {
    format!("£{:.2}", round_money(value))
}

/// en-GB currency style: thousands grouping, symbol first, minus before the
/// symbol (`-£1,234.56`). Printable convention.
pub fn format_money_gbp(value: Decimal) -> String {
    let rounded = round_money(value);
    let negative = rounded.is_sign_negative();
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-£{grouped}.{frac_part}")
    } else {
        format!("£{grouped}.{frac_part}")
    }
}

/// Unit counts for display: trailing zeros stripped (`3`, `15.5`).
pub fn format_quantity(value: Decimal) -> String {
    value.normalize().to_string()
}

/// ISO `YYYY-MM-DD` → display form `DD/MM/YYYY`. Empty input yields the
/// `"-"` placeholder; anything not matching the strict 4-2-2 digit pattern
/// passes through unchanged (defensive fallback, not an error).
pub fn format_date_display(date: &str) -> String {
    if date.is_empty() {
        return "-".to_string();
    }
    if !is_iso_shaped(date) {
        return date.to_string();
    }
    format!("{}/{}/{}", &date[8..10], &date[5..7], &date[0..4])
}

/// Strict shape check: `dddd-dd-dd`, ASCII digits only.
fn is_iso_shaped(date: &str) -> bool {
    let b = date.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| matches!(i, 4 | 7) || c.is_ascii_digit())
}

/// First and last entries' display dates joined by an ellipsis separator,
/// in current list order — not date-sorted. Callers wanting chronological
/// order must sort before rendering. Empty list yields `"-"`.
pub fn work_dates_range(days: &[WorkDay]) -> String {
    match (days.first(), days.last()) {
        (Some(first), Some(last)) => format!(
            "{} … {}",
            format_date_display(&first.date),
            format_date_display(&last.date)
        ),
        _ => "-".to_string(),
    }
}

/// Deduction-rate caption: `0.20` → `"20%"`.
pub fn percent_label(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::from(100)).normalize())
}
