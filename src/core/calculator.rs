use std::str::FromStr;

use rust_decimal::Decimal;

use super::types::{CalculationMode, InvoiceTotals, WorkDay};

/// A rate field parsed from raw user text.
///
/// `value` is what the calculator uses (zero on failure); `is_valid` tells
/// callers whether the text actually parsed, so a UI can warn without
/// changing the computed totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateInput {
    pub value: Decimal,
    pub is_valid: bool,
}

impl RateInput {
    /// Parse raw rate text. Empty or unparsable input yields
    /// `{ value: 0, is_valid: false }` — never an error.
    pub fn parse(text: &str) -> Self {
        match lenient_decimal(text) {
            Some(value) => Self {
                value,
                is_valid: true,
            },
            None => Self {
                value: Decimal::ZERO,
                is_valid: false,
            },
        }
    }
}

/// Parse raw rate text, treating empty or unparsable input as zero.
pub fn parse_rate(text: &str) -> Decimal {
    RateInput::parse(text).value
}

/// Parse raw hour text, treating empty or unparsable input as zero.
/// This is where the "non-finite hours contribute 0" rule lives: hour
/// values are finite by construction once past this boundary.
pub fn parse_hours(text: &str) -> Decimal {
    lenient_decimal(text).unwrap_or(Decimal::ZERO)
}

/// Longest-numeric-prefix parse: optional sign, digits, at most one decimal
/// point. Matches the permissive behavior of free-text numeric fields
/// ("12.5/day" parses as 12.5); trailing garbage is ignored, leading
/// garbage fails.
fn lenient_decimal(text: &str) -> Option<Decimal> {
    let trimmed = text.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_point = false;
    for (i, c) in trimmed.char_indices() {
        match c {
            '+' | '-' if i == 0 => end = i + 1,
            '0'..='9' => {
                seen_digit = true;
                end = i + 1;
            }
            '.' if !seen_point => {
                seen_point = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    let prefix = trimmed[..end].trim_end_matches('.');
    // ".5" and "-.5" are valid numeric prefixes; give them an explicit zero.
    let normalized = if let Some(rest) = prefix.strip_prefix('.') {
        format!("0.{rest}")
    } else if let Some(rest) = prefix.strip_prefix("-.") {
        format!("-0.{rest}")
    } else if let Some(rest) = prefix.strip_prefix("+.") {
        format!("0.{rest}")
    } else {
        prefix.trim_start_matches('+').to_string()
    };
    Decimal::from_str(&normalized).ok()
}

/// Compute invoice totals from the work-day list and raw rate texts.
///
/// Pure: no side effects, no rounding — rounding is applied only when the
/// values are formatted for a render target. An empty list yields all-zero
/// totals; negative rates propagate arithmetically.
///
/// In [`CalculationMode::ByDay`] every entry counts toward `unit_count`
/// regardless of its `hours` value or an empty date. In
/// [`CalculationMode::ByHour`] the hours are summed.
pub fn compute(
    mode: CalculationMode,
    work_days: &[WorkDay],
    daily_rate_text: &str,
    hourly_rate_text: &str,
    deduction_rate: Decimal,
) -> InvoiceTotals {
    let (unit_count, unit_rate) = match mode {
        CalculationMode::ByDay => (
            Decimal::from(work_days.len() as u64),
            parse_rate(daily_rate_text),
        ),
        CalculationMode::ByHour => (
            work_days.iter().map(|d| d.hours).sum(),
            parse_rate(hourly_rate_text),
        ),
    };

    let gross = unit_count * unit_rate;
    let deduction = gross * deduction_rate;
    let net = gross - deduction;

    InvoiceTotals {
        unit_count,
        unit_rate,
        gross,
        deduction,
        net,
        deduction_rate,
    }
}
