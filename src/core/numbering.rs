use chrono::{Datelike, Local, NaiveDate};

/// Default invoice number for a session opened on `today`:
/// `INV-` followed by the date in `YYYYMMDD` form, e.g. "INV-20260128".
pub fn default_invoice_number(today: NaiveDate) -> String {
    format!(
        "INV-{:04}{:02}{:02}",
        today.year(),
        today.month(),
        today.day()
    )
}

/// [`default_invoice_number`] for the local clock's current date.
pub fn todays_invoice_number() -> String {
    default_invoice_number(Local::now().date_naive())
}

/// Add `offset` days to an ISO `YYYY-MM-DD` date string.
/// Malformed input yields an empty string rather than an error.
pub fn add_days_iso(start_iso: &str, offset: i64) -> String {
    let Ok(date) = NaiveDate::parse_from_str(start_iso, "%Y-%m-%d") else {
        return String::new();
    };
    match date.checked_add_signed(chrono::Duration::days(offset)) {
        Some(shifted) => shifted.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}
