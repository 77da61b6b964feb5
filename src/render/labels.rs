//! Static label dictionaries for the on-screen target.
//!
//! Opaque text as far as calculation is concerned; the preview renderer
//! picks a table by [`Language`] and copies the strings into the document.
//! The printable target is intentionally not localized.

use crate::core::Language;

/// One language's label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub company: &'static str,
    pub invoice: &'static str,
    pub client: &'static str,
    pub utr: &'static str,
    pub daily_rate: &'static str,
    pub hourly_rate: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub calc_type: &'static str,
    pub days: &'static str,
    pub hours: &'static str,
    pub work_days: &'static str,
    pub add_multiple: &'static str,
    pub add: &'static str,
    pub clear: &'static str,
    pub close: &'static str,
    pub selected: &'static str,
    pub date: &'static str,
    pub hrs: &'static str,
    /// Deduction label stem; the renderer appends the configured percentage.
    pub cis: &'static str,
    pub gross: &'static str,
    pub net: &'static str,
    pub download: &'static str,
    pub preview: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub period: &'static str,
    pub amount: &'static str,
}

const EN_GB: Labels = Labels {
    title: "CIS Invoice Calculator",
    company: "Company Name",
    invoice: "Invoice Number",
    client: "Client",
    utr: "UTR Number",
    daily_rate: "Daily Rate (£)",
    hourly_rate: "Hourly Rate (£)",
    start: "Start Date",
    end: "End Date",
    calc_type: "Calculation Type",
    days: "Days",
    hours: "Hours",
    work_days: "Work Days",
    add_multiple: "Add Multiple Days",
    add: "Add",
    clear: "Clear",
    close: "Close",
    selected: "Selected",
    date: "Date",
    hrs: "Hours",
    cis: "CIS",
    gross: "Gross",
    net: "Net",
    download: "Download PDF",
    preview: "Invoice Preview",
    from: "From",
    to: "To",
    period: "Period",
    amount: "Amount",
};

const RO: Labels = Labels {
    title: "Calculator Facturi CIS",
    company: "Companie",
    invoice: "Număr Factură",
    client: "Client",
    utr: "UTR",
    daily_rate: "Tarif Zilnic (£)",
    hourly_rate: "Tarif Orar (£)",
    start: "Data Început",
    end: "Data Sfârșit",
    calc_type: "Tip Calcul",
    days: "Zile",
    hours: "Ore",
    work_days: "Zile Lucrate",
    add_multiple: "Adaugă Multiple",
    add: "Adaugă",
    clear: "Șterge",
    close: "Închide",
    selected: "Selectate",
    date: "Data",
    hrs: "Ore",
    cis: "CIS",
    gross: "Brut",
    net: "Net",
    download: "Descarcă PDF",
    preview: "Previzualizare",
    from: "De la",
    to: "Către",
    period: "Perioadă",
    amount: "Suma",
};

impl Labels {
    /// Dictionary for the given language.
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::EnGb => &EN_GB,
            Language::Ro => &RO,
        }
    }
}
