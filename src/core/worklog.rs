use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::calculator::parse_hours;
use super::types::{CalculationMode, WorkDay};

/// Ordered, mutable work-day list plus the active calculation mode.
///
/// This is the session-owned state the calculator and renderer read from;
/// they never mutate it. List order is whatever the caller arranged (manual
/// reordering included) — nothing here sorts by date.
///
/// All operations degrade silently: out-of-range indices are no-ops and
/// unparsable hour text becomes zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkLog {
    mode: CalculationMode,
    days: Vec<WorkDay>,
}

impl WorkLog {
    pub fn new(mode: CalculationMode) -> Self {
        Self {
            mode,
            days: Vec::new(),
        }
    }

    pub fn mode(&self) -> CalculationMode {
        self.mode
    }

    pub fn days(&self) -> &[WorkDay] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Switch calculation mode. Day and hour datasets are not convertible,
    /// so changing mode clears the list; setting the same mode is a no-op.
    pub fn set_mode(&mut self, mode: CalculationMode) {
        if self.mode != mode {
            self.mode = mode;
            self.days.clear();
        }
    }

    /// Append a single entry as-is. No deduplication: duplicates within an
    /// existing list are allowed; only the bulk path dedupes.
    pub fn push(&mut self, day: WorkDay) {
        self.days.push(day);
    }

    /// Bulk-add calendar dates, skipping any date already present in the
    /// list (blank dates don't block anything) and duplicates within the
    /// batch itself. New entries get the mode-conventional hour count.
    /// Returns how many entries were actually added.
    pub fn add_dates<I, S>(&mut self, dates: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: HashSet<String> = self
            .days
            .iter()
            .filter(|d| !d.date.is_empty())
            .map(|d| d.date.clone())
            .collect();

        let mut added = 0;
        for date in dates {
            let date = date.into();
            if seen.contains(&date) {
                continue;
            }
            seen.insert(date.clone());
            self.days.push(WorkDay::for_mode(date, self.mode));
            added += 1;
        }
        added
    }

    /// Remove the entry at `index`; out-of-range is a no-op.
    pub fn remove(&mut self, index: usize) {
        if index < self.days.len() {
            self.days.remove(index);
        }
    }

    /// Overwrite the date text of the entry at `index`.
    pub fn set_date(&mut self, index: usize, date: impl Into<String>) {
        if let Some(day) = self.days.get_mut(index) {
            day.date = date.into();
        }
    }

    /// Overwrite the hours of the entry at `index` from raw text;
    /// unparsable text becomes zero.
    pub fn set_hours(&mut self, index: usize, text: &str) {
        if let Some(day) = self.days.get_mut(index) {
            day.hours = parse_hours(text);
        }
    }

    /// Move the entry at `from` so it ends up at position `to`, shifting
    /// the entries in between (drag-and-drop splice semantics).
    /// Out-of-range indices or `from == to` are no-ops.
    pub fn move_entry(&mut self, from: usize, to: usize) {
        if from == to || from >= self.days.len() || to >= self.days.len() {
            return;
        }
        let day = self.days.remove(from);
        self.days.insert(to, day);
    }

    /// Remove all entries, keeping the mode.
    pub fn clear(&mut self) {
        self.days.clear();
    }
}
