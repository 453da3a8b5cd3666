use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};

const LABEL_FORMAT: &str = "%d.%m.%Y";

/// Inclusive date range a journal entry or prompt refers to.
///
/// The two ends are kept as entered, even when `from` lies after `to`.
/// Callers check [`ReportingPeriod::is_inverted`] and warn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingPeriod {
    from: NaiveDate,
    to: NaiveDate,
}

impl ReportingPeriod {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self { from: day, to: day }
    }

    /// Monday of the week containing `today`, through `today`.
    pub fn current_week(today: NaiveDate) -> Self {
        let offset = i64::from(today.weekday().num_days_from_monday());
        Self {
            from: today - Duration::days(offset),
            to: today,
        }
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    pub fn is_inverted(&self) -> bool {
        self.from > self.to
    }

    /// `DD.MM.YYYY`, or `DD.MM.YYYY – DD.MM.YYYY` when the range spans days.
    pub fn label(&self) -> String {
        if self.from == self.to {
            return self.from.format(LABEL_FORMAT).to_string();
        }
        format!(
            "{} – {}",
            self.from.format(LABEL_FORMAT),
            self.to.format(LABEL_FORMAT)
        )
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
