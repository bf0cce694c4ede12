//! Inclusive date ranges for filtering the job board

use std::fmt;

use chrono::NaiveDate;
use workboard_core::STORE_DATE_FORMAT;

/// Parse a date cell as the store displays it (`YYYY/MM/DD`)
///
/// Surrounding whitespace is ignored. Anything else, including ISO dates
/// with dashes, is unparsable and never matches a range.
pub fn parse_store_date(cell: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(cell.trim(), STORE_DATE_FORMAT).ok()
}

/// An inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Range between two dates, in either order
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// A one-day range
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether a stored date cell falls in range; unparsable cells never do
    pub fn contains_cell(&self, cell: &str) -> bool {
        parse_store_date(cell).is_some_and(|d| self.contains(d))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
