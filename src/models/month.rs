//! Calendar month handling for monthly reports

use chrono::{Datelike, Local, Month};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// A month number known to be in 1..=12
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthOfYear(u32);

impl MonthOfYear {
    /// Create a month from its number, if it is in range
    pub fn new(month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self(month))
    }

    /// The month number (1-12)
    pub fn number(self) -> u32 {
        self.0
    }

    /// English month name, e.g. "June"
    pub fn name(self) -> &'static str {
        Month::try_from(self.0 as u8)
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }
}

impl FromStr for MonthOfYear {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ExpenseError::InvalidMonth(trimmed.to_string()))
    }
}

impl fmt::Display for MonthOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A month in a specific year, e.g. "June 2026"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthlyPeriod {
    pub year: i32,
    pub month: MonthOfYear,
}

impl MonthlyPeriod {
    /// Create a period for the given year and month
    pub fn new(year: i32, month: MonthOfYear) -> Self {
        Self { year, month }
    }

    /// The given month of the current local year
    ///
    /// Monthly reports only ever look at the current year.
    pub fn in_current_year(month: MonthOfYear) -> Self {
        Self::new(Local::now().year(), month)
    }
}

impl fmt::Display for MonthlyPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}
