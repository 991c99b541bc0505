use crate::constants::season::{DEFAULT_START_MONTH, DEFAULT_START_YEAR};
use crate::error::AppError;
use chrono::NaiveDate;

/// Calendar span of a season that crosses New Year.
///
/// Months from `start_month` onwards belong to `start_year`, earlier months
/// to the following year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonWindow {
    pub start_year: i32,
    pub start_month: u32,
}

impl Default for SeasonWindow {
    fn default() -> Self {
        Self {
            start_year: DEFAULT_START_YEAR,
            start_month: DEFAULT_START_MONTH,
        }
    }
}

impl SeasonWindow {
    pub fn new(start_year: i32, start_month: u32) -> Self {
        Self {
            start_year,
            start_month,
        }
    }

    pub fn year_for_month(&self, month: u32) -> i32 {
        if month >= self.start_month {
            self.start_year
        } else {
            self.start_year + 1
        }
    }

    /// Resolves a `DD.MM` match day into a full date within this season.
    ///
    /// The export stores the day as a decimal number, so October arrives as
    /// `"12.1"`. A bare `"1"` month is therefore read as 10; January is
    /// always written `"01"`.
    pub fn resolve_match_date(&self, day_month: &str) -> Result<NaiveDate, AppError> {
        let (day, month) = day_month.trim().split_once('.').ok_or_else(|| {
            AppError::datetime_parse_error(format!("Expected DD.MM, got '{day_month}'"))
        })?;

        let month = if month == "1" { "10" } else { month };

        let day: u32 = day.parse().map_err(|_| {
            AppError::datetime_parse_error(format!("Invalid day in '{day_month}'"))
        })?;
        let month: u32 = month.parse().map_err(|_| {
            AppError::datetime_parse_error(format!("Invalid month in '{day_month}'"))
        })?;

        NaiveDate::from_ymd_opt(self.year_for_month(month), month, day).ok_or_else(|| {
            AppError::datetime_parse_error(format!("Date '{day_month}' does not exist"))
        })
    }
}
