//! Calendar month periods
//!
//! The service keys every budget month by its first day. `MonthPeriod` is
//! the (year, month) pair behind that date.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
}

impl MonthPeriod {
    /// Create a month period, or `None` if `month` is not 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Get the previous calendar month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// First day of the month, the way the API dates a budget month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start_date().format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_month() {
        assert!(MonthPeriod::new(2024, 0).is_none());
        assert!(MonthPeriod::new(2024, 13).is_none());
        assert!(MonthPeriod::new(2024, 12).is_some());
    }

    #[test]
    fn test_from_date() {
        let period = MonthPeriod::from_date(NaiveDate::from_ymd_opt(2024, 3, 17).unwrap());
        assert_eq!(period.year(), 2024);
        assert_eq!(period.month(), 3);
        assert_eq!(period.to_string(), "2024-03-01");
    }

    #[test]
    fn test_prev_wraps_year() {
        let january = MonthPeriod::new(2024, 1).unwrap();
        assert_eq!(january.prev(), MonthPeriod::new(2023, 12).unwrap());

        let june = MonthPeriod::new(2024, 6).unwrap();
        assert_eq!(june.prev(), MonthPeriod::new(2024, 5).unwrap());
    }

    #[test]
    fn test_ordering() {
        let dec = MonthPeriod::new(2023, 12).unwrap();
        let jan = MonthPeriod::new(2024, 1).unwrap();
        assert!(dec < jan);
    }
}
