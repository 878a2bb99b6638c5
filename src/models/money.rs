//! Milliunit amounts as reported by the budgeting service
//!
//! YNAB stores every currency amount as an integer number of milliunits
//! (currency × 1000). Amounts stay integral until they are formatted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

/// A currency amount in milliunits (thousandths of the currency unit)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Milliunits(i64);

impl Milliunits {
    /// Create an amount from a raw milliunit value
    ///
    /// # Examples
    /// ```
    /// use ynab_pivot::models::Milliunits;
    /// let amount = Milliunits::new(12_340); // 12.34
    /// assert_eq!(amount.to_string(), "12.34");
    /// ```
    pub const fn new(milliunits: i64) -> Self {
        Self(milliunits)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw milliunit value
    pub const fn milliunits(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Whole cents, rounded half away from zero
    pub fn cents(&self) -> i64 {
        let cents = ((self.0.unsigned_abs() + 5) / 10) as i64;
        if self.0 < 0 {
            -cents
        } else {
            cents
        }
    }

    /// Format with a currency symbol placed after the sign
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let cents = self.cents();
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.unsigned_abs();
        format!("{}{}{}.{:02}", sign, symbol, cents / 100, cents % 100)
    }
}

impl fmt::Display for Milliunits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(""))
    }
}

impl Sub for Milliunits {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}
