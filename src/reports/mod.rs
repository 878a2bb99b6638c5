//! Reports module for ynab-pivot
//!
//! Provides the yearly category pivot and the budget-level account summary.
//! Both write tab-separated rows without a header.

pub mod account_summary;
pub mod pivot;

#[cfg(test)]
pub(crate) mod fixtures;

pub use account_summary::{AccountSummaryReport, AccountSummaryRow};
pub use pivot::{CategoryPivotReport, PivotRow};

/// Replace characters that would break a tab-separated row
pub(crate) fn tsv_field(value: &str) -> std::borrow::Cow<'_, str> {
    let is_separator = |c: char| matches!(c, '\t' | '\n' | '\r');
    if value.contains(is_separator) {
        value.replace(is_separator, " ").into()
    } else {
        value.into()
    }
}
