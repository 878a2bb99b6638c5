//! Category Pivot Report
//!
//! One row per visible category per month of the target year, ready to be
//! pasted into a spreadsheet pivot table.

use chrono::NaiveDate;
use std::io::Write;

use super::tsv_field;
use crate::error::{PivotError, PivotResult};
use crate::models::{Budget, Milliunits};

/// One month/category cell of the pivot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotRow {
    /// First day of the budget month
    pub month: NaiveDate,
    /// Name of the category's group
    pub group_name: String,
    /// Category name
    pub category_name: String,
    /// Category activity for the month
    pub activity: Milliunits,
}

/// Category Pivot Report
#[derive(Debug, Clone)]
pub struct CategoryPivotReport {
    /// Year the report covers
    pub year: i32,
    /// Rows in budget month order, categories in service order
    pub rows: Vec<PivotRow>,
}

impl CategoryPivotReport {
    /// Generate the pivot for `year`
    ///
    /// # Errors
    ///
    /// Returns a not-found error if a reported category names a group the
    /// budget does not contain.
    pub fn generate(budget: &Budget, year: i32) -> PivotResult<Self> {
        let groups = budget.group_index();
        let mut rows = Vec::new();

        for month in budget.months_in_year(year) {
            for category in month.visible_categories() {
                let group = groups.get(&category.category_group_id).ok_or_else(|| {
                    PivotError::category_group_not_found(category.category_group_id.to_string())
                })?;

                rows.push(PivotRow {
                    month: month.month,
                    group_name: group.name.clone(),
                    category_name: category.name.clone(),
                    activity: category.activity,
                });
            }
        }

        Ok(Self { year, rows })
    }

    /// Write the rows as tab-separated lines
    pub fn export_tsv<W: Write>(&self, writer: &mut W, currency_symbol: &str) -> PivotResult<()> {
        for row in &self.rows {
            writeln!(
                writer,
                "{}\t{}\t{}\t{}",
                row.month.format("%Y-%m-%d"),
                tsv_field(&row.group_name),
                tsv_field(&row.category_name),
                row.activity.format_with_symbol(currency_symbol)
            )?;
        }

        Ok(())
    }
}
