//! Account Summary Report
//!
//! Budget-level view of living on last month's income: for each month of the
//! target year, what the previous month earned against what this month
//! allocated and spent.

use std::collections::HashMap;
use std::io::Write;
use tracing::warn;

use crate::error::PivotResult;
use crate::models::{Budget, Milliunits, MonthPeriod};

/// One month of the summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummaryRow {
    /// The month whose income funds this month
    pub income_month: MonthPeriod,
    /// Income earned in `income_month`
    pub income: Milliunits,
    /// The reported month
    pub month: MonthPeriod,
    /// Amount budgeted in `month`
    pub budgeted: Milliunits,
    /// Activity in `month`
    pub activity: Milliunits,
}

impl AccountSummaryRow {
    /// Income left unallocated (negative when over-allocated)
    pub fn difference(&self) -> Milliunits {
        self.income - self.budgeted
    }
}

/// Account Summary Report
#[derive(Debug, Clone)]
pub struct AccountSummaryReport {
    /// Year the report covers
    pub year: i32,
    /// Rows in chronological order
    pub rows: Vec<AccountSummaryRow>,
}

impl AccountSummaryReport {
    /// Generate the summary for `year`
    pub fn generate(budget: &Budget, year: i32) -> PivotResult<Self> {
        let months = budget.months_chronological();
        let income_by_period: HashMap<MonthPeriod, Milliunits> =
            months.iter().map(|m| (m.period(), m.income)).collect();

        let mut rows = Vec::new();
        for month in months.iter().filter(|m| m.period().year() == year) {
            let period = month.period();
            let income_month = period.prev();
            let income = match income_by_period.get(&income_month) {
                Some(income) => *income,
                None => {
                    warn!(
                        month = %period,
                        missing = %income_month,
                        "previous month not in budget, income taken as zero"
                    );
                    Milliunits::zero()
                }
            };

            rows.push(AccountSummaryRow {
                income_month,
                income,
                month: period,
                budgeted: month.budgeted,
                activity: month.activity,
            });
        }

        Ok(Self { year, rows })
    }

    /// Write the rows as tab-separated lines
    ///
    /// Columns: income month, income, month, budgeted, difference, activity.
    pub fn export_tsv<W: Write>(&self, writer: &mut W, currency_symbol: &str) -> PivotResult<()> {
        for row in &self.rows {
            writeln!(
                writer,
                "{}\t{}\t{}\t{}\t{}\t{}",
                row.income_month,
                row.income.format_with_symbol(currency_symbol),
                row.month,
                row.budgeted.format_with_symbol(currency_symbol),
                row.difference().format_with_symbol(currency_symbol),
                row.activity.format_with_symbol(currency_symbol)
            )?;
        }

        Ok(())
    }
}
