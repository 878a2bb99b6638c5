//! Budget snapshot models
//!
//! A `Budget` is the read-only document returned by the service's
//! "get budget" endpoint, trimmed to the fields the reports use.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::category::{Category, CategoryGroup};
use super::ids::CategoryGroupId;
use super::money::Milliunits;
use super::period::MonthPeriod;

/// A full budget: its category groups and every budget month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Service identifier (a UUID, kept opaque)
    pub id: String,

    /// Budget name
    pub name: String,

    /// All category groups, including hidden and deleted ones
    #[serde(default)]
    pub category_groups: Vec<CategoryGroup>,

    /// Budget months in the order the service returned them
    #[serde(default)]
    pub months: Vec<BudgetMonth>,
}

impl Budget {
    /// Build a lookup from group ID to group
    pub fn group_index(&self) -> HashMap<CategoryGroupId, &CategoryGroup> {
        self.category_groups.iter().map(|g| (g.id, g)).collect()
    }

    /// Months falling in `year`, in service order
    pub fn months_in_year(&self, year: i32) -> impl Iterator<Item = &BudgetMonth> + '_ {
        self.months.iter().filter(move |m| m.period().year() == year)
    }

    /// Months sorted oldest first
    pub fn months_chronological(&self) -> Vec<&BudgetMonth> {
        let mut months: Vec<&BudgetMonth> = self.months.iter().collect();
        months.sort_by_key(|m| m.month);
        months
    }
}

/// Aggregate figures and category snapshots for one budget month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetMonth {
    /// First day of the month
    pub month: NaiveDate,

    /// Income received during the month
    #[serde(default)]
    pub income: Milliunits,

    /// Total assigned across categories
    #[serde(default)]
    pub budgeted: Milliunits,

    /// Net activity across categories
    #[serde(default)]
    pub activity: Milliunits,

    /// Per-category snapshots for the month
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl BudgetMonth {
    /// Create an empty month starting on `month`
    pub fn new(month: NaiveDate) -> Self {
        Self {
            month,
            income: Milliunits::zero(),
            budgeted: Milliunits::zero(),
            activity: Milliunits::zero(),
            categories: Vec::new(),
        }
    }

    pub fn period(&self) -> MonthPeriod {
        MonthPeriod::from_date(self.month)
    }

    /// Categories that are neither deleted nor hidden
    pub fn visible_categories(&self) -> impl Iterator<Item = &Category> + '_ {
        self.categories.iter().filter(|c| c.is_visible())
    }
}
