//! Core data models for ynab-pivot
//!
//! This module contains the read-only budget snapshot as delivered by the
//! budgeting service: the budget, its months, category groups and
//! per-month category figures.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;

pub use budget::{Budget, BudgetMonth};
pub use category::{Category, CategoryGroup};
pub use ids::{CategoryGroupId, CategoryId};
pub use money::Milliunits;
pub use period::MonthPeriod;
