//! Access to the remote budgeting service
//!
//! Reports only need one capability from the service: fetch a budget by
//! ID. `BudgetSource` is that seam; `YnabClient` is the HTTPS
//! implementation.

pub mod client;
pub mod response;

pub use client::YnabClient;

use crate::error::PivotResult;
use crate::models::Budget;

/// Something that can produce a full budget snapshot
pub trait BudgetSource {
    /// Fetch the budget identified by `budget_id`
    fn fetch_budget(&self, budget_id: &str) -> PivotResult<Budget>;
}
