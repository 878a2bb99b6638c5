//! ynab-pivot - yearly tab-separated reports from a YNAB budget
//!
//! This library fetches a budget snapshot from the YNAB API and turns it
//! into spreadsheet-friendly rows: one per category per month for the
//! category pivot, one per month for the budget-level account summary.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Resolved settings and access token handling
//! - `error`: Custom error types
//! - `models`: Budget, month and category snapshot models
//! - `api`: The `BudgetSource` seam and the HTTPS client
//! - `reports`: Category pivot and account summary reports
//! - `cli`: Argument definitions and the report handler
//!
//! # Example
//!
//! ```rust,ignore
//! use ynab_pivot::api::YnabClient;
//! use ynab_pivot::cli::{handle_report_command, ReportKind};
//! use ynab_pivot::config::ReportSettings;
//!
//! let settings = ReportSettings::new("last-used", &token)?.with_year(2024);
//! let client = YnabClient::from_settings(&settings)?;
//! handle_report_command(&client, &settings, ReportKind::CategoryPivot)?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;

pub use error::{PivotError, PivotResult};
