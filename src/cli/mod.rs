//! CLI command handlers
//!
//! This module contains the clap argument definitions shared by every
//! report and the handler bridging them to the report layer.

pub mod report;

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::config::{default_year, ReportSettings};
use crate::error::PivotResult;

pub use report::handle_report_command;

/// Options accepted by every report
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Budget ID (a UUID, "last-used" or "default")
    #[arg(long, env = "YNAB_BUDGET_ID", global = true)]
    pub budget_id: Option<String>,

    /// Personal access token
    #[arg(long, env = "YNAB_ACCESS_TOKEN", global = true, hide_env_values = true)]
    pub access_token: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Year to report on [default: last year]
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Symbol placed before every amount
    #[arg(long, env = "YNAB_CURRENCY_SYMBOL", global = true)]
    pub currency_symbol: Option<String>,

    /// API base URL
    #[arg(long, env = "YNAB_API_URL", global = true, hide = true)]
    pub api_url: Option<String>,
}

impl ReportArgs {
    /// Apply defaults and validate required values
    pub fn resolve(self) -> PivotResult<ReportSettings> {
        let mut settings = ReportSettings::new(
            self.budget_id.as_deref().unwrap_or_default(),
            self.access_token.as_deref().unwrap_or_default(),
        )?
        .with_year(self.year.unwrap_or_else(default_year))
        .with_output(self.output);

        if let Some(symbol) = self.currency_symbol {
            settings = settings.with_currency_symbol(symbol);
        }
        if let Some(url) = self.api_url {
            settings = settings.with_api_url(url);
        }

        Ok(settings)
    }
}

/// Report subcommands; with none, the category pivot runs
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportCommands {
    /// Month-by-month income, allocation and spend for the whole budget
    Accounts,
}

/// The report a run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    CategoryPivot,
    AccountSummary,
}

impl From<Option<ReportCommands>> for ReportKind {
    fn from(command: Option<ReportCommands>) -> Self {
        match command {
            None => Self::CategoryPivot,
            Some(ReportCommands::Accounts) => Self::AccountSummary,
        }
    }
}
