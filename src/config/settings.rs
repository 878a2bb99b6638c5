//! Resolved report settings
//!
//! Flags and environment variables are merged by clap; this module applies
//! defaults and rejects an empty budget ID or access token before anything
//! touches the network.

use chrono::Datelike;
use std::path::PathBuf;

use super::secret::AccessToken;
use crate::error::{PivotError, PivotResult};

/// Base URL of the YNAB REST API
pub const DEFAULT_API_URL: &str = "https://api.ynab.com/v1";

/// Settings for a single report run
#[derive(Debug, Clone)]
pub struct ReportSettings {
    /// Budget to fetch (UUID, `last-used` or `default`)
    pub budget_id: String,

    /// Personal access token sent as a bearer credential
    pub access_token: AccessToken,

    /// Calendar year to report on
    pub year: i32,

    /// Output file; stdout when unset
    pub output: Option<PathBuf>,

    /// Prefix placed on every amount (empty by default)
    pub currency_symbol: String,

    /// API base URL
    pub api_url: String,
}

/// The year reports default to: the previous calendar year
pub fn default_year() -> i32 {
    chrono::Local::now().year() - 1
}

impl ReportSettings {
    /// Create settings from the two required values
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either value is empty.
    pub fn new(budget_id: &str, access_token: &str) -> PivotResult<Self> {
        let budget_id = budget_id.trim();
        let access_token = access_token.trim();

        if budget_id.is_empty() || access_token.is_empty() {
            return Err(PivotError::Config(
                "--budget-id and --access-token are required".into(),
            ));
        }

        Ok(Self {
            budget_id: budget_id.to_string(),
            access_token: AccessToken::new(access_token),
            year: default_year(),
            output: None,
            currency_symbol: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
        })
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Override the API base URL; a trailing slash is dropped
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.api_url = url.trim_end_matches('/').to_string();
        self
    }
}
