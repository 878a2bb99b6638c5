//! Blocking YNAB API client

use reqwest::blocking::Client;
use tracing::{debug, info};

use super::response::{api_error, BudgetResponse};
use super::BudgetSource;
use crate::config::{AccessToken, ReportSettings};
use crate::error::PivotResult;
use crate::models::Budget;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches budgets over HTTPS with a bearer token
pub struct YnabClient {
    http: Client,
    base_url: String,
    token: AccessToken,
}

impl YnabClient {
    /// Create a client for `base_url` (e.g. `https://api.ynab.com/v1`)
    pub fn new(base_url: impl Into<String>, token: AccessToken) -> PivotResult<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_http(http, base_url, token))
    }

    fn with_http(http: Client, base_url: impl Into<String>, token: AccessToken) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            token,
        }
    }

    /// Create a client from resolved report settings
    pub fn from_settings(settings: &ReportSettings) -> PivotResult<Self> {
        Self::new(settings.api_url.clone(), settings.access_token.clone())
    }

    fn budget_url(&self, budget_id: &str) -> String {
        format!("{}/budgets/{}", self.base_url, budget_id)
    }
}

impl BudgetSource for YnabClient {
    fn fetch_budget(&self, budget_id: &str) -> PivotResult<Budget> {
        let url = self.budget_url(budget_id);
        debug!(%url, "requesting budget");

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.token.expose())
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(api_error(status.as_u16(), &body));
        }

        let envelope: BudgetResponse = response.json()?;
        let budget = envelope.data.budget;
        info!(
            months = budget.months.len(),
            category_groups = budget.category_groups.len(),
            "fetched budget"
        );

        Ok(budget)
    }
}
