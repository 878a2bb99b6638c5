//! Wire envelopes for YNAB API responses
//!
//! Successful responses wrap their payload in `{"data": ...}`; failures
//! carry `{"error": {"id", "name", "detail"}}`.

use serde::Deserialize;

use crate::error::PivotError;
use crate::models::Budget;

/// Body of `GET /budgets/{budget_id}`
#[derive(Debug, Deserialize)]
pub struct BudgetResponse {
    pub data: BudgetData,
}

#[derive(Debug, Deserialize)]
pub struct BudgetData {
    pub budget: Budget,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Turn a non-success status and its body into an API error
pub fn api_error(status: u16, body: &str) -> PivotError {
    let detail = match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse { error }) => match error.detail {
            Some(detail) if !detail.is_empty() => format!("{} ({})", detail, error.name),
            _ => format!("{} ({})", error.name, error.id),
        },
        Err(_) => reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("unexpected response")
            .to_string(),
    };

    PivotError::Api { status, detail }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_budget_response() {
        let json = r#"{
            "data": {
                "budget": {
                    "id": "d9c2f3a4-0000-0000-0000-000000000000",
                    "name": "Household",
                    "last_modified_on": "2024-06-01T12:00:00+00:00",
                    "accounts": [],
                    "payees": [],
                    "category_groups": [
                        {
                            "id": "00000000-0000-0000-0000-000000000001",
                            "name": "Housing",
                            "hidden": false,
                            "deleted": false
                        }
                    ],
                    "months": [
                        {
                            "month": "2024-01-01",
                            "income": 100000,
                            "budgeted": 90000,
                            "activity": -80000,
                            "categories": [
                                {
                                    "id": "00000000-0000-0000-0000-000000000002",
                                    "category_group_id": "00000000-0000-0000-0000-000000000001",
                                    "name": "Rent",
                                    "hidden": false,
                                    "budgeted": 90000,
                                    "activity": -80000,
                                    "balance": 10000,
                                    "deleted": false
                                }
                            ]
                        }
                    ]
                },
                "server_knowledge": 42
            }
        }"#;

        let response: BudgetResponse = serde_json::from_str(json).unwrap();
        let budget = response.data.budget;
        assert_eq!(budget.name, "Household");
        assert_eq!(budget.category_groups.len(), 1);
        assert_eq!(budget.months.len(), 1);
        assert_eq!(budget.months[0].categories[0].name, "Rent");
    }

    #[test]
    fn test_api_error_with_detail() {
        let body = r#"{"error": {"id": "401", "name": "unauthorized", "detail": "Unauthorized"}}"#;
        match api_error(401, body) {
            PivotError::Api { status, detail } => {
                assert_eq!(status, 401);
                assert_eq!(detail, "Unauthorized (unauthorized)");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_api_error_without_detail() {
        let body = r#"{"error": {"id": "404.2", "name": "resource_not_found"}}"#;
        let err = api_error(404, body);
        assert_eq!(err.to_string(), "API error (404): resource_not_found (404.2)");
    }

    #[test]
    fn test_api_error_unparseable_body() {
        let err = api_error(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "API error (502): Bad Gateway");
    }
}
