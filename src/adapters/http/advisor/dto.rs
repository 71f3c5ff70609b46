//! HTTP DTOs for advisor endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing
//! independent evolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::handlers::advisor::AdvisorView;
use crate::application::validation::ValidationFailure;
use crate::domain::advisor::HealthStatus;
use crate::domain::foundation::AdvisorId;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to register a new advisor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdvisorRequestBody {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub sin: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Request to update an advisor.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAdvisorRequestBody {
    #[serde(default)]
    pub advisor_id: Option<AdvisorId>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub sin: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a successful creation.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisorCreatedResponse {
    pub advisor_id: String,
    pub message: String,
}

/// Response for accepted update/delete commands.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisorCommandResponse {
    pub message: String,
}

/// Masked advisor view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisorResponse {
    pub advisor_id: String,
    pub full_name: String,
    pub sin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub health_status: HealthStatus,
}

impl From<AdvisorView> for AdvisorResponse {
    fn from(view: AdvisorView) -> Self {
        Self {
            advisor_id: view.advisor_id.to_string(),
            full_name: view.full_name,
            sin: view.sin,
            address: view.address,
            phone_number: view.phone_number,
            health_status: view.health_status,
        }
    }
}

/// Problem body for an aggregated validation failure, messages grouped
/// by field.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationProblemResponse {
    pub detail: String,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationProblemResponse {
    pub fn from_failure(failure: &ValidationFailure) -> Self {
        let errors = failure
            .by_field()
            .into_iter()
            .map(|(field, messages)| {
                (
                    field.to_string(),
                    messages.into_iter().map(str::to_string).collect(),
                )
            })
            .collect();
        Self {
            detail: "One or more validation failures occurred.".to_string(),
            errors,
        }
    }
}

/// Generic error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::validation::Violation;
    use serde_json::json;

    #[test]
    fn create_request_deserializes_with_missing_fields() {
        let body: CreateAdvisorRequestBody =
            serde_json::from_value(json!({"full_name": "John Doe"})).unwrap();
        assert_eq!(body.full_name.as_deref(), Some("John Doe"));
        assert_eq!(body.sin, None);
    }

    #[test]
    fn update_request_accepts_null_advisor_id() {
        let body: UpdateAdvisorRequestBody = serde_json::from_value(json!({
            "advisor_id": null,
            "full_name": "Jane Doe",
            "sin": "123456789"
        }))
        .unwrap();
        assert_eq!(body.advisor_id, None);
    }

    #[test]
    fn advisor_response_serializes_health_status_as_name() {
        let view = AdvisorView {
            advisor_id: AdvisorId::new(),
            full_name: "John Doe".to_string(),
            sin: "******789".to_string(),
            address: None,
            phone_number: None,
            health_status: HealthStatus::Red,
        };
        let response: AdvisorResponse = view.into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["health_status"], "Red");
        assert_eq!(json["sin"], "******789");
        assert!(json.get("address").is_none());
    }

    #[test]
    fn validation_problem_groups_messages_by_field() {
        let failure = ValidationFailure::new(vec![
            Violation::new("sin", "SIN is required."),
            Violation::new("sin", "SIN should be 9 numbers"),
        ]);
        let problem = ValidationProblemResponse::from_failure(&failure);
        assert_eq!(problem.errors["sin"].len(), 2);
    }
}
