//! Request validation stage.
//!
//! Each request kind has a rule set producing field-level violations.
//! Rules for a field are independent: all of them run, nothing
//! short-circuits, so one pass can report several violations for the
//! same field. The dispatcher aggregates whatever the validators return
//! and refuses to invoke a handler if the list is non-empty.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::AdvisorId;

use super::request::AdvisorRequest;

/// One failed rule: which field, and the message for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}

impl Violation {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Aggregated outcome of a failed validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    violations: Vec<Violation>,
}

impl ValidationFailure {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Messages grouped by field, for transport-level error bodies.
    pub fn by_field(&self) -> BTreeMap<&'static str, Vec<&'static str>> {
        let mut grouped: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
        for violation in &self.violations {
            grouped.entry(violation.field).or_default().push(violation.message);
        }
        grouped
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed with {} violation(s)", self.violations.len())
    }
}

/// A rule set for one request kind.
///
/// Implementations are pure; they read the request and return every
/// violation they find, in declared rule order.
pub trait RequestValidator: Send + Sync {
    fn validate(&self, request: &AdvisorRequest) -> Vec<Violation>;
}

/// Rules for `CreateAdvisor`.
pub struct CreateAdvisorValidator;

impl RequestValidator for CreateAdvisorValidator {
    fn validate(&self, request: &AdvisorRequest) -> Vec<Violation> {
        let AdvisorRequest::Create(cmd) = request else {
            return Vec::new();
        };
        let mut violations = Vec::new();
        full_name_rules(cmd.full_name.as_deref(), &mut violations);
        sin_rules(cmd.sin.as_deref(), &mut violations);
        violations
    }
}

/// Rules for `UpdateAdvisor`.
pub struct UpdateAdvisorValidator;

impl RequestValidator for UpdateAdvisorValidator {
    fn validate(&self, request: &AdvisorRequest) -> Vec<Violation> {
        let AdvisorRequest::Update(cmd) = request else {
            return Vec::new();
        };
        let mut violations = Vec::new();
        optional_id_rules(
            cmd.advisor_id,
            "advisor_id",
            "Advisor Id cannot be Empty.",
            "Advisor Id cannot be null.",
            &mut violations,
        );
        full_name_rules(cmd.full_name.as_deref(), &mut violations);
        sin_rules(cmd.sin.as_deref(), &mut violations);
        violations
    }
}

/// Rules for `DeleteAdvisor`.
pub struct DeleteAdvisorValidator;

impl RequestValidator for DeleteAdvisorValidator {
    fn validate(&self, request: &AdvisorRequest) -> Vec<Violation> {
        let AdvisorRequest::Delete(cmd) = request else {
            return Vec::new();
        };
        let mut violations = Vec::new();
        id_rules(cmd.advisor_id, "advisor_id", "AdvisorId should not be empty.", &mut violations);
        violations
    }
}

/// Rules for `GetAdvisorById`.
pub struct GetAdvisorByIdValidator;

impl RequestValidator for GetAdvisorByIdValidator {
    fn validate(&self, request: &AdvisorRequest) -> Vec<Violation> {
        let AdvisorRequest::GetById(query) = request else {
            return Vec::new();
        };
        let mut violations = Vec::new();
        id_rules(query.advisor_id, "advisor_id", "AdvisorId should not be empty.", &mut violations);
        violations
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Field rules
// ════════════════════════════════════════════════════════════════════════════

fn full_name_rules(value: Option<&str>, out: &mut Vec<Violation>) {
    match value {
        None => {
            out.push(Violation::new("full_name", "Full name is required."));
            out.push(Violation::new("full_name", "Full name cannot be null."));
        }
        Some(name) => {
            if name.trim().is_empty() {
                out.push(Violation::new("full_name", "Full name is required."));
            }
            if name.chars().count() > 255 {
                out.push(Violation::new(
                    "full_name",
                    "Full name must not exceed 255 characters.",
                ));
            }
        }
    }
}

fn sin_rules(value: Option<&str>, out: &mut Vec<Violation>) {
    match value {
        None => {
            out.push(Violation::new("sin", "SIN is required."));
            out.push(Violation::new("sin", "SIN cannot be null."));
            // an absent value does not parse; the length rule is skipped
            out.push(Violation::new("sin", "SIN must be a numeric value."));
        }
        Some(sin) => {
            if sin.trim().is_empty() {
                out.push(Violation::new("sin", "SIN is required."));
            }
            if sin.parse::<i64>().is_err() {
                out.push(Violation::new("sin", "SIN must be a numeric value."));
            }
            if sin.chars().count() != 9 {
                out.push(Violation::new("sin", "SIN should be 9 numbers"));
            }
        }
    }
}

fn optional_id_rules(
    value: Option<AdvisorId>,
    field: &'static str,
    empty_message: &'static str,
    null_message: &'static str,
    out: &mut Vec<Violation>,
) {
    match value {
        None => {
            out.push(Violation::new(field, empty_message));
            out.push(Violation::new(field, null_message));
        }
        Some(id) if id.is_nil() => out.push(Violation::new(field, empty_message)),
        Some(_) => {}
    }
}

fn id_rules(value: AdvisorId, field: &'static str, empty_message: &'static str, out: &mut Vec<Violation>) {
    if value.is_nil() {
        out.push(Violation::new(field, empty_message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::advisor::{
        CreateAdvisorCommand, DeleteAdvisorCommand, GetAdvisorByIdQuery, UpdateAdvisorCommand,
    };

    fn valid_create() -> CreateAdvisorCommand {
        CreateAdvisorCommand {
            full_name: Some("John Doe".to_string()),
            sin: Some("123456789".to_string()),
            address: None,
            phone_number: None,
        }
    }

    fn messages_for<'a>(violations: &'a [Violation], field: &str) -> Vec<&'a str> {
        violations
            .iter()
            .filter(|v| v.field == field)
            .map(|v| v.message)
            .collect()
    }

    #[test]
    fn valid_create_has_no_violations() {
        let request = AdvisorRequest::Create(valid_create());
        assert!(CreateAdvisorValidator.validate(&request).is_empty());
    }

    #[test]
    fn blank_full_name_is_required() {
        let mut cmd = valid_create();
        cmd.full_name = Some(" ".to_string());
        let violations = CreateAdvisorValidator.validate(&AdvisorRequest::Create(cmd));
        assert_eq!(messages_for(&violations, "full_name"), vec!["Full name is required."]);
    }

    #[test]
    fn missing_full_name_fires_required_and_null_rules() {
        let mut cmd = valid_create();
        cmd.full_name = None;
        let violations = CreateAdvisorValidator.validate(&AdvisorRequest::Create(cmd));
        assert_eq!(
            messages_for(&violations, "full_name"),
            vec!["Full name is required.", "Full name cannot be null."]
        );
    }

    #[test]
    fn overlong_full_name_is_rejected() {
        let mut cmd = valid_create();
        cmd.full_name = Some("a".repeat(256));
        let violations = CreateAdvisorValidator.validate(&AdvisorRequest::Create(cmd));
        assert_eq!(
            messages_for(&violations, "full_name"),
            vec!["Full name must not exceed 255 characters."]
        );
    }

    #[test]
    fn full_name_of_exactly_255_chars_passes() {
        let mut cmd = valid_create();
        cmd.full_name = Some("a".repeat(255));
        let violations = CreateAdvisorValidator.validate(&AdvisorRequest::Create(cmd));
        assert!(messages_for(&violations, "full_name").is_empty());
    }

    #[test]
    fn empty_sin_accumulates_every_applicable_rule() {
        let mut cmd = valid_create();
        cmd.sin = Some(String::new());
        let violations = CreateAdvisorValidator.validate(&AdvisorRequest::Create(cmd));
        assert_eq!(
            messages_for(&violations, "sin"),
            vec![
                "SIN is required.",
                "SIN must be a numeric value.",
                "SIN should be 9 numbers",
            ]
        );
    }

    #[test]
    fn missing_sin_fires_required_null_and_numeric_rules() {
        let mut cmd = valid_create();
        cmd.sin = None;
        let violations = CreateAdvisorValidator.validate(&AdvisorRequest::Create(cmd));
        assert_eq!(
            messages_for(&violations, "sin"),
            vec![
                "SIN is required.",
                "SIN cannot be null.",
                "SIN must be a numeric value.",
            ]
        );
    }

    #[test]
    fn non_numeric_sin_is_rejected() {
        let mut cmd = valid_create();
        cmd.sin = Some("ABC123456".to_string());
        let violations = CreateAdvisorValidator.validate(&AdvisorRequest::Create(cmd));
        assert_eq!(
            messages_for(&violations, "sin"),
            vec!["SIN must be a numeric value."]
        );
    }

    #[test]
    fn wrong_length_sin_is_rejected() {
        let mut cmd = valid_create();
        cmd.sin = Some("1234567".to_string());
        let violations = CreateAdvisorValidator.validate(&AdvisorRequest::Create(cmd));
        assert_eq!(messages_for(&violations, "sin"), vec!["SIN should be 9 numbers"]);
    }

    #[test]
    fn sin_with_leading_zeros_passes() {
        let mut cmd = valid_create();
        cmd.sin = Some("046454286".to_string());
        let violations = CreateAdvisorValidator.validate(&AdvisorRequest::Create(cmd));
        assert!(messages_for(&violations, "sin").is_empty());
    }

    #[test]
    fn create_reports_violations_for_every_field_at_once() {
        let cmd = CreateAdvisorCommand {
            full_name: Some(String::new()),
            sin: Some("12".to_string()),
            address: None,
            phone_number: None,
        };
        let violations = CreateAdvisorValidator.validate(&AdvisorRequest::Create(cmd));
        assert!(!messages_for(&violations, "full_name").is_empty());
        assert!(!messages_for(&violations, "sin").is_empty());
    }

    #[test]
    fn update_rejects_nil_advisor_id() {
        let cmd = UpdateAdvisorCommand {
            advisor_id: Some(AdvisorId::nil()),
            full_name: Some("Jane Doe".to_string()),
            sin: Some("123456789".to_string()),
            address: None,
            phone_number: None,
        };
        let violations = UpdateAdvisorValidator.validate(&AdvisorRequest::Update(cmd));
        assert_eq!(
            messages_for(&violations, "advisor_id"),
            vec!["Advisor Id cannot be Empty."]
        );
    }

    #[test]
    fn update_rejects_missing_advisor_id_with_both_rules() {
        let cmd = UpdateAdvisorCommand {
            advisor_id: None,
            full_name: Some("Jane Doe".to_string()),
            sin: Some("123456789".to_string()),
            address: None,
            phone_number: None,
        };
        let violations = UpdateAdvisorValidator.validate(&AdvisorRequest::Update(cmd));
        assert_eq!(
            messages_for(&violations, "advisor_id"),
            vec!["Advisor Id cannot be Empty.", "Advisor Id cannot be null."]
        );
    }

    #[test]
    fn update_applies_the_create_field_rules() {
        let cmd = UpdateAdvisorCommand {
            advisor_id: Some(AdvisorId::new()),
            full_name: Some(String::new()),
            sin: Some("bad".to_string()),
            address: None,
            phone_number: None,
        };
        let violations = UpdateAdvisorValidator.validate(&AdvisorRequest::Update(cmd));
        assert!(!messages_for(&violations, "full_name").is_empty());
        assert!(!messages_for(&violations, "sin").is_empty());
    }

    #[test]
    fn delete_rejects_nil_advisor_id() {
        let cmd = DeleteAdvisorCommand {
            advisor_id: AdvisorId::nil(),
        };
        let violations = DeleteAdvisorValidator.validate(&AdvisorRequest::Delete(cmd));
        assert_eq!(
            messages_for(&violations, "advisor_id"),
            vec!["AdvisorId should not be empty."]
        );
    }

    #[test]
    fn get_by_id_rejects_nil_advisor_id() {
        let query = GetAdvisorByIdQuery {
            advisor_id: AdvisorId::nil(),
        };
        let violations = GetAdvisorByIdValidator.validate(&AdvisorRequest::GetById(query));
        assert_eq!(
            messages_for(&violations, "advisor_id"),
            vec!["AdvisorId should not be empty."]
        );
    }

    #[test]
    fn by_field_groups_messages() {
        let failure = ValidationFailure::new(vec![
            Violation::new("sin", "SIN is required."),
            Violation::new("sin", "SIN should be 9 numbers"),
            Violation::new("full_name", "Full name is required."),
        ]);
        let grouped = failure.by_field();
        assert_eq!(grouped["sin"].len(), 2);
        assert_eq!(grouped["full_name"], vec!["Full name is required."]);
    }
}
