//! The Advisor record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::AdvisorId;

use super::health::HealthStatus;

/// A registered advisor.
///
/// Plain data holder; persistence belongs to the repository port. The
/// `sin` is stored as a string so leading zeros survive, and is never
/// touched after creation. `health_status` is assigned once, at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisor {
    pub id: AdvisorId,
    pub full_name: String,
    pub sin: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub health_status: HealthStatus,
}
