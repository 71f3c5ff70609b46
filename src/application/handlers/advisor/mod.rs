//! Advisor command and query handlers.

mod create_advisor;
mod delete_advisor;
mod get_advisor_by_id;
mod list_advisors;
mod update_advisor;

pub use create_advisor::{CreateAdvisorCommand, CreateAdvisorHandler, CreateAdvisorResult};
pub use delete_advisor::{DeleteAdvisorCommand, DeleteAdvisorHandler};
pub use get_advisor_by_id::{GetAdvisorByIdHandler, GetAdvisorByIdQuery};
pub use list_advisors::{ListAdvisorsHandler, ListAdvisorsQuery};
pub use update_advisor::{UpdateAdvisorCommand, UpdateAdvisorHandler};

use crate::domain::advisor::{mask_phone, mask_sin, Advisor, HealthStatus};
use crate::domain::foundation::AdvisorId;

/// Display-safe projection of an advisor.
///
/// Built fresh on every read; `sin` and `phone_number` pass through the
/// masking transform, everything else is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorView {
    pub advisor_id: AdvisorId,
    pub full_name: String,
    pub sin: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub health_status: HealthStatus,
}

impl AdvisorView {
    pub fn masked(advisor: &Advisor) -> Self {
        Self {
            advisor_id: advisor.id,
            full_name: advisor.full_name.clone(),
            sin: mask_sin(&advisor.sin),
            address: advisor.address.clone(),
            phone_number: mask_phone(advisor.phone_number.as_deref()),
            health_status: advisor.health_status,
        }
    }
}
