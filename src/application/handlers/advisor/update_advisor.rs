//! UpdateAdvisorHandler - command handler for editing advisor contact data.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::AdvisorId;
use crate::ports::{AdvisorRepository, StorageError};

/// Command to update an advisor.
///
/// Carries `sin` because the wire request does, and the validation stage
/// checks it; the handler never writes it back. `id` and `health_status`
/// are likewise untouchable through this path.
#[derive(Debug, Clone)]
pub struct UpdateAdvisorCommand {
    pub advisor_id: Option<AdvisorId>,
    pub full_name: Option<String>,
    pub sin: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

/// Handler for updating advisors. Returns `false` when the id is unknown.
pub struct UpdateAdvisorHandler {
    repository: Arc<dyn AdvisorRepository>,
}

impl UpdateAdvisorHandler {
    pub fn new(repository: Arc<dyn AdvisorRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateAdvisorCommand) -> Result<bool, StorageError> {
        let Some(advisor_id) = cmd.advisor_id else {
            return Ok(false);
        };

        let Some(mut advisor) = self.repository.find_by_id(&advisor_id).await? else {
            return Ok(false);
        };

        advisor.full_name = cmd.full_name.unwrap_or_default();
        advisor.address = cmd.address;
        advisor.phone_number = cmd.phone_number;

        self.repository.update(&advisor).await?;

        info!(advisor_id = %advisor_id, "advisor updated");

        Ok(true)
    }
}
