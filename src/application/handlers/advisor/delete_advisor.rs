//! DeleteAdvisorHandler - command handler for removing advisors.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::AdvisorId;
use crate::ports::{AdvisorRepository, StorageError};

/// Command to delete an advisor.
#[derive(Debug, Clone, Copy)]
pub struct DeleteAdvisorCommand {
    pub advisor_id: AdvisorId,
}

/// Handler for deleting advisors. Returns `false` when the id is unknown.
pub struct DeleteAdvisorHandler {
    repository: Arc<dyn AdvisorRepository>,
}

impl DeleteAdvisorHandler {
    pub fn new(repository: Arc<dyn AdvisorRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteAdvisorCommand) -> Result<bool, StorageError> {
        if self.repository.find_by_id(&cmd.advisor_id).await?.is_none() {
            return Ok(false);
        }

        self.repository.remove(&cmd.advisor_id).await?;

        info!(advisor_id = %cmd.advisor_id, "advisor deleted");

        Ok(true)
    }
}
