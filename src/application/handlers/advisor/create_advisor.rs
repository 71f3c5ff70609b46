//! CreateAdvisorHandler - command handler for registering new advisors.

use std::sync::Arc;

use tracing::info;

use crate::domain::advisor::{Advisor, HealthStatus};
use crate::domain::foundation::AdvisorId;
use crate::ports::{AdvisorRepository, HealthScorer, StorageError};

/// Command to register a new advisor.
///
/// Optional fields mirror the wire format: `None` means the caller sent
/// null or nothing at all, which the validation stage reports before this
/// handler ever runs.
#[derive(Debug, Clone)]
pub struct CreateAdvisorCommand {
    pub full_name: Option<String>,
    pub sin: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

/// Result of successful advisor creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateAdvisorResult {
    pub advisor_id: AdvisorId,
}

/// Handler for creating advisors.
pub struct CreateAdvisorHandler {
    repository: Arc<dyn AdvisorRepository>,
    scorer: Arc<dyn HealthScorer>,
}

impl CreateAdvisorHandler {
    pub fn new(repository: Arc<dyn AdvisorRepository>, scorer: Arc<dyn HealthScorer>) -> Self {
        Self { repository, scorer }
    }

    pub async fn handle(
        &self,
        cmd: CreateAdvisorCommand,
    ) -> Result<CreateAdvisorResult, StorageError> {
        let advisor = Advisor {
            id: AdvisorId::new(),
            full_name: cmd.full_name.unwrap_or_default(),
            sin: cmd.sin.unwrap_or_default(),
            address: cmd.address,
            phone_number: cmd.phone_number,
            health_status: HealthStatus::from_score(self.scorer.draw()),
        };

        self.repository.insert(&advisor).await?;

        info!(advisor_id = %advisor.id, health_status = %advisor.health_status, "advisor created");

        Ok(CreateAdvisorResult {
            advisor_id: advisor.id,
        })
    }
}
