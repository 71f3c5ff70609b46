//! GetAdvisorByIdHandler - query handler for a single masked advisor.

use std::sync::Arc;

use crate::domain::foundation::AdvisorId;
use crate::ports::{AdvisorRepository, StorageError};

use super::AdvisorView;

/// Query for one advisor by id.
#[derive(Debug, Clone, Copy)]
pub struct GetAdvisorByIdQuery {
    pub advisor_id: AdvisorId,
}

/// Handler returning the masked projection of one advisor.
pub struct GetAdvisorByIdHandler {
    repository: Arc<dyn AdvisorRepository>,
}

impl GetAdvisorByIdHandler {
    pub fn new(repository: Arc<dyn AdvisorRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetAdvisorByIdQuery,
    ) -> Result<Option<AdvisorView>, StorageError> {
        let advisor = self.repository.find_by_id(&query.advisor_id).await?;
        Ok(advisor.map(|a| AdvisorView::masked(&a)))
    }
}
