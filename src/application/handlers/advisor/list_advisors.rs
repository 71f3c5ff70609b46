//! ListAdvisorsHandler - query handler for the masked advisor listing.

use std::sync::Arc;

use crate::ports::{AdvisorRepository, StorageError};

use super::AdvisorView;

/// Query for every advisor. Carries no parameters; the projection has no
/// filtering or pagination, and order is whatever storage yields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListAdvisorsQuery;

/// Handler returning the masked projection of every stored advisor.
pub struct ListAdvisorsHandler {
    repository: Arc<dyn AdvisorRepository>,
}

impl ListAdvisorsHandler {
    pub fn new(repository: Arc<dyn AdvisorRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, _query: ListAdvisorsQuery) -> Result<Vec<AdvisorView>, StorageError> {
        let advisors = self.repository.list_all().await?;
        Ok(advisors.iter().map(AdvisorView::masked).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::advisor::testing::MockAdvisorRepository;
    use crate::domain::advisor::HealthStatus;

    #[tokio::test]
    async fn empty_store_yields_an_empty_list() {
        let repo = Arc::new(MockAdvisorRepository::new());
        let handler = ListAdvisorsHandler::new(repo);

        let views = handler.handle(ListAdvisorsQuery).await.unwrap();

        assert!(views.is_empty());
    }

    #[tokio::test]
    async fn masks_every_listed_advisor() {
        let repo = Arc::new(MockAdvisorRepository::new());
        repo.seed("John Doe", "123456789", HealthStatus::Green).await;
        repo.seed("Jane Doe", "987654321", HealthStatus::Red).await;
        let handler = ListAdvisorsHandler::new(repo);

        let mut views = handler.handle(ListAdvisorsQuery).await.unwrap();
        views.sort_by(|a, b| a.full_name.cmp(&b.full_name));

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].sin, "******321");
        assert_eq!(views[1].sin, "******789");
    }
}
