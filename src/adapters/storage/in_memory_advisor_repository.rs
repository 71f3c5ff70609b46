//! In-memory advisor repository adapter.
//!
//! Keyed store backing the registry in development and tests. Each call
//! takes the lock once, so individual operations are atomic, but nothing
//! coordinates a handler's read-modify-write across calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::advisor::Advisor;
use crate::domain::foundation::AdvisorId;
use crate::ports::{AdvisorRepository, StorageError};

/// In-memory keyed store of advisors.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAdvisorRepository {
    advisors: Arc<RwLock<HashMap<AdvisorId, Advisor>>>,
}

impl InMemoryAdvisorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests).
    pub async fn clear(&self) {
        self.advisors.write().await.clear();
    }

    /// Number of stored advisors.
    pub async fn count(&self) -> usize {
        self.advisors.read().await.len()
    }
}

#[async_trait]
impl AdvisorRepository for InMemoryAdvisorRepository {
    async fn insert(&self, advisor: &Advisor) -> Result<(), StorageError> {
        let mut advisors = self.advisors.write().await;
        if advisors.contains_key(&advisor.id) {
            return Err(StorageError::DuplicateId(advisor.id));
        }
        advisors.insert(advisor.id, advisor.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &AdvisorId) -> Result<Option<Advisor>, StorageError> {
        Ok(self.advisors.read().await.get(id).cloned())
    }

    async fn update(&self, advisor: &Advisor) -> Result<(), StorageError> {
        self.advisors
            .write()
            .await
            .insert(advisor.id, advisor.clone());
        Ok(())
    }

    async fn remove(&self, id: &AdvisorId) -> Result<(), StorageError> {
        self.advisors.write().await.remove(id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Advisor>, StorageError> {
        Ok(self.advisors.read().await.values().cloned().collect())
    }
}
