//! Advisor repository port.
//!
//! Defines the storage capability consumed by the request handlers.
//! Every call commits before returning; there is no transaction API, so
//! a handler's read-modify-write is last-writer-wins under concurrency.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::advisor::Advisor;
use crate::domain::foundation::AdvisorId;

/// Failures surfaced by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("advisor {0} already exists")]
    DuplicateId(AdvisorId),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Repository port for advisor persistence.
///
/// Implementations must keep `AdvisorId` unique across live records and
/// make each call atomic on its own.
#[async_trait]
pub trait AdvisorRepository: Send + Sync {
    /// Insert a new advisor.
    ///
    /// # Errors
    ///
    /// - `DuplicateId` if the id is already present
    /// - `Backend` on persistence failure
    async fn insert(&self, advisor: &Advisor) -> Result<(), StorageError>;

    /// Find an advisor by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &AdvisorId) -> Result<Option<Advisor>, StorageError>;

    /// Write back a modified advisor.
    async fn update(&self, advisor: &Advisor) -> Result<(), StorageError>;

    /// Remove an advisor. Removing an absent id is not an error.
    async fn remove(&self, id: &AdvisorId) -> Result<(), StorageError>;

    /// Every stored advisor, in whatever order the backend yields.
    async fn list_all(&self) -> Result<Vec<Advisor>, StorageError>;
}
