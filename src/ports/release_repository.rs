//! Release repository port.
//!
//! Defines the contract for persisting and querying Release aggregates.
//! Implementations handle the actual storage operations.
//!
//! # Design
//!
//! - **Storage assigns ids**: `insert` takes an unsaved [`NewRelease`]
//! - **Filter-driven search**: `find_all` evaluates a [`ReleaseFilter`]
//! - **Deterministic order**: every listing is ordered by id ascending

use crate::domain::foundation::{DomainError, ReleaseId};
use crate::domain::release::{NewRelease, Release, ReleaseFilter};
use async_trait::async_trait;

/// Repository port for Release aggregate persistence.
///
/// Same-release races are last-write-wins; implementations need not
/// serialize concurrent updates.
#[async_trait]
pub trait ReleaseRepository: Send + Sync {
    /// Find a release by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: ReleaseId) -> Result<Option<Release>, DomainError>;

    /// Insert a new release and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, release: &NewRelease) -> Result<Release, DomainError>;

    /// Update an existing release.
    ///
    /// # Errors
    ///
    /// - `ReleaseNotFound` if the release no longer exists
    /// - `DatabaseError` on persistence failure
    async fn update(&self, release: &Release) -> Result<Release, DomainError>;

    /// Check if a release exists.
    async fn exists_by_id(&self, id: ReleaseId) -> Result<bool, DomainError>;

    /// Delete a release permanently.
    ///
    /// # Errors
    ///
    /// - `ReleaseNotFound` if the release doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete_by_id(&self, id: ReleaseId) -> Result<(), DomainError>;

    /// All releases matching the filter, ordered by id ascending.
    async fn find_all(&self, filter: &ReleaseFilter) -> Result<Vec<Release>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn release_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ReleaseRepository) {}
    }
}
