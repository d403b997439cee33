//! GetReleaseHandler - Query handler for a single release.

use std::sync::Arc;

use crate::domain::foundation::ReleaseId;
use crate::domain::release::{Release, ReleaseError};
use crate::ports::ReleaseRepository;

/// Query to get a release by id.
#[derive(Debug, Clone, Copy)]
pub struct GetReleaseQuery {
    pub release_id: ReleaseId,
}

/// Handler for retrieving a release.
pub struct GetReleaseHandler {
    repository: Arc<dyn ReleaseRepository>,
}

impl GetReleaseHandler {
    pub fn new(repository: Arc<dyn ReleaseRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetReleaseQuery) -> Result<Release, ReleaseError> {
        tracing::info!("Fetching release with id={}", query.release_id);

        self.repository
            .find_by_id(query.release_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Release with id={} not found", query.release_id);
                ReleaseError::not_found(query.release_id)
            })
    }
}
