//! DeleteReleaseHandler - Command handler for removing a release.

use std::sync::Arc;

use crate::domain::foundation::ReleaseId;
use crate::domain::release::ReleaseError;
use crate::ports::ReleaseRepository;

/// Command to delete a release.
#[derive(Debug, Clone, Copy)]
pub struct DeleteReleaseCommand {
    pub release_id: ReleaseId,
}

/// Handler for deleting releases.
pub struct DeleteReleaseHandler {
    repository: Arc<dyn ReleaseRepository>,
}

impl DeleteReleaseHandler {
    pub fn new(repository: Arc<dyn ReleaseRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteReleaseCommand) -> Result<(), ReleaseError> {
        tracing::info!("Deleting release with id={}", cmd.release_id);

        if !self.repository.exists_by_id(cmd.release_id).await? {
            tracing::warn!(
                "Attempted delete but release with id={} not found",
                cmd.release_id
            );
            return Err(ReleaseError::not_found(cmd.release_id));
        }

        self.repository.delete_by_id(cmd.release_id).await?;

        tracing::info!("Release with id={} deleted", cmd.release_id);
        Ok(())
    }
}
