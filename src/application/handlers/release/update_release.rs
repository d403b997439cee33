//! UpdateReleaseHandler - Command handler for editing a release.
//!
//! A status change goes through the workflow guard before any field is
//! touched, so a rejected transition persists nothing.

use std::sync::Arc;

use chrono::NaiveDate;

use super::parse_status_label;
use crate::domain::foundation::ReleaseId;
use crate::domain::release::{Release, ReleaseError, ReleaseWorkflow};
use crate::ports::ReleaseRepository;

/// Command to update a release.
///
/// Name, description and release date replace the stored values. `status`
/// is a display label; absent or blank leaves the status unchanged.
#[derive(Debug, Clone)]
pub struct UpdateReleaseCommand {
    pub release_id: ReleaseId,
    pub name: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub release_date: NaiveDate,
}

/// Handler for updating releases.
pub struct UpdateReleaseHandler {
    repository: Arc<dyn ReleaseRepository>,
    workflow: ReleaseWorkflow,
}

impl UpdateReleaseHandler {
    pub fn new(repository: Arc<dyn ReleaseRepository>) -> Self {
        Self {
            repository,
            workflow: ReleaseWorkflow::new(),
        }
    }

    pub async fn handle(&self, cmd: UpdateReleaseCommand) -> Result<Release, ReleaseError> {
        tracing::info!("Updating release with id={}", cmd.release_id);

        // 1. Load
        let mut release = self
            .repository
            .find_by_id(cmd.release_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Release with id={} not found", cmd.release_id);
                ReleaseError::not_found(cmd.release_id)
            })?;

        // 2. Status first
        if let Some(target) = parse_status_label(cmd.status.as_deref())? {
            tracing::info!(
                "Requested status transition for release id={} from {} to {}",
                cmd.release_id,
                release.status(),
                target
            );
            self.workflow
                .apply_transition(&mut release, target)
                .map_err(|err| {
                    tracing::warn!("Rejected status change for id={}: {}", cmd.release_id, err);
                    err
                })?;
        }

        // 3. Details
        release.update_details(cmd.name, cmd.description, cmd.release_date)?;

        // 4. Persist
        let saved = self.repository.update(&release).await?;

        tracing::info!("Release with id={} updated", saved.id());
        Ok(saved)
    }
}
