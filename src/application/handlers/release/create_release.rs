//! CreateReleaseHandler - Command handler for registering a new release.

use std::sync::Arc;

use chrono::NaiveDate;

use super::parse_status_label;
use crate::domain::release::{NewRelease, Release, ReleaseError};
use crate::ports::ReleaseRepository;

/// Command to create a release.
///
/// `status` is a display label; absent or blank starts the release at "Created".
#[derive(Debug, Clone)]
pub struct CreateReleaseCommand {
    pub name: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub release_date: NaiveDate,
}

/// Handler for creating releases.
pub struct CreateReleaseHandler {
    repository: Arc<dyn ReleaseRepository>,
}

impl CreateReleaseHandler {
    pub fn new(repository: Arc<dyn ReleaseRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateReleaseCommand) -> Result<Release, ReleaseError> {
        tracing::info!("Creating new release with name={}", cmd.name);

        let status = parse_status_label(cmd.status.as_deref())?;
        let new_release = NewRelease::new(cmd.name, cmd.description, cmd.release_date, status)
            .map_err(|err| {
                tracing::warn!("Rejected new release: {}", err);
                ReleaseError::from(err)
            })?;

        let release = self.repository.insert(&new_release).await?;

        tracing::info!("Release created successfully with id={}", release.id());
        Ok(release)
    }
}
