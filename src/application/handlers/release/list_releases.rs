//! ListReleasesHandler - Query handler for filtered release search.

use std::sync::Arc;

use chrono::NaiveDate;

use super::parse_status_label;
use crate::domain::release::{Release, ReleaseError, ReleaseFilter};
use crate::ports::ReleaseRepository;

/// Query parameters for searching releases. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct ListReleasesQuery {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

/// Handler for listing releases.
pub struct ListReleasesHandler {
    repository: Arc<dyn ReleaseRepository>,
}

impl ListReleasesHandler {
    pub fn new(repository: Arc<dyn ReleaseRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListReleasesQuery) -> Result<Vec<Release>, ReleaseError> {
        tracing::info!("Filtering releases with criteria: {:?}", query);

        let status = parse_status_label(query.status.as_deref())?;
        let filter = ReleaseFilter::builder()
            .name(query.name.as_deref())
            .description(query.description.as_deref())
            .status(status)
            .from_date(query.from_date)
            .to_date(query.to_date)
            .build();

        let releases = self.repository.find_all(&filter).await?;

        tracing::info!("Filter returned {} results", releases.len());
        Ok(releases)
    }
}
