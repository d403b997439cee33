//! In-memory release repository.
//!
//! Used when no database is configured, and as the storage for tests.
//! Does not persist data across restarts.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::foundation::{DomainError, ErrorCode, ReleaseId};
use crate::domain::release::{NewRelease, Release, ReleaseFilter};
use crate::ports::ReleaseRepository;

/// In-memory implementation of the ReleaseRepository port.
///
/// Thread-safe via internal `Mutex`. Ids are assigned sequentially from 1;
/// the ordered map keeps listings sorted by id.
#[derive(Default)]
pub struct InMemoryReleaseRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    releases: BTreeMap<ReleaseId, Release>,
    last_id: i64,
}

impl InMemoryReleaseRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored releases.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.state.lock().unwrap().releases.len()
    }

    /// Returns true if no releases are stored.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, DomainError> {
        self.state
            .lock()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "Release store lock poisoned"))
    }
}

#[async_trait]
impl ReleaseRepository for InMemoryReleaseRepository {
    async fn find_by_id(&self, id: ReleaseId) -> Result<Option<Release>, DomainError> {
        Ok(self.lock()?.releases.get(&id).cloned())
    }

    async fn insert(&self, release: &NewRelease) -> Result<Release, DomainError> {
        let mut state = self.lock()?;
        state.last_id += 1;
        let id = ReleaseId::new(state.last_id);
        let stored = release.clone().into_release(id);
        state.releases.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, release: &Release) -> Result<Release, DomainError> {
        let mut state = self.lock()?;
        match state.releases.get_mut(&release.id()) {
            Some(existing) => {
                *existing = release.clone();
                Ok(release.clone())
            }
            None => Err(DomainError::release_not_found(release.id())),
        }
    }

    async fn exists_by_id(&self, id: ReleaseId) -> Result<bool, DomainError> {
        Ok(self.lock()?.releases.contains_key(&id))
    }

    async fn delete_by_id(&self, id: ReleaseId) -> Result<(), DomainError> {
        match self.lock()?.releases.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::release_not_found(id)),
        }
    }

    async fn find_all(&self, filter: &ReleaseFilter) -> Result<Vec<Release>, DomainError> {
        Ok(self
            .lock()?
            .releases
            .values()
            .filter(|release| filter.matches(release))
            .cloned()
            .collect())
    }
}
