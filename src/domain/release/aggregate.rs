//! Release aggregate entity.
//!
//! A release moves through the lifecycle described by [`ReleaseStatus`].
//! Its status is not settable from outside this module tree:
//! every status change goes through [`super::ReleaseWorkflow`].

use chrono::NaiveDate;

use super::status::ReleaseStatus;
use crate::domain::foundation::{ReleaseId, Timestamp, ValidationError};

/// Maximum length for a release name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Release that has not been stored yet.
///
/// Storage assigns the id on insert and returns the persisted [`Release`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRelease {
    name: String,
    description: Option<String>,
    status: ReleaseStatus,
    release_date: NaiveDate,
    created_at: Timestamp,
}

impl NewRelease {
    /// Prepares a release for insertion.
    ///
    /// `status` defaults to [`ReleaseStatus::Created`]. An explicit initial
    /// status is an assignment, not a transition, so it is not checked
    /// against the workflow.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name is blank
    /// - `TooLong` if name exceeds [`MAX_NAME_LENGTH`]
    pub fn new(
        name: String,
        description: Option<String>,
        release_date: NaiveDate,
        status: Option<ReleaseStatus>,
    ) -> Result<Self, ValidationError> {
        validate_name(&name)?;

        Ok(Self {
            name,
            description,
            status: status.unwrap_or_default(),
            release_date,
            created_at: Timestamp::now(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status(&self) -> ReleaseStatus {
        self.status
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Binds the storage-assigned id, producing the persisted release.
    pub(crate) fn into_release(self, id: ReleaseId) -> Release {
        Release {
            id,
            name: self.name,
            description: self.description,
            status: self.status,
            release_date: self.release_date,
            created_at: self.created_at,
            last_update_at: self.created_at,
        }
    }
}

/// Release aggregate.
///
/// # Invariants
///
/// - `id` never changes once assigned
/// - `name` is non-blank and at most [`MAX_NAME_LENGTH`] characters
/// - `last_update_at >= created_at`
/// - `status` only changes through the workflow guard
///
/// Outside this crate a `Release` only comes back from a repository, so a
/// caller cannot fabricate one with an arbitrary status:
///
/// ```compile_fail
/// use chrono::NaiveDate;
/// use release_tracker::domain::foundation::{ReleaseId, Timestamp};
/// use release_tracker::domain::release::{Release, ReleaseStatus};
///
/// let now = Timestamp::now();
/// let _ = Release::reconstitute(
///     ReleaseId::new(1),
///     "Release v1".to_string(),
///     None,
///     ReleaseStatus::Done,
///     NaiveDate::from_ymd_opt(2026, 2, 17).unwrap(),
///     now,
///     now,
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    id: ReleaseId,
    name: String,
    description: Option<String>,
    status: ReleaseStatus,
    release_date: NaiveDate,
    created_at: Timestamp,
    last_update_at: Timestamp,
}

impl Release {
    /// Reconstitute a release from persistence (no validation).
    pub(crate) fn reconstitute(
        id: ReleaseId,
        name: String,
        description: Option<String>,
        status: ReleaseStatus,
        release_date: NaiveDate,
        created_at: Timestamp,
        last_update_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            description,
            status,
            release_date,
            created_at,
            last_update_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> ReleaseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status(&self) -> ReleaseStatus {
        self.status
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn last_update_at(&self) -> &Timestamp {
        &self.last_update_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace name, description and release date.
    ///
    /// # Errors
    ///
    /// - `EmptyField` / `TooLong` if the name is invalid; nothing changes
    pub fn update_details(
        &mut self,
        name: String,
        description: Option<String>,
        release_date: NaiveDate,
    ) -> Result<(), ValidationError> {
        validate_name(&name)?;

        self.name = name;
        self.description = description;
        self.release_date = release_date;
        self.touch();
        Ok(())
    }

    /// Status write used by the workflow guard only.
    pub(super) fn set_status(&mut self, status: ReleaseStatus) {
        self.status = status;
        self.touch();
    }

    fn touch(&mut self) {
        self.last_update_at = Timestamp::now_not_before(&self.created_at);
    }
}

/// Blank check ignores surrounding whitespace; the length check counts the
/// name as it will be stored.
fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::empty_field("name"));
    }
    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(ValidationError::too_long("name", MAX_NAME_LENGTH, length));
    }
    Ok(())
}
