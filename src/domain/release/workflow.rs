//! Release workflow guard.
//!
//! The only component allowed to change a release's status.

use super::aggregate::Release;
use super::errors::ReleaseError;
use super::status::ReleaseStatus;
use crate::domain::foundation::StateMachine;

/// Stateless validator and applier for status transitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReleaseWorkflow;

impl ReleaseWorkflow {
    pub fn new() -> Self {
        Self
    }

    /// Checks that `target` is a legal next status for `current`.
    ///
    /// # Errors
    ///
    /// - `TransitionDenied` with the current status, the requested status
    ///   and the allowed-next list
    pub fn validate_transition(
        &self,
        current: ReleaseStatus,
        target: ReleaseStatus,
    ) -> Result<(), ReleaseError> {
        if current.can_transition_to(&target) {
            Ok(())
        } else {
            Err(ReleaseError::transition_denied(current, target))
        }
    }

    /// Moves `release` to `target` and advances its last-update timestamp.
    ///
    /// Leaves the release untouched when the transition is rejected.
    pub fn apply_transition(
        &self,
        release: &mut Release,
        target: ReleaseStatus,
    ) -> Result<(), ReleaseError> {
        self.validate_transition(release.status(), target)?;
        release.set_status(target);
        Ok(())
    }
}
