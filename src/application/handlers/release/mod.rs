//! Release command and query handlers.

mod create_release;
mod delete_release;
mod get_release;
mod list_releases;
mod list_statuses;
mod update_release;

pub use create_release::{CreateReleaseCommand, CreateReleaseHandler};
pub use delete_release::{DeleteReleaseCommand, DeleteReleaseHandler};
pub use get_release::{GetReleaseHandler, GetReleaseQuery};
pub use list_releases::{ListReleasesHandler, ListReleasesQuery};
pub use list_statuses::{ListStatusesHandler, StatusDescriptor};
pub use update_release::{UpdateReleaseCommand, UpdateReleaseHandler};

use crate::domain::release::{ReleaseError, ReleaseStatus};

/// Parses an optional status label. Absent or blank means "not given".
fn parse_status_label(label: Option<&str>) -> Result<Option<ReleaseStatus>, ReleaseError> {
    match label {
        Some(label) if !label.trim().is_empty() => ReleaseStatus::parse(label)
            .map(Some)
            .map_err(|err| {
                tracing::warn!("Rejected status value '{}'", label);
                err
            }),
        _ => Ok(None),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_blank_labels_mean_not_given() {
        assert_eq!(parse_status_label(None).unwrap(), None);
        assert_eq!(parse_status_label(Some("")).unwrap(), None);
        assert_eq!(parse_status_label(Some("   ")).unwrap(), None);
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(
            parse_status_label(Some("on staging")).unwrap(),
            Some(ReleaseStatus::OnStaging)
        );
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = parse_status_label(Some("Shipped")).unwrap_err();
        assert!(matches!(err, ReleaseError::InvalidStatus { .. }));
    }
}
