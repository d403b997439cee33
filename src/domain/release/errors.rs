//! Release-specific error types.

use thiserror::Error;

use super::status::ReleaseStatus;
use crate::domain::foundation::{DomainError, ErrorCode, ReleaseId, ValidationError};

/// Release-specific errors.
///
/// Every variant carries enough structure for the request boundary to
/// render a precise message without re-deriving it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReleaseError {
    /// Release was not found.
    #[error("Release with id {0} not found")]
    NotFound(ReleaseId),

    /// Inbound text did not match any status display label.
    #[error("Invalid status: {input}. Valid values: {}", .valid.join(", "))]
    InvalidStatus {
        input: String,
        valid: Vec<&'static str>,
    },

    /// Requested status change is not an edge of the workflow.
    #[error(
        "Cannot change status from {current} to {requested}. Allowed: [{}]",
        labels(.allowed)
    )]
    TransitionDenied {
        current: ReleaseStatus,
        requested: ReleaseStatus,
        allowed: Vec<ReleaseStatus>,
    },

    /// Structurally invalid input.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// Infrastructure error. The message is internal and must not reach clients.
    #[error("Internal error: {0}")]
    Infrastructure(String),
}

fn labels(statuses: &[ReleaseStatus]) -> String {
    statuses
        .iter()
        .map(ReleaseStatus::display_label)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ReleaseError {
    pub fn not_found(id: ReleaseId) -> Self {
        ReleaseError::NotFound(id)
    }

    pub fn invalid_status(input: impl Into<String>) -> Self {
        ReleaseError::InvalidStatus {
            input: input.into(),
            valid: ReleaseStatus::labels(),
        }
    }

    pub fn transition_denied(current: ReleaseStatus, requested: ReleaseStatus) -> Self {
        ReleaseError::TransitionDenied {
            current,
            requested,
            allowed: current.allowed_next().to_vec(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ReleaseError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ReleaseError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ReleaseError::NotFound(_) => ErrorCode::ReleaseNotFound,
            ReleaseError::InvalidStatus { .. } => ErrorCode::InvalidStatus,
            ReleaseError::TransitionDenied { .. } => ErrorCode::InvalidStateTransition,
            ReleaseError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ReleaseError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<ValidationError> for ReleaseError {
    fn from(err: ValidationError) -> Self {
        ReleaseError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ReleaseError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ReleaseNotFound => match err.details.get("id").and_then(|id| id.parse().ok()) {
                Some(id) => ReleaseError::NotFound(id),
                None => ReleaseError::Infrastructure(err.to_string()),
            },
            ErrorCode::ValidationFailed => ReleaseError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ReleaseError::Infrastructure(err.to_string()),
        }
    }
}
