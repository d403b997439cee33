//! HTTP DTOs (Data Transfer Objects) for release endpoints.
//!
//! These types define the JSON request/response structure for the release API.
//! Fields are camelCase and statuses always travel as display labels.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::application::handlers::release::{
    CreateReleaseCommand, ListReleasesQuery, StatusDescriptor, UpdateReleaseCommand,
};
use crate::domain::foundation::{ErrorCode, ReleaseId, ValidationError};
use crate::domain::release::{Release, ReleaseError, ReleaseStatus};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/releases` and `PUT /api/releases/:id`.
///
/// Required fields are optional here so that a missing value is reported as
/// a validation failure naming the field instead of a generic parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Display label, e.g. "In Development".
    pub status: Option<String>,
    pub release_date: Option<NaiveDate>,
}

impl ReleaseRequest {
    fn required(self) -> Result<(String, NaiveDate, Option<String>, Option<String>), ReleaseError> {
        let name = self.name.ok_or_else(|| ValidationError::empty_field("name"))?;
        let release_date = self
            .release_date
            .ok_or_else(|| ValidationError::empty_field("releaseDate"))?;
        Ok((name, release_date, self.description, self.status))
    }

    pub fn into_create_command(self) -> Result<CreateReleaseCommand, ReleaseError> {
        let (name, release_date, description, status) = self.required()?;
        Ok(CreateReleaseCommand {
            name,
            description,
            status,
            release_date,
        })
    }

    pub fn into_update_command(
        self,
        release_id: ReleaseId,
    ) -> Result<UpdateReleaseCommand, ReleaseError> {
        let (name, release_date, description, status) = self.required()?;
        Ok(UpdateReleaseCommand {
            release_id,
            name,
            description,
            status,
            release_date,
        })
    }
}

/// Query string of `GET /api/releases`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseSearchParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl From<ReleaseSearchParams> for ListReleasesQuery {
    fn from(params: ReleaseSearchParams) -> Self {
        Self {
            name: params.name,
            description: params.description,
            status: params.status,
            from_date: params.from_date,
            to_date: params.to_date,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A release as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseResponse {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ReleaseStatus,
    pub release_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
    /// Statuses reachable from the current one.
    pub allowed_transitions: Vec<ReleaseStatus>,
}

impl From<&Release> for ReleaseResponse {
    fn from(release: &Release) -> Self {
        Self {
            id: release.id().as_i64(),
            name: release.name().to_string(),
            description: release.description().map(str::to_string),
            status: release.status(),
            release_date: release.release_date(),
            created_at: *release.created_at().as_datetime(),
            last_updated_at: *release.last_update_at().as_datetime(),
            allowed_transitions: release.status().allowed_next().to_vec(),
        }
    }
}

/// Entry of the status catalogue.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: &'static str,
    pub allowed_transitions: Vec<&'static str>,
    pub terminal: bool,
}

impl From<StatusDescriptor> for StatusResponse {
    fn from(descriptor: StatusDescriptor) -> Self {
        Self {
            status: descriptor.label,
            allowed_transitions: descriptor.allowed_transitions,
            terminal: descriptor.is_terminal,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal() -> Self {
        Self {
            code: ErrorCode::InternalError.to_string(),
            message: "Internal server error".to_string(),
            details: None,
        }
    }

    /// Builds the client-facing body for a release error.
    ///
    /// Infrastructure errors collapse to [`ErrorResponse::internal`].
    pub fn from_release_error(err: &ReleaseError) -> Self {
        let details = match err {
            ReleaseError::NotFound(id) => Some(json!({ "id": id.as_i64() })),
            ReleaseError::InvalidStatus { valid, .. } => Some(json!({ "validValues": valid })),
            ReleaseError::TransitionDenied {
                current,
                requested,
                allowed,
            } => Some(json!({
                "currentStatus": current,
                "requestedStatus": requested,
                "allowedTransitions": allowed,
            })),
            ReleaseError::ValidationFailed { field, .. } => Some(json!({ "field": field })),
            ReleaseError::Infrastructure(_) => return Self::internal(),
        };

        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            details,
        }
    }
}
