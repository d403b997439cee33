//! HTTP handlers for release endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::adapters::memory::InMemoryReleaseRepository;
use crate::application::handlers::release::{
    CreateReleaseHandler, DeleteReleaseCommand, DeleteReleaseHandler, GetReleaseHandler,
    GetReleaseQuery, ListReleasesHandler, ListStatusesHandler, UpdateReleaseHandler,
};
use crate::domain::foundation::ReleaseId;
use crate::domain::release::ReleaseError;
use crate::ports::ReleaseRepository;

use super::dto::{
    ErrorResponse, ReleaseRequest, ReleaseResponse, ReleaseSearchParams, StatusResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct ReleaseAppState {
    pub release_repository: Arc<dyn ReleaseRepository>,
}

impl ReleaseAppState {
    pub fn new(release_repository: Arc<dyn ReleaseRepository>) -> Self {
        Self { release_repository }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryReleaseRepository::new()))
    }

    pub fn create_release_handler(&self) -> CreateReleaseHandler {
        CreateReleaseHandler::new(self.release_repository.clone())
    }

    pub fn get_release_handler(&self) -> GetReleaseHandler {
        GetReleaseHandler::new(self.release_repository.clone())
    }

    pub fn update_release_handler(&self) -> UpdateReleaseHandler {
        UpdateReleaseHandler::new(self.release_repository.clone())
    }

    pub fn delete_release_handler(&self) -> DeleteReleaseHandler {
        DeleteReleaseHandler::new(self.release_repository.clone())
    }

    pub fn list_releases_handler(&self) -> ListReleasesHandler {
        ListReleasesHandler::new(self.release_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/releases - Search releases
pub async fn list_releases(
    State(state): State<ReleaseAppState>,
    params: Result<Query<ReleaseSearchParams>, QueryRejection>,
) -> Result<impl IntoResponse, ReleaseApiError> {
    let Query(params) = params?;

    let releases = state.list_releases_handler().handle(params.into()).await?;

    let response: Vec<ReleaseResponse> = releases.iter().map(ReleaseResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/releases/:id - Get a release
pub async fn get_release(
    State(state): State<ReleaseAppState>,
    Path(release_id): Path<String>,
) -> Result<impl IntoResponse, ReleaseApiError> {
    let release_id = parse_release_id(&release_id)?;

    let release = state
        .get_release_handler()
        .handle(GetReleaseQuery { release_id })
        .await?;

    Ok(Json(ReleaseResponse::from(&release)))
}

/// GET /api/statuses - Status catalogue
pub async fn list_statuses() -> impl IntoResponse {
    let response: Vec<StatusResponse> = ListStatusesHandler::new()
        .handle()
        .into_iter()
        .map(StatusResponse::from)
        .collect();
    Json(response)
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/PUT/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/releases - Create a release
pub async fn create_release(
    State(state): State<ReleaseAppState>,
    request: Result<Json<ReleaseRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ReleaseApiError> {
    let Json(request) = request?;
    let cmd = request.into_create_command()?;

    let release = state.create_release_handler().handle(cmd).await?;

    let location = format!("/api/releases/{}", release.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ReleaseResponse::from(&release)),
    ))
}

/// PUT /api/releases/:id - Update a release
pub async fn update_release(
    State(state): State<ReleaseAppState>,
    Path(release_id): Path<String>,
    request: Result<Json<ReleaseRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ReleaseApiError> {
    let release_id = parse_release_id(&release_id)?;
    let Json(request) = request?;
    let cmd = request.into_update_command(release_id)?;

    let release = state.update_release_handler().handle(cmd).await?;

    Ok(Json(ReleaseResponse::from(&release)))
}

/// DELETE /api/releases/:id - Delete a release
pub async fn delete_release(
    State(state): State<ReleaseAppState>,
    Path(release_id): Path<String>,
) -> Result<impl IntoResponse, ReleaseApiError> {
    let release_id = parse_release_id(&release_id)?;

    state
        .delete_release_handler()
        .handle(DeleteReleaseCommand { release_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

fn parse_release_id(raw: &str) -> Result<ReleaseId, ReleaseApiError> {
    raw.parse()
        .map_err(|_| ReleaseApiError::BadRequest(format!("Invalid release ID format: {}", raw)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ReleaseApiError {
    /// Request could not be read (bad JSON, bad query string, bad id).
    BadRequest(String),
    Release(ReleaseError),
}

impl From<ReleaseError> for ReleaseApiError {
    fn from(err: ReleaseError) -> Self {
        ReleaseApiError::Release(err)
    }
}

impl From<JsonRejection> for ReleaseApiError {
    fn from(rejection: JsonRejection) -> Self {
        ReleaseApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ReleaseApiError {
    fn from(rejection: QueryRejection) -> Self {
        ReleaseApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ReleaseApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ReleaseApiError::BadRequest(msg) => {
                tracing::warn!("Malformed request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ReleaseApiError::Release(err) => {
                let status = match &err {
                    ReleaseError::NotFound(_) => StatusCode::NOT_FOUND,
                    ReleaseError::InvalidStatus { .. }
                    | ReleaseError::TransitionDenied { .. }
                    | ReleaseError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
                    ReleaseError::Infrastructure(detail) => {
                        tracing::error!("Unexpected error while handling request: {}", detail);
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, ErrorResponse::from_release_error(&err))
            }
        };

        (status, Json(error)).into_response()
    }
}
