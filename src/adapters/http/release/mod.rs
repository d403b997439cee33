//! HTTP adapter for the release module.
//!
//! This module exposes release operations via REST endpoints.
//!
//! # Endpoints
//!
//! - `GET /api/releases` - Search releases by name, description, status and date range
//! - `POST /api/releases` - Create a release
//! - `GET|PUT|DELETE /api/releases/{id}` - Read, update or delete a release
//! - `GET /api/statuses` - Status catalogue

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::ReleaseAppState;
pub use routes::release_router;
