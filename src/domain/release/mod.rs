//! Release domain module.
//!
//! Handles the release lifecycle: the status model and its transition
//! table, the workflow guard that enforces it, and the search filter.
//!
//! # Workflow
//!
//! ```text
//! Created <-> In Development <-> On DEV <-> QA Done on DEV <-> On Staging
//!     <-> QA Done on STAGING <-> On PROD <-> Done
//! ```
//!
//! Each stage may advance one step or roll back one step. Stages are never skipped.

mod aggregate;
mod errors;
mod filter;
mod status;
mod workflow;

pub use aggregate::{NewRelease, Release, MAX_NAME_LENGTH};
pub use errors::ReleaseError;
pub use filter::{Criterion, ReleaseFilter, ReleaseFilterBuilder};
pub use status::ReleaseStatus;
pub use workflow::ReleaseWorkflow;
