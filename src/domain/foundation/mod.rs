//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, traits, and error types
//! that form the vocabulary of the release tracker domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::ReleaseId;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
