//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine trait)
//! - `release` - Release aggregate, status workflow and search filter

pub mod foundation;
pub mod release;
