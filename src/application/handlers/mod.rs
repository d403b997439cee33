//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod release;

pub use release::{
    CreateReleaseCommand, CreateReleaseHandler, DeleteReleaseCommand, DeleteReleaseHandler,
    GetReleaseHandler, GetReleaseQuery, ListReleasesHandler, ListReleasesQuery,
    ListStatusesHandler, StatusDescriptor, UpdateReleaseCommand, UpdateReleaseHandler,
};
