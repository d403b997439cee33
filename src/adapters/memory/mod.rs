//! In-memory adapters for development and testing.

mod release_repository;

pub use release_repository::InMemoryReleaseRepository;
