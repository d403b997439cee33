//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `ReleaseRepository` - Persistence and filtered search of releases

mod release_repository;

pub use release_repository::ReleaseRepository;
