//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory release store (no database configured, tests)
//! - `postgres` - PostgreSQL release store
//! - `http` - REST API over axum

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryReleaseRepository;
pub use postgres::PostgresReleaseRepository;
