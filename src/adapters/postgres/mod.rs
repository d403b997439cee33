//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresReleaseRepository` - Release persistence and filtered search
//!
//! The schema lives in `migrations/` and is applied with `MIGRATOR` when
//! `database.run_migrations` is enabled.

mod release_repository;

pub use release_repository::PostgresReleaseRepository;

/// Embedded schema migrations for the `releases` table.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
