//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod release;

// Re-export key types for convenience
pub use release::release_router;
pub use release::ReleaseAppState;
