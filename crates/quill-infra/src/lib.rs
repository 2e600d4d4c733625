//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the post store and identity service integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL post store via SeaORM
//! - `hosted-identity` - HTTP client for the hosted auth service

pub mod identity;
pub mod store;

// Re-exports - In-Memory
pub use identity::{FixtureIdentityProvider, provider_from_env};
pub use store::{DatabaseConfig, InMemoryPostStore};

#[cfg(feature = "postgres")]
pub use store::PostgresPostStore;

#[cfg(feature = "hosted-identity")]
pub use identity::{HostedIdentityConfig, HostedIdentityProvider};
