//! Core data model definitions shared across Roster crates.
#![allow(missing_docs)]

pub mod ids;
pub mod role;
pub mod routes;
pub mod user;
pub mod wire;

// Intentionally curated re-exports for downstream consumers.
pub use ids::UserId;
pub use role::{Role, UserRole};
pub use user::{User, UserPayload};
pub use wire::CreateUserResponse;
