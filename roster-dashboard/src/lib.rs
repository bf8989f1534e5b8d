//! Roster dashboard library
//!
//! This crate contains the desktop dashboard's library surfaces used by the
//! executable in `src/main.rs`: application glue, the users and UI domains,
//! and the infrastructure that talks to the users backend.
//!
//! Notes
//! - Most consumers should use the `roster-dashboard` binary; the library is
//!   exposed mainly to enable testing.

pub mod app;
pub mod common;
pub mod domains;
pub mod infra;
pub mod state;
pub mod subscriptions;
pub mod update;
pub mod view;
