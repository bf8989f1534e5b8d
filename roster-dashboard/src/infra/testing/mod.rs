//! In-memory collaborators for tests and the offline demo mode

pub mod stubs;

pub use stubs::{DirectoryCall, StubUserDirectory};
