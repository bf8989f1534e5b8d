// Service abstractions the domains talk to instead of the HTTP client

pub mod user_directory;

pub use user_directory::{
    UnreachableDirectory, UserDirectory, UserDirectoryApiAdapter,
};
