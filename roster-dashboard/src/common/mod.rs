//! Common module containing shared types
//!
//! This module provides the message plumbing used across domains

pub mod messages;
