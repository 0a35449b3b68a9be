//! Shared utilities for the statpipe workspace
//!
//! Contains only truly shared concerns: tracing initialization and common
//! error types. Component-internal types (HTTP request bodies, task
//! definitions) are kept in their respective components.

pub mod errors;
pub mod logging;

pub use errors::*;
pub use logging::init_tracing;
