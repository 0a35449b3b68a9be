//! Statistics web service
//!
//! Exposes mean/median/mode computations over HTTP with an in-memory
//! key-value store holding the last result per operation.

pub mod error;
pub mod server_impl;
pub mod services;
pub mod stats;
pub mod traits;
pub mod types;
pub mod web;

// Re-export main types
pub use error::{MathServerError, MathServerResult};
pub use server_impl::MathServer;
pub use types::*;

// Re-export trait definitions
pub use traits::ResultStore;

// Re-export service implementations
pub use services::RealResultStore;
