//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod result_store;

#[cfg(test)]
pub mod tests;

pub use result_store::RealResultStore;
