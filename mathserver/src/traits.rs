//! MathServer trait definitions for dependency injection

use async_trait::async_trait;

use crate::error::MathServerResult;

/// Key-value store for computed results.
///
/// Consistency contract: last write wins. Writes are atomic per key, but
/// compute-then-store is not serialized, so two concurrent `POST`s for the
/// same operation may interleave and either result may be the one a later
/// `GET` observes. Contents do not survive a restart.
#[mockall::automock]
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Store the result for an operation name, replacing any previous value
    async fn save(&self, operation: &str, value: f64) -> MathServerResult<()>;

    /// Retrieve the last stored result for an operation name
    async fn retrieve(&self, operation: &str) -> MathServerResult<Option<f64>>;
}
