//! In-memory result store implementation

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::MathServerResult;
use crate::traits::ResultStore;

/// In-memory store mapping operation names to their last computed result.
///
/// Backed by a `RwLock`ed map shared across clones, so every handler sees
/// the same data. No eviction, no expiry, no persistence across restarts.
#[derive(Debug, Clone, Default)]
pub struct RealResultStore {
    results: Arc<RwLock<HashMap<String, f64>>>,
}

impl RealResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct operations with a stored result
    pub async fn len(&self) -> usize {
        self.results.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.results.read().await.is_empty()
    }
}

#[async_trait]
impl ResultStore for RealResultStore {
    async fn save(&self, operation: &str, value: f64) -> MathServerResult<()> {
        let mut results = self.results.write().await;
        results.insert(operation.to_string(), value);
        Ok(())
    }

    async fn retrieve(&self, operation: &str) -> MathServerResult<Option<f64>> {
        let results = self.results.read().await;
        Ok(results.get(operation).copied())
    }
}
