//! Pipeline trait definitions for dependency injection

use std::path::Path;
use async_trait::async_trait;

use crate::error::PipelineResult;
use crate::types::{ChatResponse, Document};

/// LLM provider client covering the two endpoints the pipeline needs
#[mockall::automock]
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Run a single-message chat completion
    async fn chat(&self, prompt: &str) -> PipelineResult<ChatResponse>;

    /// Embed a batch of texts, one vector per input in the same order
    async fn embed(&self, texts: &[String]) -> PipelineResult<Vec<Vec<f32>>>;
}

/// Loads plain-text documents from a directory
#[mockall::automock]
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    async fn load_documents(&self, dir: &Path) -> PipelineResult<Vec<Document>>;
}
