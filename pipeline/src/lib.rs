//! Document-indexing and code-generation pipeline
//!
//! Builds (or loads) a vector index over a directory of documents, then runs
//! a fixed sequence of agent tasks against an LLM provider, each task
//! gathering context through its tools and writing one output file.

pub mod core;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use error::{PipelineError, PipelineResult};
pub use types::*;

// Re-export trait definitions
pub use traits::{DocumentLoader, LlmClient};

// Re-export core components
pub use core::index::{QueryEngine, VectorIndex};
pub use core::runner::TaskRunner;

// Re-export service implementations
pub use services::{OpenAiClient, RealDocumentLoader};
