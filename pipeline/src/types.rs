//! Pipeline data types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// A loaded source document
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
}

/// Response from a chat completion request
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub content: String,
    pub tokens_used: u32,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub model_used: String,
    pub response_time: Duration,
}

/// The agent persona injected into every task prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentProfile {
    pub role: String,
    pub goal: String,
    pub backstory: String,
}

/// Context-gathering tool attached to a task
#[derive(Debug, Clone)]
pub enum TaskTool {
    /// Read a previously written output file (name relative to the output
    /// directory)
    ReadFile { name: String },

    /// Query the persisted document index
    QueryIndex { query: String },

    /// Search a documentation corpus directory (indexed in memory per run)
    SearchDocs { dir: PathBuf, query: String },
}

/// One step of the fixed task sequence
#[derive(Debug, Clone)]
pub struct TaskSpec {
    pub name: String,
    pub description: String,
    pub expected_output: String,
    pub tools: Vec<TaskTool>,
    /// File name the result is written to, relative to the output directory
    pub output_file: String,
}

/// Record of a completed task
#[derive(Debug, Clone)]
pub struct TaskOutcome {
    pub name: String,
    pub output_file: PathBuf,
    pub tokens_used: u32,
}
