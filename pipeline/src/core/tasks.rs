//! The fixed task sequence and agent persona
//!
//! Five tasks run strictly in order; each writes its output file before the
//! next starts, and later tasks read the earlier files back as context.

use std::path::Path;

use crate::types::{AgentProfile, TaskSpec, TaskTool};

pub const PAPER_SUMMARY_FILE: &str = "ai_paper_summary.txt";
pub const FRAMEWORK_SUMMARY_FILE: &str = "fastapi_docs_summary.txt";
pub const NUMERICS_SUMMARY_FILE: &str = "scipy_docs_summary.txt";
pub const ARCHITECTURE_FILE: &str = "project_architecture.txt";
pub const CODE_FILE: &str = "ai_project_code.py";

/// The single agent persona shared by all tasks
pub fn coding_agent() -> AgentProfile {
    AgentProfile {
        role: "Senior Python Developer".to_string(),
        goal: "Craft well-designed and thought-out code. Also perform thorough and concise code reviews."
            .to_string(),
        backstory: "You are a senior Python developer with extensive experience in software \
                    architecture, programming best practices, and code reviews."
            .to_string(),
    }
}

/// Build the five-task sequence.
///
/// `docs_dir` is the documentation corpus root containing the
/// `fastapi_docs` and `scipy_docs` subdirectories.
pub fn default_tasks(docs_dir: &Path) -> Vec<TaskSpec> {
    vec![
        TaskSpec {
            name: "paper_summary".to_string(),
            description: "Retrieve relevant information from the AI paper and summarize it."
                .to_string(),
            expected_output: "A summary of the AI paper's key points.".to_string(),
            tools: vec![TaskTool::QueryIndex {
                query: "Summarize the key contributions of the AI paper.".to_string(),
            }],
            output_file: PAPER_SUMMARY_FILE.to_string(),
        },
        TaskSpec {
            name: "framework_summary".to_string(),
            description: "Retrieve key information from the FastAPI docs related to building an API."
                .to_string(),
            expected_output:
                "A summary of the key information needed for building the API using FastAPI."
                    .to_string(),
            tools: vec![TaskTool::SearchDocs {
                dir: docs_dir.join("fastapi_docs"),
                query: "How to build an API with request validation and error handling.".to_string(),
            }],
            output_file: FRAMEWORK_SUMMARY_FILE.to_string(),
        },
        TaskSpec {
            name: "numerics_summary".to_string(),
            description: "Retrieve relevant information from the Scipy documentation.".to_string(),
            expected_output: "A summary of the key Scipy functionalities for mathematical operations."
                .to_string(),
            tools: vec![TaskTool::SearchDocs {
                dir: docs_dir.join("scipy_docs"),
                query: "Statistical functions for mean, median and mode.".to_string(),
            }],
            output_file: NUMERICS_SUMMARY_FILE.to_string(),
        },
        TaskSpec {
            name: "architecture".to_string(),
            description: "Combine all retrieved outputs to create a system architecture based on \
                          the AI paper, FastAPI, and Scipy docs."
                .to_string(),
            expected_output: "A combined analysis summarizing all the information and outlining \
                              the architecture needed to implement the AI project."
                .to_string(),
            tools: vec![
                TaskTool::ReadFile {
                    name: PAPER_SUMMARY_FILE.to_string(),
                },
                TaskTool::ReadFile {
                    name: FRAMEWORK_SUMMARY_FILE.to_string(),
                },
                TaskTool::ReadFile {
                    name: NUMERICS_SUMMARY_FILE.to_string(),
                },
            ],
            output_file: ARCHITECTURE_FILE.to_string(),
        },
        TaskSpec {
            name: "codegen".to_string(),
            description: "Using the system architecture and information from the AI paper, \
                          FastAPI, and Scipy docs, generate Python code for the AI project."
                .to_string(),
            expected_output: "A fully functional Python implementation of the AI project."
                .to_string(),
            tools: vec![TaskTool::ReadFile {
                name: ARCHITECTURE_FILE.to_string(),
            }],
            output_file: CODE_FILE.to_string(),
        },
    ]
}
