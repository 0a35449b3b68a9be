//! Sequential task execution
//!
//! Runs the task sequence one step at a time: gather tool context, assemble
//! the prompt, make one chat call, write the output file. A task's file is
//! on disk before the next task starts, which is what lets later tasks read
//! earlier outputs.

use std::collections::HashMap;
use std::path::PathBuf;
use tokio::fs;
use tracing::info;

use crate::core::index::{DEFAULT_TOP_K, VectorIndex};
use crate::error::PipelineResult;
use crate::traits::{DocumentLoader, LlmClient};
use crate::types::{AgentProfile, TaskOutcome, TaskSpec, TaskTool};

/// Executes task sequences against an LLM client and a document index
pub struct TaskRunner<C, L>
where
    C: LlmClient,
    L: DocumentLoader,
{
    client: C,
    loader: L,
    index: VectorIndex,
    output_dir: PathBuf,
    // Per-run cache of in-memory indexes over docs corpora
    doc_indexes: HashMap<PathBuf, VectorIndex>,
}

impl<C, L> TaskRunner<C, L>
where
    C: LlmClient,
    L: DocumentLoader,
{
    pub fn new(client: C, loader: L, index: VectorIndex, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            loader,
            index,
            output_dir: output_dir.into(),
            doc_indexes: HashMap::new(),
        }
    }

    /// Run every task in order, stopping at the first failure
    pub async fn run_all(
        &mut self,
        agent: &AgentProfile,
        tasks: &[TaskSpec],
    ) -> PipelineResult<Vec<TaskOutcome>> {
        let mut outcomes = Vec::with_capacity(tasks.len());
        for task in tasks {
            outcomes.push(self.run_task(agent, task).await?);
        }
        Ok(outcomes)
    }

    /// Run a single task and write its output file
    pub async fn run_task(
        &mut self,
        agent: &AgentProfile,
        task: &TaskSpec,
    ) -> PipelineResult<TaskOutcome> {
        info!(task = %task.name, "Starting task");

        let context = self.gather_context(&task.tools).await?;
        let prompt = build_prompt(agent, task, &context);

        let response = self.client.chat(&prompt).await?;

        fs::create_dir_all(&self.output_dir).await?;
        let output_path = self.output_dir.join(&task.output_file);
        fs::write(&output_path, &response.content).await?;

        info!(
            task = %task.name,
            output = %output_path.display(),
            tokens = response.tokens_used,
            elapsed_ms = response.response_time.as_millis() as u64,
            "Task completed"
        );

        Ok(TaskOutcome {
            name: task.name.clone(),
            output_file: output_path,
            tokens_used: response.tokens_used,
        })
    }

    /// Resolve each tool into a labeled context section
    async fn gather_context(&mut self, tools: &[TaskTool]) -> PipelineResult<String> {
        let mut sections = Vec::with_capacity(tools.len());

        for tool in tools {
            let section = match tool {
                TaskTool::ReadFile { name } => {
                    let path = self.output_dir.join(name);
                    let contents = fs::read_to_string(&path).await?;
                    format!("Contents of {name}:\n{contents}")
                }
                TaskTool::QueryIndex { query } => {
                    let chunks = self.index.query(query, DEFAULT_TOP_K, &self.client).await?;
                    format!("Retrieved for \"{query}\":\n{}", chunks.join("\n\n"))
                }
                TaskTool::SearchDocs { dir, query } => {
                    if !self.doc_indexes.contains_key(dir) {
                        let documents = self.loader.load_documents(dir).await?;
                        let built = VectorIndex::build(&documents, &self.client).await?;
                        self.doc_indexes.insert(dir.clone(), built);
                    }
                    let index = &self.doc_indexes[dir];
                    let chunks = index.query(query, DEFAULT_TOP_K, &self.client).await?;
                    format!(
                        "Documentation from {} for \"{query}\":\n{}",
                        dir.display(),
                        chunks.join("\n\n")
                    )
                }
            };
            sections.push(section);
        }

        Ok(sections.join("\n\n---\n\n"))
    }
}

/// Assemble the prompt from the agent persona, the task and its context
fn build_prompt(agent: &AgentProfile, task: &TaskSpec, context: &str) -> String {
    let mut prompt = format!(
        "{backstory}\n\nRole: {role}\nGoal: {goal}\n\nTask: {description}\n",
        backstory = agent.backstory,
        role = agent.role,
        goal = agent.goal,
        description = task.description,
    );

    if !context.is_empty() {
        prompt.push_str(&format!("\nContext:\n{context}\n"));
    }

    prompt.push_str(&format!("\nExpected output: {}", task.expected_output));
    prompt
}
