//! Pipeline binary entry point
//!
//! Build-or-load the document index, run one example query against it, then
//! execute the five-task sequence. The first failure anywhere terminates
//! the run.

use std::env;
use std::path::PathBuf;
use clap::Parser;
use tracing::info;

use pipeline::core::tasks;
use pipeline::{
    OpenAiClient, PipelineError, PipelineResult, QueryEngine, RealDocumentLoader, TaskRunner,
    VectorIndex, traits::DocumentLoader,
};

#[derive(Parser, Debug)]
#[command(name = "pipeline")]
#[command(about = "Document-indexing and code-generation pipeline")]
struct Args {
    /// Directory of source documents for the paper index
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Documentation corpus root (fastapi_docs/, scipy_docs/)
    #[arg(long, default_value = "docs")]
    docs_dir: PathBuf,

    /// Directory the index persists to
    #[arg(long, default_value = "storage")]
    storage_dir: PathBuf,

    /// Directory task output files are written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Chat model name
    #[arg(long, default_value = "gpt-4o-mini")]
    model: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> PipelineResult<()> {
    // Load environment variables from .env if present
    let _ = dotenv::dotenv();

    let args = Args::parse();

    shared::init_tracing(Some(&args.log_level))
        .map_err(|e| PipelineError::config(e.to_string()))?;

    let api_key = env::var("OPENAI_API_KEY")
        .map_err(|_| PipelineError::config("OPENAI_API_KEY not set"))?;

    let client = OpenAiClient::new(api_key, args.model.clone());
    let loader = RealDocumentLoader::new();

    // Reuse the persisted index when it exists, otherwise build and persist
    let index = if VectorIndex::exists(&args.storage_dir) {
        VectorIndex::load(&args.storage_dir).await?
    } else {
        let documents = loader.load_documents(&args.data_dir).await?;
        let index = VectorIndex::build(&documents, &client).await?;
        index.persist(&args.storage_dir).await?;
        index
    };

    let engine = QueryEngine::new(&index, &client);
    let response = engine
        .query("Summarize the key contributions of the AI paper.")
        .await?;
    info!(response = %response, "Example query answered");

    let agent = tasks::coding_agent();
    let task_sequence = tasks::default_tasks(&args.docs_dir);

    let mut runner = TaskRunner::new(client, loader, index, &args.output_dir);
    let outcomes = runner.run_all(&agent, &task_sequence).await?;

    let total_tokens: u32 = outcomes.iter().map(|o| o.tokens_used).sum();
    info!(
        tasks = outcomes.len(),
        total_tokens,
        final_output = %outcomes.last().map(|o| o.output_file.display().to_string()).unwrap_or_default(),
        "Pipeline completed"
    );

    Ok(())
}
