//! Pipeline integration tests
//!
//! Exercise the index and the task runner end to end with a mocked LLM
//! client: deterministic keyword-count embeddings and canned chat replies.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pipeline::core::tasks::{self, CODE_FILE};
use pipeline::traits::{MockDocumentLoader, MockLlmClient};
use pipeline::{AgentProfile, ChatResponse, Document, TaskRunner, TaskSpec, VectorIndex};

/// Deterministic embedding: one dimension per keyword, counting occurrences
fn fake_embed(text: &str) -> Vec<f32> {
    let lower = text.to_lowercase();
    ["paper", "fastapi", "scipy", "statistics"]
        .iter()
        .map(|keyword| lower.matches(keyword).count() as f32)
        .collect()
}

fn chat_response(content: &str) -> ChatResponse {
    ChatResponse {
        content: content.to_string(),
        tokens_used: 42,
        prompt_tokens: 30,
        completion_tokens: 12,
        model_used: "mock-model".to_string(),
        response_time: Duration::from_millis(1),
    }
}

/// Mock client whose embeddings are keyword counts and whose chat replies
/// are numbered; prompts are recorded for later assertions.
fn mock_client(prompts: Arc<Mutex<Vec<String>>>) -> MockLlmClient {
    let mut client = MockLlmClient::new();
    client
        .expect_embed()
        .returning(|texts| Ok(texts.iter().map(|t| fake_embed(t)).collect()));

    let counter = AtomicU32::new(0);
    client.expect_chat().returning(move |prompt| {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        prompts.lock().unwrap().push(prompt.to_string());
        Ok(chat_response(&format!("RESPONSE[{n}]")))
    });

    client
}

fn sample_documents() -> Vec<Document> {
    vec![
        Document {
            path: PathBuf::from("data/paper.txt"),
            text: "This paper presents a paper about statistics.".to_string(),
        },
        Document {
            path: PathBuf::from("data/appendix.txt"),
            text: "FastAPI appendix material.".to_string(),
        },
    ]
}

#[tokio::test]
async fn test_index_query_ranks_by_similarity() {
    let client = mock_client(Arc::new(Mutex::new(Vec::new())));
    let index = VectorIndex::build(&sample_documents(), &client).await.unwrap();

    let results = index.query("key points of the paper", 1, &client).await.unwrap();
    assert_eq!(results, vec!["This paper presents a paper about statistics."]);

    let results = index.query("fastapi routing", 1, &client).await.unwrap();
    assert_eq!(results, vec!["FastAPI appendix material."]);
}

#[tokio::test]
async fn test_index_persists_and_reloads() {
    let client = mock_client(Arc::new(Mutex::new(Vec::new())));
    let storage = tempfile::tempdir().unwrap();

    assert!(!VectorIndex::exists(storage.path()));

    let index = VectorIndex::build(&sample_documents(), &client).await.unwrap();
    index.persist(storage.path()).await.unwrap();

    assert!(VectorIndex::exists(storage.path()));

    let reloaded = VectorIndex::load(storage.path()).await.unwrap();
    assert_eq!(reloaded.len(), index.len());

    let results = reloaded.query("scipy statistics", 1, &client).await.unwrap();
    assert_eq!(results, vec!["This paper presents a paper about statistics."]);
}

#[tokio::test]
async fn test_runner_executes_all_five_tasks() {
    let prompts = Arc::new(Mutex::new(Vec::new()));
    let client = mock_client(prompts.clone());

    let mut loader = MockDocumentLoader::new();
    loader.expect_load_documents().returning(|dir| {
        Ok(vec![Document {
            path: dir.join("guide.md"),
            text: format!("Documentation living under {}.", dir.display()),
        }])
    });

    let index = {
        let build_client = mock_client(Arc::new(Mutex::new(Vec::new())));
        VectorIndex::build(&sample_documents(), &build_client).await.unwrap()
    };

    let output_dir = tempfile::tempdir().unwrap();
    let docs_dir = PathBuf::from("docs");

    let agent = tasks::coding_agent();
    let task_sequence = tasks::default_tasks(&docs_dir);

    let mut runner = TaskRunner::new(client, loader, index, output_dir.path());
    let outcomes = runner.run_all(&agent, &task_sequence).await.unwrap();

    assert_eq!(outcomes.len(), 5);

    // Every task wrote its fixed-name output file
    for task in &task_sequence {
        let path = output_dir.path().join(&task.output_file);
        assert!(path.is_file(), "missing output: {}", path.display());
    }

    // Outputs land in task order: chat reply N went to task N's file
    let code = std::fs::read_to_string(output_dir.path().join(CODE_FILE)).unwrap();
    assert_eq!(code, "RESPONSE[5]");

    // The architecture task saw all three summaries through its file tools
    let recorded = prompts.lock().unwrap();
    let architecture_prompt = &recorded[3];
    assert!(architecture_prompt.contains("RESPONSE[1]"));
    assert!(architecture_prompt.contains("RESPONSE[2]"));
    assert!(architecture_prompt.contains("RESPONSE[3]"));

    // The codegen task saw the architecture output
    assert!(recorded[4].contains("RESPONSE[4]"));
}

#[tokio::test]
async fn test_runner_stops_at_first_failure() {
    let mut client = MockLlmClient::new();
    let counter = AtomicU32::new(0);
    client.expect_chat().returning(move |_| {
        if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            Ok(chat_response("first"))
        } else {
            Err(pipeline::PipelineError::ServiceUnavailable)
        }
    });

    let loader = MockDocumentLoader::new();
    let output_dir = tempfile::tempdir().unwrap();

    let agent = AgentProfile {
        role: "dev".to_string(),
        goal: "goal".to_string(),
        backstory: "backstory".to_string(),
    };
    let task_sequence = vec![
        TaskSpec {
            name: "one".to_string(),
            description: "First step.".to_string(),
            expected_output: "A file.".to_string(),
            tools: vec![],
            output_file: "one.txt".to_string(),
        },
        TaskSpec {
            name: "two".to_string(),
            description: "Second step.".to_string(),
            expected_output: "A file.".to_string(),
            tools: vec![],
            output_file: "two.txt".to_string(),
        },
    ];

    let mut runner = TaskRunner::new(client, loader, VectorIndex::default(), output_dir.path());
    let result = runner.run_all(&agent, &task_sequence).await;

    assert!(result.is_err());
    assert!(output_dir.path().join("one.txt").is_file());
    assert!(!output_dir.path().join("two.txt").exists());
}
