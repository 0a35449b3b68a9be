//! Vector index over document chunks
//!
//! Exact cosine retrieval: vectors are L2-normalized once at build time, so
//! similarity is a dot product. The index persists as JSON and is reloaded
//! on later runs instead of re-embedding the corpus.

use std::path::Path;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, info};

use crate::error::{PipelineError, PipelineResult};
use crate::traits::LlmClient;
use crate::types::Document;

/// Upper bound on chunk size; paragraphs are packed up to this limit
const MAX_CHUNK_CHARS: usize = 2000;

/// Default number of chunks returned by a query
pub const DEFAULT_TOP_K: usize = 4;

const INDEX_FILE_NAME: &str = "index.json";

/// One embedded chunk of a source document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedChunk {
    pub source: String,
    pub text: String,
    pub vector: Vec<f32>,
}

/// Persistable vector index
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VectorIndex {
    chunks: Vec<IndexedChunk>,
}

impl VectorIndex {
    /// Chunk and embed the documents into a fresh index
    pub async fn build<C>(documents: &[Document], client: &C) -> PipelineResult<Self>
    where
        C: LlmClient + ?Sized,
    {
        let mut sources = Vec::new();
        let mut texts = Vec::new();
        for document in documents {
            let source = document.path.display().to_string();
            for chunk in chunk_text(&document.text) {
                sources.push(source.clone());
                texts.push(chunk);
            }
        }

        if texts.is_empty() {
            return Err(PipelineError::index("no text to index"));
        }

        let mut vectors = client.embed(&texts).await?;
        for vector in &mut vectors {
            normalize(vector);
        }

        let chunks = sources
            .into_iter()
            .zip(texts)
            .zip(vectors)
            .map(|((source, text), vector)| IndexedChunk {
                source,
                text,
                vector,
            })
            .collect::<Vec<_>>();

        info!(chunks = chunks.len(), "Built vector index");
        Ok(Self { chunks })
    }

    /// Write the index to `<dir>/index.json`, creating the directory
    pub async fn persist(&self, dir: &Path) -> PipelineResult<()> {
        fs::create_dir_all(dir).await?;
        let serialized = serde_json::to_string(self)?;
        fs::write(dir.join(INDEX_FILE_NAME), serialized).await?;
        info!(dir = %dir.display(), chunks = self.chunks.len(), "Persisted index");
        Ok(())
    }

    /// Load a previously persisted index from `<dir>/index.json`
    pub async fn load(dir: &Path) -> PipelineResult<Self> {
        let contents = fs::read_to_string(dir.join(INDEX_FILE_NAME)).await?;
        let index: Self = serde_json::from_str(&contents)?;
        info!(dir = %dir.display(), chunks = index.chunks.len(), "Loaded persisted index");
        Ok(index)
    }

    /// True when a persisted index exists under `dir`
    pub fn exists(dir: &Path) -> bool {
        dir.join(INDEX_FILE_NAME).is_file()
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Return the texts of the `top_k` most similar chunks, best first
    pub async fn query<C>(&self, query: &str, top_k: usize, client: &C) -> PipelineResult<Vec<String>>
    where
        C: LlmClient + ?Sized,
    {
        if self.chunks.is_empty() {
            return Err(PipelineError::index("index is empty"));
        }

        let mut query_vectors = client.embed(&[query.to_string()]).await?;
        let mut query_vector = query_vectors
            .pop()
            .ok_or_else(|| PipelineError::InvalidResponse("No query embedding".to_string()))?;
        normalize(&mut query_vector);

        let mut scored: Vec<(f32, &IndexedChunk)> = self
            .chunks
            .iter()
            .map(|chunk| (dot(&query_vector, &chunk.vector), chunk))
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        debug!(
            query,
            best_score = scored.first().map(|(score, _)| *score).unwrap_or(0.0),
            "Ranked index chunks"
        );

        Ok(scored
            .into_iter()
            .take(top_k)
            .map(|(_, chunk)| chunk.text.clone())
            .collect())
    }
}

/// Retrieval-then-synthesis wrapper over an index, answering free-form
/// questions with one chat call
pub struct QueryEngine<'a, C>
where
    C: LlmClient + ?Sized,
{
    index: &'a VectorIndex,
    client: &'a C,
}

impl<'a, C> QueryEngine<'a, C>
where
    C: LlmClient + ?Sized,
{
    pub fn new(index: &'a VectorIndex, client: &'a C) -> Self {
        Self { index, client }
    }

    pub async fn query(&self, question: &str) -> PipelineResult<String> {
        let context = self
            .index
            .query(question, DEFAULT_TOP_K, self.client)
            .await?
            .join("\n\n---\n\n");

        let prompt = format!(
            "Answer the question using only the context below.\n\n\
             Context:\n{context}\n\nQuestion: {question}\nAnswer:"
        );

        let response = self.client.chat(&prompt).await?;
        Ok(response.content)
    }
}

/// Split text on blank lines, packing paragraphs into chunks of at most
/// `MAX_CHUNK_CHARS`. Oversized single paragraphs become their own chunk.
pub fn chunk_text(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for paragraph in text.split("\n\n") {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }

        if !current.is_empty() && current.len() + paragraph.len() + 2 > MAX_CHUNK_CHARS {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push_str("\n\n");
        }
        current.push_str(paragraph);
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

fn normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_text_splits_on_blank_lines() {
        let text = "first paragraph\n\nsecond paragraph";
        let chunks = chunk_text(text);
        assert_eq!(chunks, vec!["first paragraph\n\nsecond paragraph"]);
    }

    #[test]
    fn test_chunk_text_respects_size_cap() {
        let paragraph = "x".repeat(1500);
        let text = format!("{paragraph}\n\n{paragraph}");
        let chunks = chunk_text(&text);
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.len() <= 2000));
    }

    #[test]
    fn test_chunk_text_skips_empty_paragraphs() {
        let chunks = chunk_text("\n\n\n\nonly content\n\n\n\n");
        assert_eq!(chunks, vec!["only content"]);
    }

    #[test]
    fn test_normalize_produces_unit_vectors() {
        let mut vector = vec![3.0, 4.0];
        normalize(&mut vector);
        assert!((dot(&vector, &vector) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_leaves_zero_vector_alone() {
        let mut vector = vec![0.0, 0.0];
        normalize(&mut vector);
        assert_eq!(vector, vec![0.0, 0.0]);
    }
}
