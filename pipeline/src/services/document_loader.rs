//! Plain-text document loading

use std::path::Path;
use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::error::{PipelineError, PipelineResult};
use crate::traits::DocumentLoader;
use crate::types::Document;

/// Extensions treated as readable documents
const DOCUMENT_EXTENSIONS: &[&str] = &["txt", "md"];

/// Reads `.txt`/`.md` files from a directory, sorted by file name
#[derive(Debug, Clone, Default)]
pub struct RealDocumentLoader;

impl RealDocumentLoader {
    pub fn new() -> Self {
        Self
    }

    fn is_document(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| DOCUMENT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false)
    }
}

#[async_trait]
impl DocumentLoader for RealDocumentLoader {
    async fn load_documents(&self, dir: &Path) -> PipelineResult<Vec<Document>> {
        let mut entries = fs::read_dir(dir).await.map_err(|e| {
            PipelineError::DocumentLoadError {
                path: dir.display().to_string(),
                message: e.to_string(),
            }
        })?;

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.is_file() && Self::is_document(&path) {
                paths.push(path);
            }
        }
        // Deterministic document order regardless of directory listing order
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let text = fs::read_to_string(&path).await.map_err(|e| {
                PipelineError::DocumentLoadError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                }
            })?;
            debug!(path = %path.display(), bytes = text.len(), "Loaded document");
            documents.push(Document { path, text });
        }

        if documents.is_empty() {
            return Err(PipelineError::DocumentLoadError {
                path: dir.display().to_string(),
                message: "no documents found".to_string(),
            });
        }

        Ok(documents)
    }
}
