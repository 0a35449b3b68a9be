//! Pipeline service implementations

pub mod document_loader;
pub mod provider;

#[cfg(test)]
pub mod tests;

pub use document_loader::RealDocumentLoader;
pub use provider::OpenAiClient;
