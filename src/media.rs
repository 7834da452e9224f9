//! Collaborator seams for document and media ingestion. The core never
//! parses binary formats itself; the shell plugs in implementations.

use async_trait::async_trait;

use crate::error::Result;

/// Extracts plain text from an uploaded document (e.g. a resume PDF).
///
/// Malformed documents must surface as
/// [`TutorError::Extraction`](crate::TutorError::Extraction), not as empty
/// text.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract_text(&self, document: &[u8]) -> Result<String>;
}

/// Turns an audio or video answer into plain text. The transcript is fed to
/// the interview session unchanged.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, media: &[u8]) -> Result<String>;
}
