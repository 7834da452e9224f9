use thiserror::Error;

/// Error taxonomy for the tutoring core.
///
/// `Generation` and `Parse` are recoverable in most call sites: the topic and
/// lesson generators degrade to empty results and the interview question
/// generator falls back to a generic question set. `Precondition` means the
/// caller drove the API out of sequence and is never silently tolerated.
#[derive(Debug, Error)]
pub enum TutorError {
    /// The completion provider was unreachable or returned an error status.
    #[error("generation failed: {0}")]
    Generation(String),

    /// Model output did not match the expected delimiter or line format.
    #[error("could not parse model output: {0}")]
    Parse(String),

    /// The caller violated an API sequencing rule (e.g. submitting an answer
    /// when no interview is in progress).
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// A document collaborator failed to extract text from its input.
    #[error("document extraction failed: {0}")]
    Extraction(String),
}

pub type Result<T> = std::result::Result<T, TutorError>;
