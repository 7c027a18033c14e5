//! Error types for puzzle generation and deck loading.
use thiserror::Error;

/// Top-level error type for the core crate.
#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("Insufficient data: {eligible} eligible grid words (need at least 3)")]
    InsufficientCorpus { eligible: usize },

    #[error("Deck not found: {0}")]
    DeckNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PuzzleError {
    /// Returns true when generation failed because the corpus was too small.
    pub fn is_insufficient_corpus(&self) -> bool {
        matches!(self, Self::InsufficientCorpus { .. })
    }
}
