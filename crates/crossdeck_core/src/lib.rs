//! Core domain library for Crossdeck (corpus, layout, session state).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across Crossdeck crates.
pub mod constants;
/// Word corpus builder: raw answer items to classified fragments.
pub mod corpus;
/// Deck catalog supplying answer sources.
pub mod deck;
/// Error types for generation and deck loading.
pub mod error;
/// End-to-end puzzle generation pipeline.
pub mod generate;
/// Grid layout synthesizer.
pub mod layout;
/// Puzzle data model.
pub mod models;
/// Pre-play letter reveal scheduling.
pub mod reveal;
/// Interaction controller for a live puzzle.
pub mod session;
/// Bounding-box trimming of the scratch grid.
pub mod trim;
/// Placement of wrapper annotations next to grid words.
pub mod wrapper;

pub use config::Config;
pub use deck::{Deck, DeckCatalog};
pub use error::PuzzleError;
pub use generate::{generate_puzzle, try_generate, GenerationOptions};
pub use models::{
    AnswerSource, CellKind, CellPos, DecorationLayout, Difficulty, Direction, Grid, GridCell,
    PlacedWord, Puzzle, WordFragment, WordId,
};
pub use session::{GameSession, NavKey, SelectionState, SessionEvent};
