//! Data models shared by the generator, session controller, and renderers.

/// Answer sources and classified word fragments.
pub mod fragment;
/// Grid cells, directions, and the owned 2D grid.
pub mod grid;
/// Difficulty and decoration layout options.
pub mod options;
/// Placed words, the word index, and the assembled puzzle.
pub mod puzzle;

pub use fragment::{AnswerSource, WordFragment, WrapperSegment};
pub use grid::{CellKind, CellPos, Direction, Grid, GridCell};
pub use options::{DecorationLayout, Difficulty};
pub use puzzle::{CellWords, PlacedWord, Puzzle, PuzzleSize, WordId, WordIndex};
