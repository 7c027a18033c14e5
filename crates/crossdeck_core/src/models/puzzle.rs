//! Placed words, the cell-to-word index, and the assembled puzzle.

use super::grid::{CellKind, CellPos, Direction, Grid};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of a placed word, unique within one puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(pub u32);

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// A word (or wrapper annotation) placed on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub id: WordId,
    pub text: String,
    pub clue: String,
    pub direction: Direction,
    pub start_row: usize,
    pub start_col: usize,
    /// Number of cells occupied along `direction`.
    pub length: usize,
    pub number: Option<u32>,
    pub is_wrapper: bool,
    pub group_id: String,
    pub part_index: usize,
    pub segment_id: String,
}

impl PlacedWord {
    pub fn start(&self) -> CellPos {
        CellPos::new(self.start_row, self.start_col)
    }

    /// Every cell position covered by the word, in reading order.
    pub fn positions(&self) -> impl Iterator<Item = CellPos> + '_ {
        let start = self.start();
        (0..self.length).map(move |step| start.along(self.direction, step))
    }

    /// Last covered cell.
    pub fn end(&self) -> CellPos {
        self.start()
            .along(self.direction, self.length.saturating_sub(1))
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        self.positions().any(|candidate| candidate == pos)
    }
}

/// Across/down word ids that cover one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellWords {
    pub across: Option<WordId>,
    pub down: Option<WordId>,
}

impl CellWords {
    pub fn get(&self, direction: Direction) -> Option<WordId> {
        match direction {
            Direction::Across => self.across,
            Direction::Down => self.down,
        }
    }

    pub fn set(&mut self, direction: Direction, id: WordId) {
        match direction {
            Direction::Across => self.across = Some(id),
            Direction::Down => self.down = Some(id),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = WordId> {
        self.across.into_iter().chain(self.down)
    }
}

/// Map from cell to the words covering it, built once per puzzle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordIndex {
    cells: HashMap<CellPos, CellWords>,
}

impl WordIndex {
    pub fn build(words: &[PlacedWord]) -> Self {
        let mut cells: HashMap<CellPos, CellWords> = HashMap::new();
        for word in words {
            for pos in word.positions() {
                cells.entry(pos).or_default().set(word.direction, word.id);
            }
        }
        Self { cells }
    }

    pub fn get(&self, pos: CellPos) -> CellWords {
        self.cells.get(&pos).copied().unwrap_or_default()
    }

    pub fn word_in(&self, pos: CellPos, direction: Direction) -> Option<WordId> {
        self.get(pos).get(direction)
    }
}

/// Trimmed grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSize {
    pub rows: usize,
    pub cols: usize,
}

/// A generated puzzle: the grid and the words placed on it.
///
/// The grid is the source of truth for letters; `words` and the index are built
/// alongside it and never mutated independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    grid: Grid,
    words: Vec<PlacedWord>,
    #[serde(skip)]
    index: WordIndex,
}

impl Puzzle {
    pub fn new(grid: Grid, words: Vec<PlacedWord>) -> Self {
        let index = WordIndex::build(&words);
        Self { grid, words, index }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    pub fn size(&self) -> PuzzleSize {
        PuzzleSize {
            rows: self.grid.rows(),
            cols: self.grid.cols(),
        }
    }

    pub fn word(&self, id: WordId) -> Option<&PlacedWord> {
        self.words.iter().find(|word| word.id == id)
    }

    /// Word covering `pos` along `direction`.
    pub fn word_containing(&self, pos: CellPos, direction: Direction) -> Option<&PlacedWord> {
        self.index
            .word_in(pos, direction)
            .and_then(|id| self.word(id))
    }

    /// All words covering `pos` (at most one per direction).
    pub fn words_at(&self, pos: CellPos) -> impl Iterator<Item = &PlacedWord> + '_ {
        self.index
            .get(pos)
            .iter()
            .filter_map(move |id| self.word(id))
    }

    /// Words that count toward completion.
    pub fn playable_words(&self) -> impl Iterator<Item = &PlacedWord> + '_ {
        self.words.iter().filter(|word| !word.is_wrapper)
    }

    pub fn playable_word_count(&self) -> usize {
        self.playable_words().count()
    }

    /// Guessable letter cells of a word.
    pub fn letter_positions(&self, word: &PlacedWord) -> Vec<CellPos> {
        word.positions()
            .filter(|pos| self.grid.kind_at(*pos).is_letter())
            .collect()
    }

    /// A word is complete when every letter cell along it holds its solution.
    pub fn is_word_complete(&self, id: WordId) -> bool {
        let Some(word) = self.word(id) else {
            return false;
        };
        if word.is_wrapper {
            return false;
        }
        let letters = self.letter_positions(word);
        !letters.is_empty()
            && letters
                .iter()
                .all(|pos| self.grid.get(*pos).is_some_and(|cell| cell.is_correct()))
    }

    /// Source group of the word owning `pos`.
    pub fn group_at(&self, pos: CellPos) -> Option<&str> {
        let cell = self.grid.get(pos)?;
        cell.word_id
            .and_then(|id| self.word(id))
            .or_else(|| self.words_at(pos).next())
            .map(|word| word.group_id.as_str())
    }

    /// Every cell covered by any word of the group, including spaces and wrappers.
    pub fn group_cells(&self, group_id: &str) -> Vec<CellPos> {
        let mut cells: Vec<CellPos> = self
            .words
            .iter()
            .filter(|word| word.group_id == group_id)
            .flat_map(|word| word.positions())
            .collect();
        cells.sort_unstable();
        cells.dedup();
        cells
    }

    /// Inclusive bounds of the decorative placeholder block, if any.
    pub fn placeholder_bounds(&self) -> Option<(CellPos, CellPos)> {
        let mut placeholders = self
            .grid
            .iter()
            .filter(|cell| cell.kind == CellKind::Placeholder);
        let first = placeholders.next()?.pos();
        Some(placeholders.fold((first, first), |(min, max), cell| {
            (
                CellPos::new(min.row.min(cell.row), min.col.min(cell.col)),
                CellPos::new(max.row.max(cell.row), max.col.max(cell.col)),
            )
        }))
    }

    /// Plain-text dump of the grid.
    ///
    /// Letter cells show the solution when `solution` is set, otherwise the
    /// entered value or `_`. Empty cells are `.`, spaces `-`, placeholders `%`,
    /// and wrapper cells `+`.
    pub fn to_text_grid(&self, solution: bool) -> String {
        let mut out = String::with_capacity((self.grid.cols() + 1) * self.grid.rows());
        for row in 0..self.grid.rows() {
            for cell in self.grid.row(row) {
                let ch = match cell.kind {
                    CellKind::Empty => '.',
                    CellKind::Space => '-',
                    CellKind::Placeholder => '%',
                    CellKind::Wrapper => '+',
                    CellKind::Filled | CellKind::Start => {
                        if solution {
                            cell.letter.unwrap_or('?')
                        } else {
                            cell.value.unwrap_or('_')
                        }
                    }
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}
