//! Interaction controller: selection, typing, navigation, and completion.
//!
//! A [`GameSession`] owns one live puzzle. Every command is a synchronous
//! state transition; commands that can finish words return the resulting
//! [`SessionEvent`]s so callers can drive progress UI.

use crate::deck::DeckCatalog;
use crate::error::PuzzleError;
use crate::generate::{generate_puzzle, GenerationOptions};
use crate::models::{
    AnswerSource, CellPos, Difficulty, Direction, PlacedWord, Puzzle, WordId,
};
use crate::reveal::reveal_letters;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Current selection and the monotonic set of completed words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected: Option<CellPos>,
    pub direction: Direction,
    /// Words that have been fully correct at least once. Never shrinks.
    pub completed: BTreeSet<WordId>,
}

/// Notifications produced by session commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    WordCompleted { word_id: WordId },
    Progress { completed: usize, total: usize },
    PuzzleCompleted,
}

/// Arrow-key navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
}

impl NavKey {
    pub fn direction(self) -> Direction {
        match self {
            Self::Left | Self::Right => Direction::Across,
            Self::Up | Self::Down => Direction::Down,
        }
    }

    fn forward(self) -> bool {
        matches!(self, Self::Right | Self::Down)
    }
}

/// One playable puzzle together with the inputs needed to regenerate it.
#[derive(Debug)]
pub struct GameSession {
    deck_id: String,
    sources: Vec<AnswerSource>,
    difficulty: Difficulty,
    options: GenerationOptions,
    rng: StdRng,
    puzzle: Puzzle,
    selection: SelectionState,
    generation: u64,
}

fn build_puzzle(
    sources: &[AnswerSource],
    difficulty: Difficulty,
    options: &GenerationOptions,
    rng: &mut StdRng,
) -> Result<Puzzle, PuzzleError> {
    let mut puzzle = generate_puzzle(sources, options)?;
    let revealed = reveal_letters(&mut puzzle, difficulty.reveal_percent(), rng);
    debug!(revealed, difficulty = %difficulty, "pre-filled letters");
    Ok(puzzle)
}

impl GameSession {
    /// Start a session from a catalog deck.
    ///
    /// # Errors
    /// Fails when the deck is unknown or its corpus is too small.
    pub fn start(
        catalog: &DeckCatalog,
        deck_id: &str,
        difficulty: Difficulty,
        options: GenerationOptions,
        seed: Option<u64>,
    ) -> Result<Self, PuzzleError> {
        let sources = catalog.resolve(deck_id)?.to_vec();
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::from_sources(deck_id, sources, difficulty, options, rng)
    }

    /// Start a session from raw answer sources and an explicit random source.
    pub fn from_sources(
        deck_id: impl Into<String>,
        sources: Vec<AnswerSource>,
        difficulty: Difficulty,
        options: GenerationOptions,
        mut rng: StdRng,
    ) -> Result<Self, PuzzleError> {
        let deck_id = deck_id.into();
        let puzzle = build_puzzle(&sources, difficulty, &options, &mut rng)?;
        info!(
            deck = %deck_id,
            difficulty = %difficulty,
            words = puzzle.playable_word_count(),
            "session started"
        );
        Ok(Self {
            deck_id,
            sources,
            difficulty,
            options,
            rng,
            puzzle,
            selection: SelectionState::default(),
            generation: 0,
        })
    }

    /// Build a fresh puzzle from the same deck, discarding progress.
    ///
    /// On failure the current puzzle is kept.
    pub fn regenerate(&mut self) -> Result<(), PuzzleError> {
        let puzzle = build_puzzle(&self.sources, self.difficulty, &self.options, &mut self.rng)?;
        self.puzzle = puzzle;
        self.selection = SelectionState::default();
        self.generation += 1;
        info!(deck = %self.deck_id, generation = self.generation, "puzzle regenerated");
        Ok(())
    }

    /// Change difficulty and regenerate.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), PuzzleError> {
        let previous = std::mem::replace(&mut self.difficulty, difficulty);
        self.regenerate().inspect_err(|_| self.difficulty = previous)
    }

    /// End the session.
    pub fn quit(self) {
        let (completed, total) = self.progress();
        info!(deck = %self.deck_id, completed, total, "session closed");
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn deck_id(&self) -> &str {
        &self.deck_id
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Counter bumped on every regeneration.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `(completed, total)` playable words.
    pub fn progress(&self) -> (usize, usize) {
        (
            self.selection.completed.len(),
            self.puzzle.playable_word_count(),
        )
    }

    pub fn is_complete(&self) -> bool {
        let (completed, total) = self.progress();
        total > 0 && completed == total
    }

    /// Select the cell at `(row, col)`.
    ///
    /// Re-selecting the current cell toggles the direction. Unselectable or
    /// out-of-bounds cells are ignored.
    ///
    /// # Returns
    /// `true` when the selection changed.
    pub fn select(&mut self, row: usize, col: usize) -> bool {
        let pos = CellPos::new(row, col);
        let Some(cell) = self.puzzle.grid().get(pos) else {
            return false;
        };
        if !cell.kind.is_selectable() {
            return false;
        }
        if self.selection.selected == Some(pos) {
            self.selection.direction = self.selection.direction.toggled();
        } else {
            self.selection.selected = Some(pos);
            if let Some(direction) = cell.direction {
                self.selection.direction = direction;
            }
        }
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.selected = None;
    }

    /// Type a letter into the selected cell.
    pub fn input(&mut self, ch: char) -> Vec<SessionEvent> {
        let ch = ch.to_ascii_uppercase();
        if !ch.is_ascii_uppercase() {
            return Vec::new();
        }
        let Some(pos) = self.selection.selected else {
            return Vec::new();
        };
        let Some(cell) = self.puzzle.grid_mut().get_mut(pos) else {
            return Vec::new();
        };
        if cell.kind.is_blocked() || cell.is_correct() {
            return Vec::new();
        }
        cell.value = Some(ch);
        let matched = cell.letter == Some(ch);

        let events = self.check_completion(pos);
        if matched {
            if let Some(next) = self.next_fillable(pos) {
                self.selection.selected = Some(next);
            }
        }
        events
    }

    /// Clear the selected cell (unless correct) and step back.
    pub fn backspace(&mut self) {
        let Some(pos) = self.selection.selected else {
            return;
        };
        self.clear_cell(pos);
        if let Some(prev) = self.next_open(pos, self.selection.direction, false) {
            self.selection.selected = Some(prev);
        }
    }

    /// Clear the selected cell (unless correct) without moving.
    pub fn delete(&mut self) {
        if let Some(pos) = self.selection.selected {
            self.clear_cell(pos);
        }
    }

    /// Move the selection one letter cell along the arrow's axis.
    ///
    /// # Returns
    /// `true` when the selection moved.
    pub fn navigate(&mut self, key: NavKey) -> bool {
        let Some(pos) = self.selection.selected else {
            return false;
        };
        let direction = key.direction();
        match self.next_open(pos, direction, key.forward()) {
            Some(next) => {
                self.selection.selected = Some(next);
                self.selection.direction = direction;
                true
            }
            None => false,
        }
    }

    /// Fill the cell at `(row, col)` with its solution.
    pub fn reveal(&mut self, row: usize, col: usize) -> Vec<SessionEvent> {
        let pos = CellPos::new(row, col);
        let Some(cell) = self.puzzle.grid_mut().get_mut(pos) else {
            return Vec::new();
        };
        if !cell.kind.is_letter() {
            return Vec::new();
        }
        cell.value = cell.letter;
        debug!(row, col, "cell revealed");
        self.check_completion(pos)
    }

    /// Word the selection is currently on, preferring the active direction.
    pub fn active_word(&self) -> Option<&PlacedWord> {
        let pos = self.selection.selected?;
        let direction = self.selection.direction;
        self.puzzle
            .word_containing(pos, direction)
            .or_else(|| self.puzzle.word_containing(pos, direction.toggled()))
    }

    /// Every cell of the source phrase the selection belongs to.
    pub fn active_group_cells(&self) -> Vec<CellPos> {
        self.selection
            .selected
            .and_then(|pos| self.puzzle.group_at(pos))
            .map(|group| self.puzzle.group_cells(group))
            .unwrap_or_default()
    }

    fn clear_cell(&mut self, pos: CellPos) {
        if let Some(cell) = self.puzzle.grid_mut().get_mut(pos) {
            if cell.kind.is_letter() && !cell.is_correct() {
                cell.value = None;
            }
        }
    }

    /// Next letter cell along `direction`, skipping blocked cells.
    fn next_open(&self, from: CellPos, direction: Direction, forward: bool) -> Option<CellPos> {
        let grid = self.puzzle.grid();
        let mut pos = from;
        loop {
            pos = grid.step(pos, direction, forward)?;
            if !grid.kind_at(pos).is_blocked() {
                return Some(pos);
            }
        }
    }

    /// Next letter cell along the selection direction that has no value yet.
    fn next_fillable(&self, from: CellPos) -> Option<CellPos> {
        let grid = self.puzzle.grid();
        let direction = self.selection.direction;
        let mut pos = from;
        loop {
            pos = self.next_open(pos, direction, true)?;
            if grid.get(pos).is_some_and(|cell| cell.value.is_none()) {
                return Some(pos);
            }
        }
    }

    fn check_completion(&mut self, pos: CellPos) -> Vec<SessionEvent> {
        let newly: Vec<WordId> = self
            .puzzle
            .words_at(pos)
            .filter(|word| !word.is_wrapper)
            .map(|word| word.id)
            .filter(|id| !self.selection.completed.contains(id))
            .filter(|id| self.puzzle.is_word_complete(*id))
            .collect();
        if newly.is_empty() {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(newly.len() + 2);
        for word_id in newly {
            self.selection.completed.insert(word_id);
            events.push(SessionEvent::WordCompleted { word_id });
        }
        let (completed, total) = self.progress();
        events.push(SessionEvent::Progress { completed, total });
        if completed == total {
            info!(deck = %self.deck_id, total, "puzzle completed");
            events.push(SessionEvent::PuzzleCompleted);
        }
        events
    }
}

#[cfg(test)]
mod tests;
