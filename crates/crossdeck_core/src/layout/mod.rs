//! Grid layout synthesizer.
//!
//! Places the longest grid fragment through the middle of a square scratch grid,
//! then greedily places every remaining fragment (longest first) at the position
//! with the most letter intersections, preferring spots near the centre.

mod placement;

pub use placement::Placement;

use crate::constants::{MIN_SCRATCH_GRID, SCRATCH_GRID_PADDING, WRAPPER_PLACEHOLDER};
use crate::models::{
    CellKind, CellPos, CellWords, DecorationLayout, Direction, Grid, PlacedWord, WordFragment,
    WordId,
};
use placement::best_placement;
use std::collections::HashMap;
use tracing::debug;

/// Side length of the scratch grid for a longest word of `longest` cells.
///
/// Never exceeds `max_grid` for words that pass the corpus length cap.
pub fn scratch_size(longest: usize, max_grid: usize) -> usize {
    MIN_SCRATCH_GRID
        .min(max_grid)
        .max(longest + SCRATCH_GRID_PADDING)
}

/// Rectangle reserved for decoration, in scratch-grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockBounds {
    pub top: usize,
    pub left: usize,
    pub rows: usize,
    pub cols: usize,
}

/// Mutable scratch grid plus the words placed on it so far.
#[derive(Debug, Clone)]
pub struct ScratchLayout {
    grid: Grid,
    words: Vec<PlacedWord>,
    claims: HashMap<CellPos, CellWords>,
    block: Option<BlockBounds>,
    next_number: u32,
    next_id: u32,
}

impl ScratchLayout {
    /// Allocates a `size`×`size` grid, reserving a centered block when requested.
    pub fn new(size: usize, decoration: DecorationLayout) -> Self {
        let mut grid = Grid::new(size, size);
        let block = match decoration {
            DecorationLayout::Centered { rows, cols } if rows > 0 && cols > 0 => {
                let rows = rows.min(size);
                let cols = cols.min(size);
                let bounds = BlockBounds {
                    top: (size - rows) / 2,
                    left: (size - cols) / 2,
                    rows,
                    cols,
                };
                for row in bounds.top..bounds.top + rows {
                    for col in bounds.left..bounds.left + cols {
                        if let Some(cell) = grid.get_mut(CellPos::new(row, col)) {
                            cell.kind = CellKind::Placeholder;
                        }
                    }
                }
                Some(bounds)
            }
            _ => None,
        };
        Self {
            grid,
            words: Vec::new(),
            claims: HashMap::new(),
            block,
            next_number: 1,
            next_id: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.grid.rows()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    pub fn block(&self) -> Option<BlockBounds> {
        self.block
    }

    pub fn center(&self) -> CellPos {
        CellPos::new(self.grid.rows() / 2, self.grid.cols() / 2)
    }

    /// Returns whether `pos` is already covered by a word running in `direction`.
    pub(crate) fn is_claimed(&self, pos: CellPos, direction: Direction) -> bool {
        self.claims
            .get(&pos)
            .is_some_and(|words| words.get(direction).is_some())
    }

    pub(crate) fn claim(&mut self, pos: CellPos, direction: Direction, id: WordId) {
        self.claims.entry(pos).or_default().set(direction, id);
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub(crate) fn allocate_id(&mut self) -> WordId {
        let id = WordId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn push_word(&mut self, word: PlacedWord) {
        self.words.push(word);
    }

    /// Starting cell for the first word: centered, or just above the block.
    fn first_word_start(&self, len: usize) -> CellPos {
        let size = self.size();
        let row = match self.block {
            Some(block) => block.top.saturating_sub(2),
            None => size / 2,
        };
        CellPos::new(row, size.saturating_sub(len) / 2)
    }

    /// Writes a fragment onto the grid and records it as a placed word.
    ///
    /// The first letter cell without a clue number receives the next number and
    /// becomes a `Start` cell. Cells already numbered keep their number.
    pub fn place(
        &mut self,
        fragment: &WordFragment,
        start: CellPos,
        direction: Direction,
    ) -> WordId {
        let id = self.allocate_id();
        let mut number = None;
        let length = fragment.cell_len();

        for (step, ch) in fragment.text.chars().enumerate() {
            let pos = start.along(direction, step);
            let next_number = self.next_number;
            let Some(cell) = self.grid.get_mut(pos) else {
                continue;
            };
            match ch {
                ' ' => {
                    if cell.kind == CellKind::Placeholder {
                        continue;
                    }
                    cell.kind = CellKind::Space;
                    cell.word_id.get_or_insert(id);
                    cell.direction.get_or_insert(direction);
                }
                WRAPPER_PLACEHOLDER => {
                    cell.kind = CellKind::Wrapper;
                    cell.word_id = Some(id);
                    cell.direction = Some(direction);
                    if let Some(segment) = fragment.segment_at(step) {
                        cell.wrapper_text = Some(segment.text.clone());
                        cell.cell_span = Some(segment.span);
                    }
                }
                letter => {
                    if cell.kind == CellKind::Empty {
                        cell.kind = CellKind::Filled;
                        cell.letter = Some(letter);
                        cell.word_id = Some(id);
                        cell.direction = Some(direction);
                    }
                    if number.is_none() && cell.number.is_none() {
                        cell.number = Some(next_number);
                        cell.number_direction = Some(direction);
                        cell.kind = CellKind::Start;
                        number = Some(next_number);
                        self.next_number += 1;
                    }
                }
            }
            self.claim(pos, direction, id);
        }

        self.words.push(PlacedWord {
            id,
            text: fragment.text.clone(),
            clue: fragment.clue.clone(),
            direction,
            start_row: start.row,
            start_col: start.col,
            length,
            number,
            is_wrapper: false,
            group_id: fragment.group_id.clone(),
            part_index: fragment.part_index,
            segment_id: fragment.segment_id.clone(),
        });
        id
    }

    pub fn into_parts(self) -> (Grid, Vec<PlacedWord>) {
        (self.grid, self.words)
    }
}

/// Lay out grid fragments on a fresh scratch grid.
///
/// Fragments that fit nowhere are omitted and logged.
///
/// # Returns
/// The populated scratch layout, or `None` when `fragments` is empty.
pub fn synthesize(
    fragments: &[&WordFragment],
    decoration: DecorationLayout,
    max_grid: usize,
) -> Option<ScratchLayout> {
    let mut ordered: Vec<&WordFragment> = fragments.to_vec();
    ordered.sort_by_key(|fragment| std::cmp::Reverse(fragment.cell_len()));
    let (first, rest) = ordered.split_first()?;

    let mut layout = ScratchLayout::new(scratch_size(first.cell_len(), max_grid), decoration);
    let start = layout.first_word_start(first.cell_len());
    layout.place(first, start, Direction::Across);

    for fragment in rest {
        let chars: Vec<char> = fragment.text.chars().collect();
        let placement = best_placement(&layout, &chars, true)
            .or_else(|| best_placement(&layout, &chars, false));
        match placement {
            Some(placement) => {
                if placement.intersections == 0 {
                    debug!(text = %fragment.text, "placing word without intersections");
                }
                layout.place(fragment, placement.start, placement.direction);
            }
            None => debug!(text = %fragment.text, "omitting word with no free slot"),
        }
    }

    debug!(
        size = layout.size(),
        placed = layout.words().len(),
        requested = fragments.len(),
        "grid layout synthesized"
    );
    Some(layout)
}
