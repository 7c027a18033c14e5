//! Grid cells, directions, and the owned row-major grid.

use super::puzzle::WordId;
use serde::{Deserialize, Serialize};

/// Zero-based grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offsets the position, returning `None` when either axis would go negative.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self { row, col })
    }

    /// Position `steps` cells further along `direction`.
    pub fn along(self, direction: Direction, steps: usize) -> Self {
        match direction {
            Direction::Across => Self::new(self.row, self.col + steps),
            Direction::Down => Self::new(self.row + steps, self.col),
        }
    }

    /// Manhattan distance between two positions.
    pub fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// Word orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Across,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Across, Direction::Down];

    pub fn toggled(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// `(row, col)` step along this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Self::Across => (0, 1),
            Self::Down => (1, 0),
        }
    }

    /// `(row, col)` step perpendicular to this direction.
    pub fn perpendicular_delta(self) -> (isize, isize) {
        self.toggled().delta()
    }
}

/// Role of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellKind {
    #[default]
    Empty,
    Filled,
    Start,
    Space,
    Placeholder,
    Wrapper,
}

impl CellKind {
    /// Cells that hold a guessable letter.
    pub fn is_letter(self) -> bool {
        matches!(self, Self::Filled | Self::Start)
    }

    /// Cells a click or tap may select.
    pub fn is_selectable(self) -> bool {
        !matches!(self, Self::Empty | Self::Space | Self::Placeholder)
    }

    /// Cells that never accept typed input.
    pub fn is_blocked(self) -> bool {
        !self.is_letter()
    }
}

/// One cell of the puzzle grid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    /// Solution letter.
    pub letter: Option<char>,
    /// User-entered letter.
    pub value: Option<char>,
    pub kind: CellKind,
    pub word_id: Option<WordId>,
    /// Primary direction: that of the first word to claim the cell.
    pub direction: Option<Direction>,
    pub number: Option<u32>,
    pub number_direction: Option<Direction>,
    /// Annotation text, set only on the first cell of a wrapper run.
    pub wrapper_text: Option<String>,
    /// Run length, set only on the first cell of a wrapper run.
    pub cell_span: Option<usize>,
}

impl GridCell {
    pub fn empty(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            ..Self::default()
        }
    }

    pub fn pos(&self) -> CellPos {
        CellPos::new(self.row, self.col)
    }

    /// True when the cell holds its solution letter.
    pub fn is_correct(&self) -> bool {
        self.letter.is_some() && self.value == self.letter
    }

    /// True when the cell holds a letter that differs from the solution.
    pub fn is_incorrect(&self) -> bool {
        self.kind.is_letter() && self.value.is_some() && self.value != self.letter
    }
}

/// Owned row-major grid of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<GridCell>,
}

impl Grid {
    /// Allocates a grid of `Empty` cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(GridCell::empty(row, col));
            }
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn get(&self, pos: CellPos) -> Option<&GridCell> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get(pos.row * self.cols + pos.col)
    }

    pub fn get_mut(&mut self, pos: CellPos) -> Option<&mut GridCell> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get_mut(pos.row * self.cols + pos.col)
    }

    /// Kind of the cell at `pos`, or `Empty` when out of bounds.
    pub fn kind_at(&self, pos: CellPos) -> CellKind {
        self.get(pos).map(|cell| cell.kind).unwrap_or_default()
    }

    /// Offsets `pos` and returns the result only if it stays inside the grid.
    pub fn offset(&self, pos: CellPos, d_row: isize, d_col: isize) -> Option<CellPos> {
        pos.offset(d_row, d_col).filter(|next| self.contains(*next))
    }

    /// Neighbour one step along `direction` (backwards when `forward` is false).
    pub fn step(&self, pos: CellPos, direction: Direction, forward: bool) -> Option<CellPos> {
        let (d_row, d_col) = direction.delta();
        let sign = if forward { 1 } else { -1 };
        self.offset(pos, d_row * sign, d_col * sign)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut GridCell> {
        self.cells.iter_mut()
    }

    /// Cells of one row, or an empty slice when out of bounds.
    pub fn row(&self, row: usize) -> &[GridCell] {
        if row >= self.rows {
            return &[];
        }
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }
}
