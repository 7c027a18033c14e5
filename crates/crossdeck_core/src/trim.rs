//! Grid trimmer: shrink the scratch grid to its content.

use crate::layout::ScratchLayout;
use crate::models::{CellKind, CellPos, DecorationLayout, Grid, GridCell, PlacedWord, Puzzle};

/// Inclusive bounding box of every non-`Empty` cell.
fn content_bounds(grid: &Grid) -> Option<(CellPos, CellPos)> {
    let mut bounds: Option<(CellPos, CellPos)> = None;
    for cell in grid.iter().filter(|cell| cell.kind != CellKind::Empty) {
        let (min, max) = bounds.get_or_insert((cell.pos(), cell.pos()));
        min.row = min.row.min(cell.row);
        min.col = min.col.min(cell.col);
        max.row = max.row.max(cell.row);
        max.col = max.col.max(cell.col);
    }
    bounds
}

fn copy_window(source: &Grid, origin: CellPos, rows: usize, cols: usize) -> Grid {
    let mut out = Grid::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            let from = CellPos::new(origin.row + row, origin.col + col);
            let to = CellPos::new(row, col);
            if let (Some(cell), Some(target)) = (source.get(from), out.get_mut(to)) {
                *target = GridCell {
                    row,
                    col,
                    ..cell.clone()
                };
            }
        }
    }
    out
}

/// Appends a top-right placeholder block of `block_rows`×`block_cols` cells.
fn pad_top_right(grid: &Grid, block_rows: usize, block_cols: usize) -> Grid {
    let rows = grid.rows().max(block_rows);
    let cols = grid.cols() + block_cols;
    let mut out = copy_window(grid, CellPos::new(0, 0), rows, cols);
    for row in 0..block_rows {
        for col in grid.cols()..cols {
            if let Some(cell) = out.get_mut(CellPos::new(row, col)) {
                cell.kind = CellKind::Placeholder;
            }
        }
    }
    out
}

/// Trim a scratch layout into a playable puzzle.
///
/// Cells and word start coordinates are re-indexed to the bounding box of all
/// non-`Empty` cells. A top-right decoration block is added after trimming so
/// it is never trimmed away.
pub fn trim_layout(layout: ScratchLayout, decoration: DecorationLayout) -> Puzzle {
    let (scratch, words) = layout.into_parts();
    let Some((min, max)) = content_bounds(&scratch) else {
        return Puzzle::new(Grid::new(0, 0), Vec::new());
    };
    let rows = max.row - min.row + 1;
    let cols = max.col - min.col + 1;
    let mut grid = copy_window(&scratch, min, rows, cols);

    let words: Vec<PlacedWord> = words
        .into_iter()
        .map(|word| PlacedWord {
            start_row: word.start_row - min.row,
            start_col: word.start_col - min.col,
            ..word
        })
        .collect();

    if let DecorationLayout::TopRight {
        rows: block_rows,
        cols: block_cols,
    } = decoration
    {
        if block_rows > 0 && block_cols > 0 {
            grid = pad_top_right(&grid, block_rows, block_cols);
        }
    }
    Puzzle::new(grid, words)
}
