//! Placement validity and scoring.

use super::ScratchLayout;
use crate::constants::WRAPPER_PLACEHOLDER;
use crate::models::{CellKind, CellPos, Direction};

/// A candidate slot for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub start: CellPos,
    pub direction: Direction,
    pub intersections: usize,
    /// Manhattan distance from the word's middle cell to the grid centre.
    pub distance: usize,
}

/// Checks whether `chars` fit at `start` along `direction`.
///
/// # Returns
/// The number of intersections with existing letters, or `None` when the word
/// cannot be placed there.
pub(crate) fn intersections_at(
    layout: &ScratchLayout,
    chars: &[char],
    start: CellPos,
    direction: Direction,
) -> Option<usize> {
    if chars.is_empty() {
        return None;
    }
    let grid = layout.grid();
    let (d_row, d_col) = direction.delta();
    let last = chars.len() as isize - 1;
    grid.offset(start, d_row * last, d_col * last)?;

    // End caps must stay clear so runs never merge with neighbouring words.
    for cap in [
        grid.offset(start, -d_row, -d_col),
        grid.offset(start, d_row * (last + 1), d_col * (last + 1)),
    ]
    .into_iter()
    .flatten()
    {
        if !matches!(grid.kind_at(cap), CellKind::Empty | CellKind::Placeholder) {
            return None;
        }
    }

    let mut intersections = 0;
    for (step, ch) in chars.iter().enumerate() {
        let pos = start.along(direction, step);
        let cell = grid.get(pos)?;
        match *ch {
            ' ' => {
                if !matches!(
                    cell.kind,
                    CellKind::Empty | CellKind::Space | CellKind::Placeholder
                ) {
                    return None;
                }
                if cell.kind == CellKind::Space && layout.is_claimed(pos, direction) {
                    return None;
                }
            }
            WRAPPER_PLACEHOLDER => {
                if cell.kind != CellKind::Empty {
                    return None;
                }
            }
            letter => match cell.kind {
                CellKind::Empty => {}
                CellKind::Filled | CellKind::Start
                    if cell.letter == Some(letter) && !layout.is_claimed(pos, direction) =>
                {
                    intersections += 1;
                }
                _ => return None,
            },
        }
    }
    Some(intersections)
}

/// Scans every row, column, and direction for the best slot.
///
/// More intersections win; ties go to the slot closest to the grid centre and
/// then to the first slot scanned.
pub(crate) fn best_placement(
    layout: &ScratchLayout,
    chars: &[char],
    require_intersection: bool,
) -> Option<Placement> {
    let size = layout.size();
    let center = layout.center();
    let half = chars.len() / 2;
    let mut best: Option<Placement> = None;

    for direction in Direction::ALL {
        for row in 0..size {
            for col in 0..size {
                let start = CellPos::new(row, col);
                let Some(intersections) = intersections_at(layout, chars, start, direction) else {
                    continue;
                };
                if require_intersection && intersections == 0 {
                    continue;
                }
                let middle = start.along(direction, half);
                let candidate = Placement {
                    start,
                    direction,
                    intersections,
                    distance: middle.manhattan(center),
                };
                let better = match best {
                    None => true,
                    Some(current) => {
                        candidate.intersections > current.intersections
                            || (candidate.intersections == current.intersections
                                && candidate.distance < current.distance)
                    }
                };
                if better {
                    best = Some(candidate);
                }
            }
        }
    }
    best
}
