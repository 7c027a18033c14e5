//! Wrapper placement resolver.
//!
//! Attaches each wrapper fragment to empty cells next to the end of the grid
//! word it annotates: inline along the word's axis first, then on parallel
//! rows/columns at increasing perpendicular distance.

use crate::corpus::wrapper_span;
use crate::layout::ScratchLayout;
use crate::models::{CellKind, CellPos, Direction, Grid, PlacedWord, WordFragment};
use tracing::debug;

/// Furthest inline offset (in cells past the word's end) a wrapper may start at.
const MAX_INLINE_OFFSET: isize = 3;

/// Perpendicular offsets tried when inline placement fails, in order.
const PERPENDICULAR_OFFSETS: [isize; 6] = [1, -1, 2, -2, 3, -3];

fn anchor_word<'a>(
    layout: &'a ScratchLayout,
    fragment: &WordFragment,
) -> Option<&'a PlacedWord> {
    let grid_words = || layout.words().iter().rev().filter(|word| !word.is_wrapper);
    grid_words()
        .find(|word| word.segment_id == fragment.segment_id)
        .or_else(|| grid_words().find(|word| word.group_id == fragment.group_id))
}

fn run_is_free(grid: &Grid, start: CellPos, direction: Direction, span: usize) -> bool {
    (0..span).all(|step| {
        let pos = start.along(direction, step);
        grid.contains(pos) && grid.kind_at(pos) == CellKind::Empty
    })
}

/// Along-axis shifts around the anchor: `0, -1, 1, -2, 2, ...`.
fn along_shifts(span: usize) -> impl Iterator<Item = isize> {
    let reach = span.max(MAX_INLINE_OFFSET as usize) as isize;
    std::iter::once(0).chain((1..=reach).flat_map(|step| [-step, step]))
}

/// Finds the first free run for a wrapper of `span` cells next to `word`.
pub(crate) fn find_wrapper_slot(grid: &Grid, word: &PlacedWord, span: usize) -> Option<CellPos> {
    let direction = word.direction;
    let (d_row, d_col) = direction.delta();
    let (p_row, p_col) = direction.perpendicular_delta();
    let end = word.end();

    let inline = (1..=MAX_INLINE_OFFSET)
        .filter_map(|offset| grid.offset(end, d_row * offset, d_col * offset))
        .find(|start| run_is_free(grid, *start, direction, span));
    if inline.is_some() {
        return inline;
    }

    for perpendicular in PERPENDICULAR_OFFSETS {
        for shift in along_shifts(span) {
            let along = 1 + shift;
            let Some(start) = grid.offset(
                end,
                d_row * along + p_row * perpendicular,
                d_col * along + p_col * perpendicular,
            ) else {
                continue;
            };
            if run_is_free(grid, start, direction, span) {
                return Some(start);
            }
        }
    }
    None
}

/// Place wrapper fragments beside their grid words.
///
/// Unplaceable wrappers are dropped without failing generation.
///
/// # Returns
/// Number of wrappers placed.
pub fn resolve_wrappers(layout: &mut ScratchLayout, wrappers: &[&WordFragment]) -> usize {
    let mut placed = 0;
    for fragment in wrappers.iter().filter(|fragment| fragment.is_wrapper) {
        let Some(word) = anchor_word(layout, fragment).cloned() else {
            debug!(text = %fragment.text, "dropping wrapper without a placed anchor word");
            continue;
        };
        let span = wrapper_span(fragment.text.chars().count());
        let Some(start) = find_wrapper_slot(layout.grid(), &word, span) else {
            debug!(text = %fragment.text, "dropping wrapper with no free cells");
            continue;
        };

        let id = layout.allocate_id();
        for step in 0..span {
            let pos = start.along(word.direction, step);
            if let Some(cell) = layout.grid_mut().get_mut(pos) {
                cell.kind = CellKind::Wrapper;
                cell.word_id = Some(id);
                cell.direction = Some(word.direction);
                if step == 0 {
                    cell.wrapper_text = Some(fragment.text.clone());
                    cell.cell_span = Some(span);
                }
            }
            layout.claim(pos, word.direction, id);
        }
        layout.push_word(PlacedWord {
            id,
            text: fragment.text.clone(),
            clue: fragment.clue.clone(),
            direction: word.direction,
            start_row: start.row,
            start_col: start.col,
            length: span,
            number: None,
            is_wrapper: true,
            group_id: fragment.group_id.clone(),
            part_index: fragment.part_index,
            segment_id: fragment.segment_id.clone(),
        });
        placed += 1;
    }
    placed
}
