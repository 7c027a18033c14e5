//! Reveal scheduler: pre-fill a share of each word's letters before play.

use crate::models::{CellPos, Puzzle, WordId};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Letters to reveal for a word of `letter_count` letters at `percent`.
///
/// # Returns
/// `floor(letter_count * percent / 100)`, capped at `letter_count - 1`.
pub fn letters_to_reveal(letter_count: usize, percent: u8) -> usize {
    let wanted = letter_count * usize::from(percent.min(100)) / 100;
    wanted.min(letter_count.saturating_sub(1))
}

/// Reveal a random, evenly spread subset of letters in every grid word.
///
/// Selection is uniform without replacement within each word. A cell is only
/// revealed while every word crossing it stays below its own letter count, so
/// no word is ever fully revealed.
///
/// # Returns
/// Number of cells revealed.
pub fn reveal_letters<R: Rng + ?Sized>(puzzle: &mut Puzzle, percent: u8, rng: &mut R) -> usize {
    if percent == 0 {
        return 0;
    }

    let words: Vec<(WordId, Vec<CellPos>)> = puzzle
        .playable_words()
        .map(|word| (word.id, puzzle.letter_positions(word)))
        .collect();
    let letter_counts: HashMap<WordId, usize> = words
        .iter()
        .map(|(id, cells)| (*id, cells.len()))
        .collect();
    let mut revealed_counts: HashMap<WordId, usize> = words
        .iter()
        .map(|(id, cells)| {
            let already = cells
                .iter()
                .filter(|pos| puzzle.grid().get(**pos).is_some_and(|c| c.value.is_some()))
                .count();
            (*id, already)
        })
        .collect();

    let mut total = 0;
    for (id, cells) in &words {
        let target = letters_to_reveal(cells.len(), percent);
        let already = revealed_counts.get(id).copied().unwrap_or(0);
        let needed = target.saturating_sub(already);
        if needed == 0 {
            continue;
        }

        let candidates: Vec<CellPos> = cells
            .iter()
            .copied()
            .filter(|pos| {
                let unrevealed = puzzle
                    .grid()
                    .get(*pos)
                    .is_some_and(|cell| cell.value.is_none());
                unrevealed
                    && puzzle.words_at(*pos).filter(|w| !w.is_wrapper).all(|crossing| {
                        let count = letter_counts.get(&crossing.id).copied().unwrap_or(0);
                        let shown = revealed_counts.get(&crossing.id).copied().unwrap_or(0);
                        shown + 1 < count
                    })
            })
            .collect();

        let chosen: Vec<CellPos> = candidates.choose_multiple(rng, needed).copied().collect();
        for pos in chosen {
            let crossing: Vec<WordId> = puzzle
                .words_at(pos)
                .filter(|w| !w.is_wrapper)
                .map(|w| w.id)
                .collect();
            if let Some(cell) = puzzle.grid_mut().get_mut(pos) {
                cell.value = cell.letter;
            }
            for word_id in crossing {
                *revealed_counts.entry(word_id).or_default() += 1;
            }
            total += 1;
        }
    }
    total
}
