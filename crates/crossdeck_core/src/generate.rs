//! End-to-end puzzle generation: corpus, layout, wrappers, trim.

use crate::config::Config;
use crate::constants::{DEFAULT_MAX_GRID, MIN_ELIGIBLE_WORDS};
use crate::corpus::{build_fragments, is_grid_eligible, max_word_len};
use crate::error::PuzzleError;
use crate::layout::synthesize;
use crate::models::{AnswerSource, DecorationLayout, Puzzle, WordFragment};
use crate::trim::trim_layout;
use crate::wrapper::resolve_wrappers;
use tracing::{debug, info};

/// Knobs for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub decoration: DecorationLayout,
    /// Bound on scratch grid size; also caps the longest accepted word.
    pub max_grid: usize,
    /// Log the trimmed solution grid at info level.
    pub log_layout: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            decoration: DecorationLayout::None,
            max_grid: DEFAULT_MAX_GRID,
            log_layout: false,
        }
    }
}

impl GenerationOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            decoration: config.decoration,
            max_grid: config.max_grid,
            log_layout: config.log_layout,
        }
    }
}

/// Generate a puzzle from raw answer sources.
///
/// Runs synchronously: corpus builder, layout synthesizer, wrapper resolver,
/// then trimmer. Words or wrappers that do not fit are dropped silently.
///
/// # Errors
/// Returns [`PuzzleError::InsufficientCorpus`] when fewer than three
/// grid-eligible fragments remain after classification.
pub fn generate_puzzle(
    sources: &[AnswerSource],
    options: &GenerationOptions,
) -> Result<Puzzle, PuzzleError> {
    let fragments = build_fragments(sources);
    let max_len = max_word_len(options.max_grid);

    let (grid_fragments, skipped): (Vec<&WordFragment>, Vec<&WordFragment>) = fragments
        .iter()
        .filter(|fragment| !fragment.is_wrapper)
        .partition(|fragment| is_grid_eligible(fragment, max_len));
    for fragment in &skipped {
        debug!(text = %fragment.text, "fragment not eligible for the grid");
    }
    if grid_fragments.len() < MIN_ELIGIBLE_WORDS {
        return Err(PuzzleError::InsufficientCorpus {
            eligible: grid_fragments.len(),
        });
    }
    let wrappers: Vec<&WordFragment> = fragments.iter().filter(|f| f.is_wrapper).collect();

    let mut layout = synthesize(&grid_fragments, options.decoration, options.max_grid).ok_or(
        PuzzleError::InsufficientCorpus {
            eligible: grid_fragments.len(),
        },
    )?;
    let wrappers_placed = resolve_wrappers(&mut layout, &wrappers);
    let puzzle = trim_layout(layout, options.decoration);

    debug!(
        rows = puzzle.size().rows,
        cols = puzzle.size().cols,
        words = puzzle.playable_word_count(),
        wrappers = wrappers_placed,
        wrappers_requested = wrappers.len(),
        "puzzle generated"
    );
    if options.log_layout {
        info!("generated layout:\n{}", puzzle.to_text_grid(true));
    }
    Ok(puzzle)
}

/// Like [`generate_puzzle`], collapsing failure to `None`.
pub fn try_generate(sources: &[AnswerSource], options: &GenerationOptions) -> Option<Puzzle> {
    generate_puzzle(sources, options).ok()
}
