//! Word corpus builder.
//!
//! Turns raw answer sources into grid fragments (letters placed in the puzzle)
//! and wrapper fragments (annotation text rendered beside a grid word). Tokens
//! repeated across many fragments are pulled out of the grid into placeholder
//! runs so boilerplate words do not dominate the puzzle.

use crate::constants::{
    COMMON_TOKEN_MIN_FRAGMENTS, MAX_WRAPPER_SPAN, MIN_WORD_LETTERS, SCRATCH_GRID_PADDING,
    WRAPPER_CHARS_PER_CELL, WRAPPER_PLACEHOLDER,
};
use crate::models::{AnswerSource, WordFragment, WrapperSegment};
use std::collections::{HashMap, HashSet};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
struct RawPart {
    text: String,
    wrapper: bool,
}

/// Cells reserved for a wrapper of `chars` characters.
///
/// # Returns
/// `min(6, max(1, ceil(chars / 7)))`.
pub fn wrapper_span(chars: usize) -> usize {
    chars
        .div_ceil(WRAPPER_CHARS_PER_CELL)
        .clamp(1, MAX_WRAPPER_SPAN)
}

/// Longest grid fragment (in cells) that still leaves the scratch grid padding
/// inside `max_grid`.
pub fn max_word_len(max_grid: usize) -> usize {
    max_grid.saturating_sub(SCRATCH_GRID_PADDING)
}

/// Returns whether a fragment may be placed as a grid word.
pub fn is_grid_eligible(fragment: &WordFragment, max_len: usize) -> bool {
    !fragment.is_wrapper
        && fragment.literal_len() >= MIN_WORD_LETTERS
        && fragment.cell_len() <= max_len
}

/// Split on top-level parenthetical groups.
///
/// Text outside parentheses becomes grid parts, text inside becomes wrapper
/// parts. Nested parentheses stay inside their wrapper; a stray `)` is ignored
/// and an unclosed `(` turns the remainder into a wrapper.
fn split_parenthetical(text: &str) -> Vec<RawPart> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut buffer = String::new();
    for ch in text.chars() {
        match ch {
            '(' if depth == 0 => {
                if !buffer.trim().is_empty() {
                    parts.push(RawPart {
                        text: std::mem::take(&mut buffer),
                        wrapper: false,
                    });
                }
                buffer.clear();
                depth = 1;
            }
            '(' => {
                depth += 1;
                buffer.push(ch);
            }
            ')' if depth == 1 => {
                if !buffer.trim().is_empty() {
                    parts.push(RawPart {
                        text: std::mem::take(&mut buffer),
                        wrapper: true,
                    });
                }
                buffer.clear();
                depth = 0;
            }
            ')' if depth == 0 => {}
            ')' => {
                depth -= 1;
                buffer.push(ch);
            }
            _ => buffer.push(ch),
        }
    }
    if !buffer.trim().is_empty() {
        parts.push(RawPart {
            text: buffer,
            wrapper: depth > 0,
        });
    }
    parts
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercase and keep only `A`-`Z` and spaces.
fn normalize_grid_text(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .map(|ch| ch.to_ascii_uppercase())
        .map(|ch| if ch.is_ascii_uppercase() { ch } else { ' ' })
        .collect();
    collapse_whitespace(&kept)
}

/// Uppercase, keep readable punctuation, and wrap in parentheses.
fn normalize_wrapper_text(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .map(|ch| ch.to_ascii_uppercase())
        .filter(|ch| {
            ch.is_ascii_alphanumeric() || matches!(ch, ' ' | ',' | '-' | '/' | '\'' | '(' | ')')
        })
        .collect();
    let collapsed = collapse_whitespace(&kept);
    if collapsed.is_empty() {
        return collapsed;
    }
    format!("({})", collapsed)
}

fn fragments_for_item(item_index: usize, item: &AnswerSource) -> Vec<WordFragment> {
    let group_id = if item.group_id.trim().is_empty() {
        format!("item-{}", item_index)
    } else {
        item.group_id.trim().to_string()
    };
    let clue = item.clue.trim().to_string();

    let mut fragments = Vec::new();
    let mut last_grid_segment: Option<String> = None;
    for part in split_parenthetical(&item.text.to_ascii_uppercase()) {
        let part_index = fragments.len();
        let own_segment = format!("{}:{}", group_id, part_index);
        let (text, segment_id) = if part.wrapper {
            let segment = last_grid_segment.clone().unwrap_or(own_segment);
            (normalize_wrapper_text(&part.text), segment)
        } else {
            last_grid_segment = Some(own_segment.clone());
            (normalize_grid_text(&part.text), own_segment)
        };
        if text.is_empty() {
            continue;
        }
        fragments.push(WordFragment {
            text,
            clue: clue.clone(),
            group_id: group_id.clone(),
            part_index,
            segment_id,
            is_wrapper: part.wrapper,
            wrapper_segments: Vec::new(),
        });
    }
    fragments
}

/// Tokens appearing in at least three distinct grid fragments.
fn common_tokens(fragments: &[WordFragment]) -> HashSet<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for fragment in fragments.iter().filter(|fragment| !fragment.is_wrapper) {
        let unique: HashSet<&str> = fragment.text.split(' ').collect();
        for token in unique {
            *counts.entry(token).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count >= COMMON_TOKEN_MIN_FRAGMENTS)
        .map(|(token, _)| token.to_string())
        .collect()
}

/// Replace common-token runs with `#` placeholder runs.
///
/// # Returns
/// The rewritten text and its wrapper segments, or `None` when nothing is
/// excised.
fn excise_common_tokens(
    text: &str,
    common: &HashSet<String>,
) -> Option<(String, Vec<WrapperSegment>)> {
    let tokens: Vec<&str> = text.split(' ').collect();
    if tokens.len() < 2 {
        return None;
    }
    let mut excised: Vec<bool> = tokens.iter().map(|token| common.contains(*token)).collect();
    if !excised.iter().any(|flag| *flag) {
        return None;
    }

    let literal_len = |flags: &[bool]| -> usize {
        tokens
            .iter()
            .zip(flags)
            .filter(|(_, excised)| !**excised)
            .map(|(token, _)| token.len())
            .sum()
    };
    while literal_len(&excised) < MIN_WORD_LETTERS {
        match excised.iter().position(|flag| *flag) {
            Some(index) => excised[index] = false,
            None => break,
        }
    }
    if !excised.iter().any(|flag| *flag) {
        return None;
    }

    let mut out = String::with_capacity(text.len());
    let mut segments = Vec::new();
    let mut index = 0;
    while index < tokens.len() {
        if !out.is_empty() {
            out.push(' ');
        }
        if excised[index] {
            let run_end = (index..tokens.len())
                .find(|candidate| !excised[*candidate])
                .unwrap_or(tokens.len());
            let run_text = tokens[index..run_end].join(" ");
            let span = wrapper_span(run_text.chars().count());
            segments.push(WrapperSegment {
                start: out.chars().count(),
                span,
                text: run_text,
            });
            out.extend(std::iter::repeat(WRAPPER_PLACEHOLDER).take(span));
            index = run_end;
        } else {
            out.push_str(tokens[index]);
            index += 1;
        }
    }
    Some((out, segments))
}

/// Build classified fragments from raw answer sources.
///
/// Fragments with no literal letters are dropped.
///
/// # Returns
/// Grid and wrapper fragments in source order.
pub fn build_fragments(items: &[AnswerSource]) -> Vec<WordFragment> {
    let mut fragments: Vec<WordFragment> = items
        .iter()
        .enumerate()
        .flat_map(|(index, item)| fragments_for_item(index, item))
        .collect();

    let common = common_tokens(&fragments);
    if !common.is_empty() {
        debug!(count = common.len(), "common tokens detected");
    }
    for fragment in fragments.iter_mut().filter(|fragment| !fragment.is_wrapper) {
        if let Some((text, segments)) = excise_common_tokens(&fragment.text, &common) {
            fragment.text = text;
            fragment.wrapper_segments = segments;
        }
    }

    fragments.retain(|fragment| {
        let keep = fragment.is_wrapper || fragment.literal_len() > 0;
        if !keep {
            debug!(segment = %fragment.segment_id, "dropping fragment without letters");
        }
        keep
    });
    fragments
}
