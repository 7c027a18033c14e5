//! Answer sources supplied by decks and the fragments derived from them.

use crate::constants::WRAPPER_PLACEHOLDER;
use serde::{Deserialize, Serialize};

/// One raw answer item: the text to place, its clue, and its phrase group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSource {
    pub text: String,
    pub clue: String,
    /// Blank groups are assigned a per-item id by the corpus builder.
    #[serde(default)]
    pub group_id: String,
}

impl AnswerSource {
    pub fn new(
        text: impl Into<String>,
        clue: impl Into<String>,
        group_id: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            clue: clue.into(),
            group_id: group_id.into(),
        }
    }
}

/// Annotation text excised from a grid fragment and anchored at a placeholder run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapperSegment {
    /// Character offset of the first `#` cell inside the fragment text.
    pub start: usize,
    /// Number of `#` cells reserved for the annotation.
    pub span: usize,
    pub text: String,
}

/// A classified piece of an answer source.
///
/// Grid fragments hold `A`-`Z`, spaces, and `#` placeholders. Wrapper fragments
/// hold display text rendered beside the grid word they annotate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFragment {
    pub text: String,
    pub clue: String,
    pub group_id: String,
    pub part_index: usize,
    pub segment_id: String,
    pub is_wrapper: bool,
    pub wrapper_segments: Vec<WrapperSegment>,
}

impl WordFragment {
    /// Number of guessable letters in the fragment.
    pub fn literal_len(&self) -> usize {
        self.text.chars().filter(|ch| ch.is_ascii_uppercase()).count()
    }

    /// Number of grid cells the fragment occupies when placed.
    pub fn cell_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns the wrapper segment whose placeholder run begins at `offset`.
    pub fn segment_at(&self, offset: usize) -> Option<&WrapperSegment> {
        self.wrapper_segments
            .iter()
            .find(|segment| segment.start == offset)
    }

    /// Returns true when the fragment contains placeholder cells.
    pub fn has_placeholders(&self) -> bool {
        self.text.contains(WRAPPER_PLACEHOLDER)
    }
}
