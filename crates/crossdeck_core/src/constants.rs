//! Shared constants used across Crossdeck crates.

/// Minimum side length of the scratch grid used during synthesis.
pub const MIN_SCRATCH_GRID: usize = 40;

/// Extra cells added around the longest word when sizing the scratch grid.
pub const SCRATCH_GRID_PADDING: usize = 6;

/// Default upper bound on the scratch grid side length.
pub const DEFAULT_MAX_GRID: usize = 60;

/// Fewest grid-eligible fragments a corpus must yield.
pub const MIN_ELIGIBLE_WORDS: usize = 3;

/// Minimum literal letters for a grid fragment to be playable.
pub const MIN_WORD_LETTERS: usize = 3;

/// Distinct fragments a token must appear in to count as common.
pub const COMMON_TOKEN_MIN_FRAGMENTS: usize = 3;

/// Characters of wrapper text represented by one wrapper cell.
pub const WRAPPER_CHARS_PER_CELL: usize = 7;

/// Upper bound on cells spanned by one wrapper.
pub const MAX_WRAPPER_SPAN: usize = 6;

/// Default side length of the decorative placeholder block.
pub const DEFAULT_DECORATION_BLOCK: usize = 4;

/// Placeholder character for excised common-token runs.
pub const WRAPPER_PLACEHOLDER: char = '#';
