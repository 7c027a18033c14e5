//! UI panel modules extracted from the main app update loop.

/// Central puzzle board.
pub(super) mod board;
/// Bottom status bar content.
pub(super) mod status_bar;
/// Transient toast notifications.
pub(super) mod toasts;
/// Deck, difficulty, and session controls.
pub(super) mod top_bar;
