//! Input-event reducer for the puzzle.

use crossdeck_core::NavKey;
use eframe::egui;

/// Normalized commands consumed by the game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PuzzleCommand {
    Letter(char),
    Backspace,
    Delete,
    Move(NavKey),
    ClearSelection,
}

/// Convert egui input events into puzzle commands.
///
/// Letters arrive through text events so keyboard layouts and IME commits are
/// honoured; keys held with command or alt are left to the rest of the UI.
pub(crate) fn commands_from_events(events: &[egui::Event], focused: bool) -> Vec<PuzzleCommand> {
    if !focused {
        return Vec::new();
    }
    let mut out = Vec::new();
    for event in events {
        match event {
            egui::Event::Text(text) => out.extend(
                text.chars()
                    .filter(char::is_ascii_alphabetic)
                    .map(|ch| PuzzleCommand::Letter(ch.to_ascii_uppercase())),
            ),
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => {
                if modifiers.command || modifiers.alt {
                    continue;
                }
                let command = match key {
                    egui::Key::ArrowUp => PuzzleCommand::Move(NavKey::Up),
                    egui::Key::ArrowDown => PuzzleCommand::Move(NavKey::Down),
                    egui::Key::ArrowLeft => PuzzleCommand::Move(NavKey::Left),
                    egui::Key::ArrowRight => PuzzleCommand::Move(NavKey::Right),
                    egui::Key::Backspace => PuzzleCommand::Backspace,
                    egui::Key::Delete => PuzzleCommand::Delete,
                    egui::Key::Escape => PuzzleCommand::ClearSelection,
                    _ => continue,
                };
                out.push(command);
            }
            _ => {}
        }
    }
    out
}
