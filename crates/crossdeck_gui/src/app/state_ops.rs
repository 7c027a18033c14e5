//! Session lifecycle and command application for the app shell.

use super::{CrossdeckApp, PuzzleCommand};
use crate::surface::SurfaceAction;
use crossdeck_core::{Difficulty, GameSession, GenerationOptions};
use tracing::{info, warn};

impl CrossdeckApp {
    fn deck_label(&self) -> String {
        self.catalog
            .get(&self.deck_id)
            .map(|deck| deck.name.clone())
            .unwrap_or_else(|| self.deck_id.clone())
    }

    /// Generates a puzzle for the chosen deck and difficulty.
    ///
    /// A failed start leaves no board on screen.
    pub(super) fn start_session(&mut self) {
        let options = GenerationOptions::from_config(&self.config);
        let started = GameSession::start(
            &self.catalog,
            &self.deck_id,
            self.difficulty,
            options,
            self.config.seed,
        );
        self.quit_session();
        match started {
            Ok(session) => {
                self.session = Some(session);
                self.surface.reset_view();
                self.set_status(format!(
                    "{} ({})",
                    self.deck_label(),
                    self.difficulty.label()
                ));
            }
            Err(err) if err.is_insufficient_corpus() => {
                warn!(deck = %self.deck_id, error = %err, "deck cannot fill a grid");
                self.set_status("No puzzle available for this deck");
            }
            Err(err) => {
                warn!(deck = %self.deck_id, error = %err, "failed to start session");
                self.set_status(format!("Could not start puzzle: {}", err));
            }
        }
    }

    pub(super) fn regenerate(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.regenerate() {
            Ok(()) => {
                self.surface.reset_view();
                self.set_status("New puzzle generated");
            }
            Err(err) => {
                warn!(error = %err, "regenerate failed");
                self.set_status(format!("Regenerate failed: {}", err));
            }
        }
    }

    /// Ends the current session, if any, and stops surface animation.
    pub(super) fn quit_session(&mut self) {
        if let Some(session) = self.session.take() {
            session.quit();
            self.surface.shutdown();
        }
    }

    pub(super) fn change_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.set_difficulty(difficulty) {
            Ok(()) => {
                self.surface.reset_view();
                self.set_status(format!("Difficulty: {}", difficulty.label()));
            }
            Err(err) => {
                self.difficulty = session.difficulty();
                warn!(error = %err, "difficulty change failed");
                self.set_status(format!("Could not change difficulty: {}", err));
            }
        }
    }

    pub(super) fn toggle_theme(&mut self) {
        let theme = self.surface.theme().toggled();
        info!(theme = theme.label(), "theme changed");
        self.surface.set_theme(theme);
    }

    pub(super) fn apply_command(&mut self, command: PuzzleCommand) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match command {
            PuzzleCommand::Letter(ch) => {
                let events = session.input(ch);
                self.report_events(events);
            }
            PuzzleCommand::Backspace => session.backspace(),
            PuzzleCommand::Delete => session.delete(),
            PuzzleCommand::Move(key) => {
                session.navigate(key);
            }
            PuzzleCommand::ClearSelection => session.clear_selection(),
        }
    }

    pub(super) fn apply_surface_action(&mut self, action: SurfaceAction) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match action {
            SurfaceAction::Select { row, col } => {
                session.select(row, col);
            }
            SurfaceAction::Reveal { row, col } => {
                let events = session.reveal(row, col);
                self.report_events(events);
            }
        }
    }
}
