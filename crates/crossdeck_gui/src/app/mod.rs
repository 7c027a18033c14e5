//! egui application shell for Crossdeck.

mod input;
mod state_feedback;
mod state_ops;
mod style;
mod ui;

use crate::surface::theme::ThemeMode;
use crate::surface::PuzzleSurface;
use crossdeck_core::{Config, DeckCatalog, Difficulty, GameSession};
use eframe::egui;
use input::{commands_from_events, PuzzleCommand};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use style::*;

/// Desktop shell around one optional [`GameSession`].
///
/// Generation runs synchronously inside `update`; there is no worker thread.
pub(crate) struct CrossdeckApp {
    config: Config,
    catalog: DeckCatalog,
    deck_id: String,
    difficulty: Difficulty,
    session: Option<GameSession>,
    surface: PuzzleSurface,
    status: Option<StatusMessage>,
    toasts: VecDeque<ToastMessage>,
    applied_theme: Option<ThemeMode>,
    window_checked: bool,
}

struct StatusMessage {
    text: String,
    expires_at: Instant,
}

struct ToastMessage {
    text: String,
    expires_at: Instant,
}

const STATUS_TTL: Duration = Duration::from_secs(5);
const TOAST_TTL: Duration = Duration::from_secs(4);
const TOAST_LIMIT: usize = 4;
const FEEDBACK_REPAINT: Duration = Duration::from_millis(250);
#[doc = "Default initial window size for desktop startup."]
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [1000.0, 760.0];
#[doc = "Minimum enforced window size to keep the top bar usable."]
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 480.0];

impl CrossdeckApp {
    pub(crate) fn new(config: Config) -> Self {
        let catalog = DeckCatalog::from_config(&config);
        let deck_id = catalog
            .decks()
            .first()
            .map(|deck| deck.id.clone())
            .unwrap_or_default();
        Self {
            difficulty: config.difficulty,
            config,
            catalog,
            deck_id,
            session: None,
            surface: PuzzleSurface::new(ThemeMode::default()),
            status: None,
            toasts: VecDeque::new(),
            applied_theme: None,
            window_checked: false,
        }
    }

    fn expire_feedback(&mut self) {
        let now = Instant::now();
        if let Some(status) = &self.status {
            if now >= status.expires_at {
                self.status = None;
            }
        }
        while self
            .toasts
            .front()
            .map(|toast| now >= toast.expires_at)
            .unwrap_or(false)
        {
            self.toasts.pop_front();
        }
    }

    /// One UI pass: route keyboard input, then draw every panel.
    pub(super) fn run_frame(&mut self, ctx: &egui::Context) {
        self.ensure_style(ctx);
        self.expire_feedback();

        let keyboard_free = self.session.is_some() && !ctx.wants_keyboard_input();
        let commands = ctx.input(|input| commands_from_events(&input.events, keyboard_free));
        for command in commands {
            self.apply_command(command);
        }

        self.render_top_bar(ctx);
        self.render_status_bar(ctx);
        let actions = self.render_board(ctx);
        for action in actions {
            self.apply_surface_action(action);
        }
        self.render_toasts(ctx);

        if self.status.is_some() || !self.toasts.is_empty() {
            ctx.request_repaint_after(FEEDBACK_REPAINT);
        }
    }
}

impl eframe::App for CrossdeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.window_checked {
            let min_size = egui::vec2(MIN_WINDOW_SIZE[0], MIN_WINDOW_SIZE[1]);
            let current_size = ctx.input(|input| {
                input
                    .viewport()
                    .inner_rect
                    .map(|rect| rect.size())
                    .unwrap_or(min_size)
            });
            if current_size.x < min_size.x || current_size.y < min_size.y {
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(min_size));
            }
            self.window_checked = true;
        }
        self.run_frame(ctx);
    }
}

impl Drop for CrossdeckApp {
    fn drop(&mut self) {
        self.quit_session();
    }
}

#[cfg(test)]
mod tests;
