//! App-shell tests that drive session state through commands and frames.

use super::*;
use crate::surface::SurfaceAction;
use crossdeck_core::{AnswerSource, CellPos, Deck, SessionEvent};

fn test_config() -> Config {
    Config {
        seed: Some(7),
        difficulty: Difficulty::Expert,
        ..Config::default()
    }
}

fn make_app() -> CrossdeckApp {
    CrossdeckApp::new(test_config())
}

fn started_app() -> CrossdeckApp {
    let mut app = make_app();
    app.start_session();
    assert!(app.session.is_some(), "builtin deck should start");
    app
}

fn session(app: &CrossdeckApp) -> &GameSession {
    app.session.as_ref().expect("active session")
}

/// First letter cell in reading order that has no entered value.
fn first_open_letter(app: &CrossdeckApp) -> CellPos {
    session(app)
        .puzzle()
        .grid()
        .iter()
        .find(|cell| cell.kind.is_letter() && cell.value.is_none())
        .map(|cell| cell.pos())
        .expect("open letter cell")
}

fn solution_at(app: &CrossdeckApp, pos: CellPos) -> char {
    session(app)
        .puzzle()
        .grid()
        .get(pos)
        .and_then(|cell| cell.letter)
        .expect("solution letter")
}

fn value_at(app: &CrossdeckApp, pos: CellPos) -> Option<char> {
    session(app)
        .puzzle()
        .grid()
        .get(pos)
        .and_then(|cell| cell.value)
}

fn tiny_deck_app() -> CrossdeckApp {
    let mut app = make_app();
    app.catalog = DeckCatalog::new(vec![Deck {
        id: "tiny".to_string(),
        name: "Tiny".to_string(),
        items: vec![
            AnswerSource::new("Ox", "Farm animal", ""),
            AnswerSource::new("Up", "Not down", ""),
        ],
    }]);
    app.deck_id = "tiny".to_string();
    app
}

fn run_frame_once(app: &mut CrossdeckApp, ctx: &egui::Context, input: egui::RawInput) {
    let _ = ctx.run(input, |ctx| {
        app.run_frame(ctx);
    });
}

fn screen_input(events: Vec<egui::Event>) -> egui::RawInput {
    egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(900.0, 700.0),
        )),
        events,
        ..Default::default()
    }
}

mod input_routing;
mod state_basics;
