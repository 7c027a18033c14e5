use super::*;
use crate::app::input::{commands_from_events, PuzzleCommand};
use crossdeck_core::NavKey;

fn key(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn select(app: &mut CrossdeckApp, pos: CellPos) {
    app.apply_surface_action(SurfaceAction::Select {
        row: pos.row,
        col: pos.col,
    });
}

#[test]
fn text_events_become_uppercase_letters() {
    let events = vec![egui::Event::Text("a1b ".to_string())];
    assert_eq!(
        commands_from_events(&events, true),
        vec![PuzzleCommand::Letter('A'), PuzzleCommand::Letter('B')]
    );
}

#[test]
fn editing_and_arrow_keys_map_to_commands() {
    let none = egui::Modifiers::NONE;
    let events = vec![
        key(egui::Key::ArrowUp, none),
        key(egui::Key::ArrowRight, none),
        key(egui::Key::Backspace, none),
        key(egui::Key::Delete, none),
        key(egui::Key::Escape, none),
        key(egui::Key::Tab, none),
    ];
    assert_eq!(
        commands_from_events(&events, true),
        vec![
            PuzzleCommand::Move(NavKey::Up),
            PuzzleCommand::Move(NavKey::Right),
            PuzzleCommand::Backspace,
            PuzzleCommand::Delete,
            PuzzleCommand::ClearSelection,
        ]
    );
}

#[test]
fn shortcut_chords_and_unfocused_input_are_ignored() {
    let events = vec![key(egui::Key::Backspace, egui::Modifiers::COMMAND)];
    assert!(commands_from_events(&events, true).is_empty());

    let events = vec![egui::Event::Text("x".to_string())];
    assert!(commands_from_events(&events, false).is_empty());
}

#[test]
fn released_keys_are_ignored() {
    let events = vec![egui::Event::Key {
        key: egui::Key::Backspace,
        physical_key: None,
        pressed: false,
        repeat: false,
        modifiers: egui::Modifiers::NONE,
    }];
    assert!(commands_from_events(&events, true).is_empty());
}

#[test]
fn commands_without_session_are_noops() {
    let mut app = make_app();
    app.apply_command(PuzzleCommand::Letter('A'));
    app.apply_command(PuzzleCommand::Move(NavKey::Down));
    assert!(app.session.is_none());
    assert!(app.status.is_none());
}

#[test]
fn typed_solution_letter_fills_selected_cell() {
    let mut app = started_app();
    let pos = first_open_letter(&app);
    select(&mut app, pos);
    let letter = solution_at(&app, pos);

    app.apply_command(PuzzleCommand::Letter(letter));
    assert_eq!(value_at(&app, pos), Some(letter));
}

#[test]
fn delete_clears_wrong_letter_in_place() {
    let mut app = started_app();
    let pos = first_open_letter(&app);
    select(&mut app, pos);
    let wrong = if solution_at(&app, pos) == 'Z' { 'Q' } else { 'Z' };

    app.apply_command(PuzzleCommand::Letter(wrong));
    assert_eq!(value_at(&app, pos), Some(wrong));
    assert_eq!(session(&app).selection().selected, Some(pos));

    app.apply_command(PuzzleCommand::Delete);
    assert_eq!(value_at(&app, pos), None);
}

#[test]
fn escape_clears_selection() {
    let mut app = started_app();
    let pos = first_open_letter(&app);
    select(&mut app, pos);
    app.apply_command(PuzzleCommand::ClearSelection);
    assert_eq!(session(&app).selection().selected, None);
}

#[test]
fn frame_routes_text_events_to_session() {
    let mut app = started_app();
    let pos = first_open_letter(&app);
    select(&mut app, pos);
    let letter = solution_at(&app, pos);

    let ctx = egui::Context::default();
    let text = letter.to_ascii_lowercase().to_string();
    run_frame_once(&mut app, &ctx, screen_input(vec![egui::Event::Text(text)]));
    assert_eq!(value_at(&app, pos), Some(letter));
}
