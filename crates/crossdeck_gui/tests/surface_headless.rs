//! Headless frames through the puzzle surface: pointer input in, actions out.

use crossdeck_core::{CellPos, DeckCatalog, Difficulty, GameSession, GenerationOptions};
use crossdeck_gui::surface::{PuzzleSurface, SurfaceAction};
use eframe::egui;

fn start_session() -> GameSession {
    GameSession::start(
        &DeckCatalog::builtin(),
        "lifts",
        Difficulty::Expert,
        GenerationOptions::default(),
        Some(3),
    )
    .expect("lifts deck should generate")
}

const SCREEN: egui::Vec2 = egui::vec2(1200.0, 900.0);

fn input(screen: egui::Vec2, events: Vec<egui::Event>) -> egui::RawInput {
    egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, screen)),
        events,
        ..Default::default()
    }
}

fn frame(
    ctx: &egui::Context,
    surface: &mut PuzzleSurface,
    session: &GameSession,
    events: Vec<egui::Event>,
) -> Vec<SurfaceAction> {
    frame_sized(ctx, surface, session, SCREEN, events)
}

fn frame_sized(
    ctx: &egui::Context,
    surface: &mut PuzzleSurface,
    session: &GameSession,
    screen: egui::Vec2,
    events: Vec<egui::Event>,
) -> Vec<SurfaceAction> {
    let mut actions = Vec::new();
    let _ = ctx.run(input(screen, events), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            actions = surface.show(ui, session);
        });
    });
    actions
}

fn button(pos: egui::Pos2, button: egui::PointerButton, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button,
        pressed,
        modifiers: egui::Modifiers::NONE,
    }
}

fn first_letter(session: &GameSession) -> CellPos {
    session
        .puzzle()
        .grid()
        .iter()
        .find(|cell| cell.kind.is_letter())
        .map(|cell| cell.pos())
        .expect("puzzle has letter cells")
}

fn cell_center(surface: &PuzzleSurface, pos: CellPos) -> egui::Pos2 {
    surface
        .last_geometry()
        .expect("geometry after first frame")
        .cell_rect(pos.row, pos.col)
        .center()
}

#[test]
fn first_frame_records_geometry_without_actions() {
    let session = start_session();
    let mut surface = PuzzleSurface::default();
    let ctx = egui::Context::default();

    let actions = frame(&ctx, &mut surface, &session, Vec::new());
    assert!(actions.is_empty());
    let geometry = surface.last_geometry().expect("geometry");
    let size = session.puzzle().size();
    assert_eq!((geometry.rows, geometry.cols), (size.rows, size.cols));
}

#[test]
fn primary_click_on_cell_selects_it() {
    let session = start_session();
    let mut surface = PuzzleSurface::default();
    let ctx = egui::Context::default();
    frame(&ctx, &mut surface, &session, Vec::new());

    let target = first_letter(&session);
    let center = cell_center(&surface, target);
    let pressed = frame(
        &ctx,
        &mut surface,
        &session,
        vec![
            egui::Event::PointerMoved(center),
            button(center, egui::PointerButton::Primary, true),
        ],
    );
    assert!(pressed.is_empty());

    let released = frame(
        &ctx,
        &mut surface,
        &session,
        vec![button(center, egui::PointerButton::Primary, false)],
    );
    assert_eq!(
        released,
        vec![SurfaceAction::Select {
            row: target.row,
            col: target.col,
        }]
    );
}

#[test]
fn secondary_click_requests_reveal() {
    let session = start_session();
    let mut surface = PuzzleSurface::default();
    let ctx = egui::Context::default();
    frame(&ctx, &mut surface, &session, Vec::new());

    let target = first_letter(&session);
    let center = cell_center(&surface, target);
    frame(
        &ctx,
        &mut surface,
        &session,
        vec![
            egui::Event::PointerMoved(center),
            button(center, egui::PointerButton::Secondary, true),
        ],
    );
    let released = frame(
        &ctx,
        &mut surface,
        &session,
        vec![button(center, egui::PointerButton::Secondary, false)],
    );
    assert!(released.contains(&SurfaceAction::Reveal {
        row: target.row,
        col: target.col,
    }));
}

#[test]
fn zoom_event_over_board_scales_view() {
    let session = start_session();
    let mut surface = PuzzleSurface::default();
    let ctx = egui::Context::default();
    frame(&ctx, &mut surface, &session, Vec::new());

    let center = egui::pos2(600.0, 450.0);
    frame(
        &ctx,
        &mut surface,
        &session,
        vec![egui::Event::PointerMoved(center), egui::Event::Zoom(1.25)],
    );
    assert!(surface.viewport().zoom() > 1.0);
}

#[test]
fn drag_beyond_threshold_pans_instead_of_selecting() {
    let session = start_session();
    let mut surface = PuzzleSurface::default();
    let ctx = egui::Context::default();
    frame(&ctx, &mut surface, &session, Vec::new());

    let target = first_letter(&session);
    let start = cell_center(&surface, target);
    let end = start + egui::vec2(40.0, 0.0);
    frame(
        &ctx,
        &mut surface,
        &session,
        vec![
            egui::Event::PointerMoved(start),
            button(start, egui::PointerButton::Primary, true),
        ],
    );
    let moved = frame(
        &ctx,
        &mut surface,
        &session,
        vec![egui::Event::PointerMoved(end)],
    );
    let released = frame(
        &ctx,
        &mut surface,
        &session,
        vec![button(end, egui::PointerButton::Primary, false)],
    );
    assert!(moved.is_empty());
    assert!(released.is_empty());
}

#[test]
fn window_resize_does_not_hide_board_behind_keyboard_inset() {
    let session = start_session();
    let mut surface = PuzzleSurface::default();
    let ctx = egui::Context::default();
    frame(&ctx, &mut surface, &session, Vec::new());
    let tall = surface.last_view_frame().expect("first view frame");

    frame_sized(
        &ctx,
        &mut surface,
        &session,
        egui::vec2(1200.0, 600.0),
        Vec::new(),
    );
    let short = surface.last_view_frame().expect("resized view frame");

    assert!(short.container.height() < tall.container.height());
    assert_eq!(short.keyboard_inset, 0.0);
    assert_eq!(short.visible_rect(), short.container);
}
