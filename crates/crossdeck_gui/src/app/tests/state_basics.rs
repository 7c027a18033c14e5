use super::*;

#[test]
fn new_app_picks_first_deck_and_configured_difficulty() {
    let app = make_app();
    assert_eq!(app.deck_id, "kihon");
    assert_eq!(app.difficulty, Difficulty::Expert);
    assert!(app.session.is_none());
    assert!(app.status.is_none());
}

#[test]
fn set_status_pushes_toast_feedback() {
    let mut app = make_app();
    app.set_status("Puzzle complete!");

    assert!(app.status.is_some());
    assert_eq!(app.toasts.len(), 1);
    assert_eq!(
        app.toasts.back().map(|toast| toast.text.as_str()),
        Some("Puzzle complete!")
    );
}

#[test]
fn toast_queue_dedupes_tail_and_caps_length() {
    let mut app = make_app();

    app.set_status("Repeated");
    app.set_status("Repeated");
    assert_eq!(app.toasts.len(), 1);

    for idx in 0..(TOAST_LIMIT + 2) {
        app.set_status(format!("Toast {}", idx));
    }
    assert_eq!(app.toasts.len(), TOAST_LIMIT);
}

#[test]
fn toast_stack_lists_newest_first_and_fades_near_expiry() {
    use crate::app::ui::toasts::toast_stack;

    let now = Instant::now();
    let toasts: VecDeque<ToastMessage> = [
        ("expired", now - Duration::from_millis(1)),
        ("fading", now + Duration::from_millis(300)),
        ("fresh", now + TOAST_TTL),
    ]
    .into_iter()
    .map(|(text, expires_at)| ToastMessage {
        text: text.to_string(),
        expires_at,
    })
    .collect();

    let stack = toast_stack(&toasts, now);
    let texts: Vec<&str> = stack.iter().map(|(text, _)| *text).collect();
    assert_eq!(texts, vec!["fresh", "fading"]);
    assert_eq!(stack[0].1, 1.0);
    assert!(stack[1].1 > 0.0 && stack[1].1 < 1.0, "alpha {}", stack[1].1);
}

#[test]
fn toasts_render_headless_without_claiming_input() {
    let mut app = make_app();
    app.set_status("Solved 1 of 5 words");
    let ctx = egui::Context::default();
    let _ = ctx.run(egui::RawInput::default(), |ctx| app.render_toasts(ctx));
    assert!(!ctx.wants_pointer_input());
    assert_eq!(app.toasts.len(), 1);
}

#[test]
fn start_session_builds_puzzle_for_selected_deck() {
    let app = started_app();
    let session = session(&app);
    assert_eq!(session.deck_id(), "kihon");
    assert_eq!(session.difficulty(), Difficulty::Expert);
    assert_eq!(session.progress().0, 0);
    assert!(app.status.is_some());
}

#[test]
fn start_session_reports_insufficient_corpus_without_board() {
    let mut app = tiny_deck_app();
    app.start_session();

    assert!(app.session.is_none());
    assert_eq!(
        app.status.as_ref().map(|status| status.text.as_str()),
        Some("No puzzle available for this deck")
    );
}

#[test]
fn start_session_unknown_deck_reports_error() {
    let mut app = make_app();
    app.deck_id = "missing".to_string();
    app.start_session();

    assert!(app.session.is_none());
    let text = app.status.as_ref().map(|status| status.text.clone());
    assert!(text.is_some_and(|text| text.contains("missing")));
}

#[test]
fn failed_restart_clears_previous_board() {
    let mut app = started_app();
    app.deck_id = "missing".to_string();
    app.start_session();
    assert!(app.session.is_none());
}

#[test]
fn regenerate_resets_selection_and_bumps_generation() {
    let mut app = started_app();
    let pos = first_open_letter(&app);
    app.apply_surface_action(SurfaceAction::Select {
        row: pos.row,
        col: pos.col,
    });
    assert_eq!(session(&app).selection().selected, Some(pos));

    app.regenerate();
    assert_eq!(session(&app).generation(), 1);
    assert_eq!(session(&app).selection().selected, None);
}

#[test]
fn quit_session_drops_board_and_stops_animation() {
    let mut app = started_app();
    let pos = first_open_letter(&app);
    app.apply_surface_action(SurfaceAction::Select {
        row: pos.row,
        col: pos.col,
    });
    let ctx = egui::Context::default();
    run_frame_once(&mut app, &ctx, screen_input(Vec::new()));
    assert!(app.surface.is_animating());

    app.quit_session();
    assert!(app.session.is_none());
    assert!(!app.surface.is_animating());
    assert!(app.surface.last_geometry().is_none());
}

#[test]
fn change_difficulty_without_session_only_updates_choice() {
    let mut app = make_app();
    app.change_difficulty(Difficulty::Easy);
    assert_eq!(app.difficulty, Difficulty::Easy);
    assert!(app.status.is_none());
}

#[test]
fn change_difficulty_regenerates_active_session() {
    let mut app = started_app();
    app.change_difficulty(Difficulty::Easy);
    assert_eq!(session(&app).difficulty(), Difficulty::Easy);
    assert_eq!(
        app.status.as_ref().map(|status| status.text.as_str()),
        Some("Difficulty: Easy")
    );
}

#[test]
fn reveal_action_fills_solution() {
    let mut app = started_app();
    let pos = first_open_letter(&app);
    app.apply_surface_action(SurfaceAction::Reveal {
        row: pos.row,
        col: pos.col,
    });
    assert_eq!(value_at(&app, pos), Some(solution_at(&app, pos)));
}

#[test]
fn report_events_prefers_puzzle_completion_message() {
    let mut app = make_app();
    app.report_events(vec![
        SessionEvent::Progress {
            completed: 3,
            total: 3,
        },
        SessionEvent::PuzzleCompleted,
    ]);
    assert_eq!(
        app.status.as_ref().map(|status| status.text.as_str()),
        Some("Puzzle complete!")
    );

    app.report_events(vec![SessionEvent::Progress {
        completed: 1,
        total: 4,
    }]);
    assert_eq!(
        app.status.as_ref().map(|status| status.text.as_str()),
        Some("Solved 1 of 4 words")
    );
}

#[test]
fn report_events_ignores_empty_batches() {
    let mut app = make_app();
    app.report_events(Vec::new());
    assert!(app.status.is_none());
    assert!(app.toasts.is_empty());
}

#[test]
fn toggle_theme_reapplies_style_on_next_frame() {
    let mut app = make_app();
    let ctx = egui::Context::default();
    run_frame_once(&mut app, &ctx, screen_input(Vec::new()));
    assert_eq!(app.applied_theme, Some(ThemeMode::Dark));

    app.toggle_theme();
    run_frame_once(&mut app, &ctx, screen_input(Vec::new()));
    assert_eq!(app.applied_theme, Some(ThemeMode::Light));
}

#[test]
fn frame_with_session_lays_out_board() {
    let mut app = started_app();
    let ctx = egui::Context::default();
    run_frame_once(&mut app, &ctx, screen_input(Vec::new()));
    assert!(app.surface.last_geometry().is_some());
}
