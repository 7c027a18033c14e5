use super::*;
use crate::models::{CellKind, Grid};

fn placed(id: u32, text: &str, direction: Direction, row: usize, col: usize) -> PlacedWord {
    PlacedWord {
        id: WordId(id),
        text: text.to_string(),
        clue: format!("clue {}", text),
        direction,
        start_row: row,
        start_col: col,
        length: text.len(),
        number: Some(id + 1),
        is_wrapper: false,
        group_id: text.to_ascii_lowercase(),
        part_index: 0,
        segment_id: format!("{}:0", text.to_ascii_lowercase()),
    }
}

/// ```text
/// S Q U A T
/// I . . R .
/// R . . M .
/// ```
fn sample_puzzle() -> Puzzle {
    let words = vec![
        placed(0, "SQUAT", Direction::Across, 0, 0),
        placed(1, "SIR", Direction::Down, 0, 0),
        placed(2, "ARM", Direction::Down, 0, 3),
    ];
    let mut grid = Grid::new(3, 5);
    for word in &words {
        for (index, (pos, ch)) in word.positions().zip(word.text.chars()).enumerate() {
            let cell = grid.get_mut(pos).expect("in bounds");
            cell.letter = Some(ch);
            if cell.kind == CellKind::Empty {
                cell.kind = CellKind::Filled;
                cell.word_id = Some(word.id);
                cell.direction = Some(word.direction);
            }
            if index == 0 && cell.number.is_none() {
                cell.kind = CellKind::Start;
                cell.number = word.number;
                cell.number_direction = Some(word.direction);
            }
        }
    }
    Puzzle::new(grid, words)
}

fn session() -> GameSession {
    GameSession {
        deck_id: "test".to_string(),
        sources: Vec::new(),
        difficulty: Difficulty::Expert,
        options: GenerationOptions::default(),
        rng: StdRng::seed_from_u64(0),
        puzzle: sample_puzzle(),
        selection: SelectionState::default(),
        generation: 0,
    }
}

fn selected(session: &GameSession) -> Option<(usize, usize)> {
    session.selection().selected.map(|pos| (pos.row, pos.col))
}

fn value_at(session: &GameSession, row: usize, col: usize) -> Option<char> {
    session
        .puzzle()
        .grid()
        .get(CellPos::new(row, col))
        .and_then(|cell| cell.value)
}

fn lifts() -> Vec<AnswerSource> {
    vec![
        AnswerSource::new("Squat", "knee dominant", "squat"),
        AnswerSource::new("Bench Press", "horizontal push", "bench"),
        AnswerSource::new("Deadlift", "hip hinge", "deadlift"),
        AnswerSource::new("Barbell Row", "horizontal pull", "row"),
    ]
}

#[test]
fn select_adopts_cell_direction_and_toggles_on_reselect() {
    let mut session = session();
    assert!(session.select(1, 0));
    assert_eq!(session.selection().direction, Direction::Down);

    assert!(session.select(0, 3));
    assert_eq!(session.selection().direction, Direction::Across);
    assert!(session.select(0, 3));
    assert_eq!(session.selection().direction, Direction::Down);
    assert_eq!(selected(&session), Some((0, 3)));
}

#[test]
fn select_ignores_empty_and_out_of_bounds_cells() {
    let mut session = session();
    assert!(session.select(0, 0));
    assert!(!session.select(1, 1));
    assert!(!session.select(9, 9));
    assert_eq!(selected(&session), Some((0, 0)));
}

#[test]
fn correct_letter_advances_one_column() {
    let mut session = session();
    session.select(0, 0);
    session.input('s');
    assert_eq!(value_at(&session, 0, 0), Some('S'));
    assert_eq!(selected(&session), Some((0, 1)));
}

#[test]
fn incorrect_letter_keeps_selection() {
    let mut session = session();
    session.select(0, 1);
    session.input('X');
    assert_eq!(value_at(&session, 0, 1), Some('X'));
    assert_eq!(selected(&session), Some((0, 1)));
    assert!(session.puzzle().grid().get(CellPos::new(0, 1)).expect("cell").is_incorrect());
}

#[test]
fn advance_skips_prefilled_cells() {
    let mut session = session();
    session.reveal(0, 1);
    session.select(0, 0);
    session.input('S');
    assert_eq!(selected(&session), Some((0, 2)));
}

#[test]
fn advance_stops_at_grid_edge() {
    let mut session = session();
    session.select(0, 4);
    session.input('T');
    assert_eq!(selected(&session), Some((0, 4)));
}

#[test]
fn typing_on_correct_cell_is_ignored() {
    let mut session = session();
    session.reveal(0, 2);
    session.select(0, 2);
    assert!(session.input('X').is_empty());
    assert_eq!(value_at(&session, 0, 2), Some('U'));
    assert_eq!(selected(&session), Some((0, 2)));
}

#[test]
fn non_letters_and_missing_selection_are_ignored() {
    let mut session = session();
    assert!(session.input('A').is_empty());
    session.select(0, 0);
    session.input('1');
    assert_eq!(value_at(&session, 0, 0), None);
}

#[test]
fn backspace_clears_wrong_value_and_moves_back() {
    let mut session = session();
    session.select(0, 2);
    session.input('X');
    session.backspace();
    assert_eq!(value_at(&session, 0, 2), None);
    assert_eq!(selected(&session), Some((0, 1)));
}

#[test]
fn backspace_and_delete_keep_correct_values() {
    let mut session = session();
    session.reveal(0, 1);
    session.select(0, 1);
    session.delete();
    assert_eq!(value_at(&session, 0, 1), Some('Q'));
    assert_eq!(selected(&session), Some((0, 1)));
    session.backspace();
    assert_eq!(value_at(&session, 0, 1), Some('Q'));
    assert_eq!(selected(&session), Some((0, 0)));
}

#[test]
fn arrows_skip_blocked_cells_and_set_direction() {
    let mut session = session();
    session.select(0, 3);
    assert!(session.navigate(NavKey::Down));
    assert_eq!(selected(&session), Some((1, 3)));
    assert_eq!(session.selection().direction, Direction::Down);

    assert!(session.navigate(NavKey::Down));
    assert!(session.navigate(NavKey::Left));
    assert_eq!(selected(&session), Some((2, 0)));
    assert_eq!(session.selection().direction, Direction::Across);
}

#[test]
fn arrows_are_noops_at_edges_or_across_only_blocked_cells() {
    let mut session = session();
    session.select(1, 3);
    assert!(!session.navigate(NavKey::Right));
    assert_eq!(selected(&session), Some((1, 3)));
    assert_eq!(session.selection().direction, Direction::Down);

    session.select(0, 0);
    assert!(!session.navigate(NavKey::Up));
    assert!(!session.navigate(NavKey::Left));
    assert_eq!(selected(&session), Some((0, 0)));
}

#[test]
fn completing_a_word_emits_events() {
    let mut session = session();
    session.select(0, 0);
    let mut events = Vec::new();
    for ch in "SQUAT".chars() {
        events.extend(session.input(ch));
    }
    assert_eq!(
        events,
        vec![
            SessionEvent::WordCompleted { word_id: WordId(0) },
            SessionEvent::Progress {
                completed: 1,
                total: 3
            },
        ]
    );
    assert_eq!(session.progress(), (1, 3));
}

#[test]
fn completion_is_never_revoked() {
    let mut session = session();
    for col in 0..5 {
        session.reveal(0, col);
    }
    assert!(session.selection().completed.contains(&WordId(0)));

    if let Some(cell) = session.puzzle.grid_mut().get_mut(CellPos::new(0, 2)) {
        cell.value = Some('Z');
    }
    session.select(1, 0);
    session.input('I');
    assert!(session.selection().completed.contains(&WordId(0)));
    assert_eq!(session.progress(), (1, 3));
}

#[test]
fn revealing_everything_completes_the_puzzle() {
    let mut session = session();
    let letters: Vec<CellPos> = session
        .puzzle()
        .grid()
        .iter()
        .filter(|cell| cell.kind.is_letter())
        .map(|cell| cell.pos())
        .collect();
    let mut events = Vec::new();
    for pos in letters {
        events.extend(session.reveal(pos.row, pos.col));
    }
    assert_eq!(events.last(), Some(&SessionEvent::PuzzleCompleted));
    assert_eq!(
        events
            .iter()
            .filter(|event| matches!(event, SessionEvent::PuzzleCompleted))
            .count(),
        1
    );
    assert!(session.is_complete());
}

#[test]
fn reveal_ignores_non_letter_cells() {
    let mut session = session();
    assert!(session.reveal(1, 1).is_empty());
    assert!(session.reveal(10, 10).is_empty());
    assert_eq!(value_at(&session, 1, 1), None);
}

#[test]
fn active_word_and_group_follow_selection() {
    let mut session = session();
    assert!(session.active_group_cells().is_empty());

    session.select(1, 3);
    assert_eq!(session.active_word().map(|w| w.text.as_str()), Some("ARM"));
    assert_eq!(
        session.active_group_cells(),
        vec![CellPos::new(0, 3), CellPos::new(1, 3), CellPos::new(2, 3)]
    );

    session.select(0, 3);
    assert_eq!(session.active_word().map(|w| w.text.as_str()), Some("SQUAT"));
    assert_eq!(session.active_group_cells().len(), 5);

    session.clear_selection();
    assert!(session.active_word().is_none());
}

#[test]
fn from_sources_is_deterministic_under_seed() {
    let first = GameSession::from_sources(
        "lifts",
        lifts(),
        Difficulty::Easy,
        GenerationOptions::default(),
        StdRng::seed_from_u64(5),
    )
    .expect("session");
    let second = GameSession::from_sources(
        "lifts",
        lifts(),
        Difficulty::Easy,
        GenerationOptions::default(),
        StdRng::seed_from_u64(5),
    )
    .expect("session");
    assert_eq!(
        first.puzzle().to_text_grid(false),
        second.puzzle().to_text_grid(false)
    );
}

#[test]
fn regenerate_resets_selection_and_progress() {
    let mut session = GameSession::from_sources(
        "lifts",
        lifts(),
        Difficulty::Medium,
        GenerationOptions::default(),
        StdRng::seed_from_u64(11),
    )
    .expect("session");
    let first_letter = session
        .puzzle()
        .grid()
        .iter()
        .find(|cell| cell.kind.is_letter())
        .map(|cell| cell.pos())
        .expect("letter cell");
    session.select(first_letter.row, first_letter.col);

    session.regenerate().expect("regenerate");
    assert_eq!(session.generation(), 1);
    assert_eq!(session.selection().selected, None);
    assert!(session.selection().completed.is_empty());

    session.set_difficulty(Difficulty::Expert).expect("difficulty");
    assert_eq!(session.difficulty(), Difficulty::Expert);
    assert!(session.puzzle().grid().iter().all(|cell| cell.value.is_none()));
    session.quit();
}

#[test]
fn start_rejects_unknown_decks_and_small_corpora() {
    let catalog = DeckCatalog::builtin();
    let missing = GameSession::start(
        &catalog,
        "nope",
        Difficulty::Easy,
        GenerationOptions::default(),
        Some(1),
    );
    assert!(matches!(missing, Err(PuzzleError::DeckNotFound(_))));

    let tiny = GameSession::from_sources(
        "tiny",
        vec![
            AnswerSource::new("Ab", "", "a"),
            AnswerSource::new("Cd", "", "c"),
        ],
        Difficulty::Easy,
        GenerationOptions::default(),
        StdRng::seed_from_u64(1),
    );
    assert!(tiny.is_err_and(|err| err.is_insufficient_corpus()));

    let session = GameSession::start(
        &catalog,
        "lifts",
        Difficulty::Hard,
        GenerationOptions::default(),
        Some(3),
    )
    .expect("builtin deck");
    assert_eq!(session.deck_id(), "lifts");
}
