use super::*;
use puzzle::action::{Action, TimerKind, TimerRequest};
use puzzle::board::ImageRef;
use puzzle::config::PuzzleConfig;

fn timer(actions: &[Action], kind: TimerKind) -> TimerRequest {
    actions
        .iter()
        .find_map(|a| match a {
            Action::Schedule(req) if req.kind == kind => Some(*req),
            _ => None,
        })
        .expect("timer scheduled")
}

fn playable_session() -> GameSession {
    let mut session = GameSession::new(PuzzleConfig::default(), 11);
    let loaded = session.load_image(ImageRef::from("/assets/default.svg"));
    let shuffle = timer(&loaded, TimerKind::Shuffle);
    let scrambled = session.on_timer(shuffle.token, shuffle.kind);
    let settle = timer(&scrambled, TimerKind::ScrambleSettled);
    session.on_timer(settle.token, settle.kind);
    session
}

// =============================================================
// GameStatus
// =============================================================

#[test]
fn status_before_any_image() {
    let status = GameStatus::of(&GameSession::new(PuzzleConfig::default(), 1));
    assert!(!status.has_image);
    assert_eq!(status.phase, Phase::Uninitialized);
    assert!(!status.preview_enabled());
    assert!(!status.hint_available);
}

#[test]
fn status_while_scrambling() {
    let mut session = GameSession::new(PuzzleConfig::default(), 3);
    let loaded = session.load_image(ImageRef::from("x.png"));
    let shuffle = timer(&loaded, TimerKind::Shuffle);
    session.on_timer(shuffle.token, shuffle.kind);
    let status = GameStatus::of(&session);
    assert!(status.has_image);
    assert!(status.is_scrambling());
    assert!(!status.preview_enabled());
}

#[test]
fn status_when_playable() {
    let status = GameStatus::of(&playable_session());
    assert!(status.preview_enabled());
    assert!(!status.is_solved());
    assert_eq!(status.moves, 0);
}

#[test]
fn status_tracks_hint() {
    let mut session = playable_session();
    for _ in 0..10 {
        // The empty slot is never adjacent to itself, so this is always a rejected attempt.
        let empty = session.board().map(puzzle::board::Board::empty_index).unwrap_or_default();
        session.try_move(empty);
    }
    assert!(GameStatus::of(&session).hint_available);
}

#[test]
fn status_after_auto_solve() {
    let mut session = playable_session();
    for _ in 0..10 {
        let empty = session.board().map(puzzle::board::Board::empty_index).unwrap_or_default();
        session.try_move(empty);
    }
    session.auto_solve();
    let status = GameStatus::of(&session);
    assert!(status.is_solved());
    assert!(!status.preview_enabled());
    assert!(!status.hint_available);
}

// =============================================================
// moves_label
// =============================================================

#[test]
fn moves_label_pluralizes() {
    let mut status = GameStatus { has_image: true, phase: Phase::Playable, moves: 0, hint_available: false };
    assert_eq!(status.moves_label(), "0 moves");
    status.moves = 1;
    assert_eq!(status.moves_label(), "1 move");
    status.moves = 12;
    assert_eq!(status.moves_label(), "12 moves");
}
