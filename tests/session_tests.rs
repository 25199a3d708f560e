//! Session tests - tick cycle, faller lifecycle and end-to-end scenarios

use columns::core::{Field, Session, SessionConfig, Token};
use columns::types::{FallerState, GameAction, JewelColor, TokenState};

use JewelColor::*;

fn faller_state(session: &Session) -> Option<FallerState> {
    session.active_faller().map(|f| f.state())
}

/// Column of alternating colors from `top` down to the floor, no runs.
fn stack_column(session: &mut Session, col: usize, top: usize) {
    let bottom = session.field().bottom_row();
    for (i, row) in (top..=bottom).enumerate() {
        let color = if i % 2 == 0 { Orange } else { Purple };
        session.field_mut().set(row, col, Token::new(color));
    }
}

#[test]
fn test_vertical_triple_lands_freezes_and_matches() {
    let mut session = Session::create(13, 6).unwrap();
    assert!(session.spawn_faller_at(3, [Red, Red, Red]));

    // Bottom jewel starts on row 2 and the visible floor is row 14.
    for _ in 0..11 {
        session.step();
        assert_eq!(faller_state(&session), Some(FallerState::Falling));
    }
    session.step();
    let faller = *session.active_faller().unwrap();
    assert_eq!(faller.row(), 14);
    assert_eq!(faller.state(), FallerState::Landed);
    for (row, col) in faller.cells() {
        assert_eq!(session.field().at(row, col), Token::with_state(Red, TokenState::Landed));
    }

    // Next tick freezes it and the vertical run is marked at once.
    session.step();
    assert!(session.active_faller().is_none());
    for row in 12..=14 {
        assert!(session.field().at(row, 3).is_jewel_in(TokenState::Matched));
    }
    assert!(session.field().has_match());

    // Then the run is cleared before anything new spawns.
    session.step();
    assert!(session.active_faller().is_none());
    assert_eq!(session.field().jewel_count(), 0);

    session.step();
    assert!(session.active_faller().is_some());
    assert!(!session.is_game_over());
}

#[test]
fn test_row_counter_tracks_cells_while_falling() {
    let mut session = Session::create(13, 6).unwrap();
    session.spawn_faller_at(1, [Red, Green, Blue]);

    for expected in 3..=8 {
        session.step();
        let faller = session.active_faller().unwrap();
        assert_eq!(faller.row(), expected);
        let colors: Vec<_> = faller
            .cells()
            .iter()
            .map(|&(r, c)| session.field().at(r, c).color())
            .collect();
        assert_eq!(colors, vec![Some(Red), Some(Green), Some(Blue)]);
        assert!(session.field().is_empty(faller.top_row() - 1, 1));
    }
}

#[test]
fn test_lands_on_existing_stack() {
    let mut session = Session::create(13, 6).unwrap();
    stack_column(&mut session, 2, 10);
    session.spawn_faller_at(2, [Red, Green, Blue]);

    // Rows 2..=9 are free: seven steps to rest on row 9.
    for _ in 0..7 {
        session.step();
    }
    let faller = session.active_faller().unwrap();
    assert_eq!(faller.row(), 9);
    assert_eq!(faller.state(), FallerState::Landed);
}

#[test]
fn test_move_onto_ledge_lands_and_off_ledge_unlands() {
    let mut session = Session::create(13, 6).unwrap();
    stack_column(&mut session, 2, 5);
    session.spawn_faller_at(3, [Blue, Blue, Yellow]);
    session.step();
    session.step();
    assert_eq!(session.active_faller().unwrap().row(), 4);
    assert_eq!(faller_state(&session), Some(FallerState::Falling));

    assert!(session.move_left());
    assert_eq!(session.active_faller().unwrap().column(), 2);
    assert_eq!(faller_state(&session), Some(FallerState::Landed));
    assert_eq!(session.field().at(4, 2).state(), TokenState::Landed);

    assert!(session.move_right());
    assert_eq!(session.active_faller().unwrap().column(), 3);
    assert_eq!(faller_state(&session), Some(FallerState::Falling));
    for row in 2..=4 {
        assert!(session.field().is_empty(row, 2));
        assert_eq!(session.field().at(row, 3).state(), TokenState::Falling);
    }
}

#[test]
fn test_landed_faller_unlands_instead_of_freezing() {
    let mut session = Session::create(13, 6).unwrap();
    stack_column(&mut session, 2, 5);
    session.spawn_faller_at(3, [Blue, Blue, Yellow]);
    session.step();
    session.step();
    session.move_left();
    assert_eq!(faller_state(&session), Some(FallerState::Landed));

    // Knock two jewels of support away behind the session's back. Gravity
    // carries the faller one row, and the next check must resume falling
    // rather than freeze it in mid-air.
    session.field_mut().set(5, 2, Token::EMPTY);
    session.field_mut().set(6, 2, Token::EMPTY);
    session.step();
    let faller = session.active_faller().unwrap();
    assert_eq!(faller.row(), 5);
    assert_eq!(faller.state(), FallerState::Falling);
    assert_eq!(session.field().at(5, 2), faller.token(2));
}

#[test]
fn test_move_blocked_by_neighbor_stack() {
    let mut session = Session::create(13, 6).unwrap();
    stack_column(&mut session, 1, 2);
    session.spawn_faller_at(2, [Red, Green, Blue]);

    assert!(!session.move_left());
    assert_eq!(session.active_faller().unwrap().column(), 2);
}

#[test]
fn test_move_left_at_wall_is_rejected() {
    let mut session = Session::create(13, 6).unwrap();
    session.spawn_faller_at(0, [Red, Green, Blue]);
    let before = session.field().clone();

    assert!(!session.move_left());
    assert_eq!(session.active_faller().unwrap().column(), 0);
    assert_eq!(session.field(), &before);
}

#[test]
fn test_rotate_through_session() {
    let mut session = Session::create(13, 6).unwrap();
    session.spawn_faller_at(4, [Red, Green, Blue]);

    assert!(session.apply_action(GameAction::Rotate));
    assert_eq!(session.active_faller().unwrap().components(), [Blue, Red, Green]);
    assert_eq!(session.field().at(0, 4).color(), Some(Blue));
    assert_eq!(session.field().at(2, 4).color(), Some(Green));
}

#[test]
fn test_intents_without_faller_are_noops() {
    let mut session = Session::create(13, 6).unwrap();
    assert!(!session.move_left());
    assert!(!session.move_right());
    assert!(!session.rotate());
    assert_eq!(session.field().jewel_count(), 0);
}

#[test]
fn test_soft_drop_action_speeds_up_ticks() {
    let mut session = Session::create(13, 6).unwrap();
    session.start();
    assert!(session.apply_action(GameAction::SoftDrop));
    assert!(session.soft_drop());

    let row = session.active_faller().unwrap().row();
    assert!(!session.tick(100));
    assert!(session.tick(16));
    assert_eq!(session.active_faller().unwrap().row(), row + 1);

    session.set_soft_drop(false);
    assert!(!session.tick(500));
}

#[test]
fn test_chain_resolves_over_consecutive_ticks() {
    let mut session = Session::create(4, 3).unwrap();
    *session.field_mut() = Field::from_visible_rows(&[
        "B..", //
        "RRR", //
        ".BB", //
        "YGG",
    ])
    .unwrap();
    assert!(session.field_mut().scan_and_mark_matches());

    // Reds go, the blue drops into the gap and completes a new row.
    session.step();
    assert_eq!(
        session.field().render_rows(),
        vec!["...", "...", "...", "...", "BBB", "YGG"]
    );
    assert!(session.field().has_match());
    assert!(session.active_faller().is_none());

    session.step();
    assert_eq!(
        session.field().render_rows(),
        vec!["...", "...", "...", "...", "...", "YGG"]
    );
    assert!(!session.field().has_match());

    session.step();
    assert!(session.active_faller().is_some());
}

#[test]
fn test_blocked_spawn_is_game_over() {
    let mut session = Session::create(13, 6).unwrap();
    session.field_mut().set(2, 4, Token::new(Green));

    assert!(!session.spawn_faller_at(4, [Red, Green, Blue]));
    assert!(session.is_game_over());
    assert!(session.active_faller().is_none());
}

#[test]
fn test_frozen_jewel_in_hidden_rows_ends_game() {
    // A single visible row: every faller freezes with two jewels hidden.
    let mut session = Session::create(1, 1).unwrap();
    assert!(session.spawn_faller_at(0, [Red, Green, Blue]));

    session.step();
    assert!(session.active_faller().is_none());
    assert!(!session.is_game_over());

    session.step();
    assert!(session.is_game_over());
    assert!(session.active_faller().is_none());
}

#[test]
fn test_match_reaching_hidden_rows_is_cleared_not_game_over() {
    let mut session = Session::create(1, 1).unwrap();
    session.spawn_faller_at(0, [Pink, Pink, Pink]);

    session.step();
    assert!(session.field().has_match());

    session.step();
    assert!(!session.is_game_over());
    assert_eq!(session.field().jewel_count(), 0);
}

#[test]
fn test_same_seed_replays_same_game() {
    let config = SessionConfig::default().with_seed(2024);
    let mut a = Session::new(config.clone()).unwrap();
    let mut b = Session::new(config).unwrap();

    for i in 0..400u32 {
        if i % 7 == 0 {
            a.move_left();
            b.move_left();
        }
        if i % 11 == 0 {
            a.rotate();
            b.rotate();
        }
        a.tick(120);
        b.tick(120);
    }

    assert_eq!(a.field(), b.field());
    assert_eq!(a.is_game_over(), b.is_game_over());
}

#[test]
fn test_random_play_keeps_faller_and_field_in_sync() {
    let mut session = Session::new(SessionConfig::default().with_seed(77)).unwrap();
    session.set_soft_drop(true);

    for i in 0..3000u32 {
        match i % 5 {
            0 => {
                session.move_left();
            }
            2 => {
                session.rotate();
            }
            3 => {
                session.move_right();
            }
            _ => {}
        }
        session.tick(101);

        if let Some(faller) = session.active_faller() {
            for (i, (row, col)) in faller.cells().into_iter().enumerate() {
                assert_eq!(session.field().at(row, col), faller.token(i));
            }
        }
        if session.is_game_over() {
            break;
        }
    }
}
