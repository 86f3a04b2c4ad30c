//! Game state tests - end-to-end scenarios through the public engine API

use falling_blocks::core::{Board, GameState, ScriptedSource, TickOutcome};
use falling_blocks::types::{Color, GameAction, ShapeKind};

fn game_with(kind: ShapeKind, color: Color, board: Board) -> GameState<ScriptedSource> {
    GameState::with_board(board, ScriptedSource::repeat(kind, color))
}

#[test]
fn test_i_piece_falls_and_locks_on_floor() {
    let mut game = game_with(ShapeKind::I, Color::Cyan, Board::new(10, 20));
    assert_eq!((game.active().x, game.active().y), (4, 0));

    for expected_y in 1..=19 {
        assert_eq!(game.tick(), TickOutcome::Fell);
        assert_eq!(game.active().y, expected_y);
    }

    assert_eq!(game.tick(), TickOutcome::Locked { rows_cleared: 0 });

    let bottom = game.board().row(19);
    for (x, cell) in bottom.iter().enumerate() {
        let expected = if (4..=7).contains(&x) { Some(Color::Cyan) } else { None };
        assert_eq!(*cell, expected, "column {}", x);
    }
    assert_eq!(game.board().occupied_count(), 4);

    // The next piece is already waiting at the spawn point.
    assert_eq!((game.active().x, game.active().y), (4, 0));
    assert!(!game.game_over());
}

#[test]
fn test_o_piece_completes_and_clears_bottom_row() {
    let mut board = Board::new(10, 20);
    for x in 0..10 {
        if x != 4 && x != 5 {
            board.set(x, 19, Some(Color::Red));
        }
    }
    let mut game = game_with(ShapeKind::O, Color::Yellow, board);

    let mut falls = 0;
    let outcome = loop {
        match game.tick() {
            TickOutcome::Fell => falls += 1,
            other => break other,
        }
    };
    assert_eq!(falls, 18);
    assert_eq!(outcome, TickOutcome::Locked { rows_cleared: 1 });

    // Only the upper half of the O survives, shifted down into row 19.
    let board = game.board();
    assert_eq!(board.occupied_count(), 2);
    assert_eq!(board.get(4, 19), Some(Some(Color::Yellow)));
    assert_eq!(board.get(5, 19), Some(Some(Color::Yellow)));
    assert!(board.row(18).iter().all(|c| c.is_none()));
    assert!(!board.is_row_full(19));

    let event = game.take_last_event().unwrap();
    assert_eq!(event.rows_cleared, 1);
    assert!(!event.topped_out);
}

#[test]
fn test_blocked_spawn_ends_game_at_start() {
    let mut board = Board::new(10, 20);
    // Rows 1..=19 filled except column 0, so nothing clears.
    for y in 1..20 {
        for x in 1..10 {
            board.set(x, y, Some(Color::Blue));
        }
    }
    let mut game = game_with(ShapeKind::O, Color::Yellow, board);
    assert!(game.game_over());

    let frozen = game.board().clone();
    let active = game.active();

    assert_eq!(game.tick(), TickOutcome::Idle);
    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
    ] {
        assert!(!game.apply_action(action), "{:?}", action);
    }

    assert_eq!(game.board(), &frozen);
    assert_eq!(game.active(), active);
    assert!(game.snapshot().game_over);
}

#[test]
fn test_lock_then_blocked_spawn_tops_out() {
    let mut board = Board::new(10, 20);
    // Rows 2..=19 filled except column 0: the first O cannot fall at all.
    for y in 2..20 {
        for x in 1..10 {
            board.set(x, y, Some(Color::Blue));
        }
    }
    let mut game = game_with(ShapeKind::O, Color::Yellow, board);
    assert!(!game.game_over());

    assert_eq!(game.tick(), TickOutcome::ToppedOut { rows_cleared: 0 });
    assert!(game.game_over());
    assert_eq!(game.board().get(4, 0), Some(Some(Color::Yellow)));
    assert_eq!(game.board().get(5, 1), Some(Some(Color::Yellow)));

    let event = game.take_last_event().unwrap();
    assert!(event.topped_out);
    assert_eq!(game.tick(), TickOutcome::Idle);
}

#[test]
fn test_restart_after_game_over() {
    let mut board = Board::new(10, 20);
    for y in 2..20 {
        for x in 1..10 {
            board.set(x, y, Some(Color::Blue));
        }
    }
    let mut game = game_with(ShapeKind::O, Color::Yellow, board);
    game.tick();
    assert!(game.game_over());

    assert!(game.apply_action(GameAction::Restart));
    assert!(!game.game_over());
    assert_eq!(game.board().occupied_count(), 0);
    assert_eq!((game.active().x, game.active().y), (4, 0));
    assert_eq!(game.tick(), TickOutcome::Fell);
}

#[test]
fn test_rotation_rejected_against_stack() {
    let mut board = Board::new(10, 20);
    // A block right under the I's anchor column.
    board.set(4, 2, Some(Color::Red));
    let mut game = game_with(ShapeKind::I, Color::Cyan, board);

    // Vertical I at (4, 0) would cover rows 0..=3 in column 4.
    let before = game.active();
    assert!(!game.rotate());
    assert_eq!(game.active(), before);

    // One column over it fits.
    assert!(game.move_right());
    assert!(game.rotate());
}

#[test]
fn test_seeded_games_replay_identically() {
    let script = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::SoftDrop,
        GameAction::MoveRight,
    ];
    let mut a = GameState::new(2024);
    let mut b = GameState::new(2024);

    for step in 0..500 {
        let action = script[step % script.len()];
        assert_eq!(a.apply_action(action), b.apply_action(action));
        assert_eq!(a.tick(), b.tick());
    }
    assert_eq!(a.snapshot(), b.snapshot());
}
