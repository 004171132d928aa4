//! Scenario tests for the history-keeping engine.

use rewind_tictactoe::{
    GameEngine, GameStatus, IgnoredMove, MoveOutcome, Phase, Player, Position, Square,
    evaluate_winner,
};

fn play_all(engine: &mut GameEngine, cells: &[usize]) {
    for &cell in cells {
        assert!(
            engine.play_move(cell).is_placed(),
            "cell {cell} should be playable"
        );
    }
}

#[test]
fn test_diagonal_win() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 1, 4, 2, 8]);

    let line = engine.winning_line().expect("X completes the diagonal");
    assert_eq!(line.indices(), [0, 4, 8]);
    assert_eq!(line.player(), Player::X);
    assert_eq!(engine.status(), GameStatus::Winner(Player::X));
    assert_eq!(engine.status().phase(), Phase::Won);
}

#[test]
fn test_split_diagonal_is_not_a_win() {
    // X holds 0, 8 and 2; O took the center.
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 4, 8, 1, 2]);

    assert_eq!(evaluate_winner(engine.current_board()), None);
    assert_eq!(engine.status(), GameStatus::NextToMove(Player::O));
}

#[test]
fn test_full_board_draw() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert!(engine.is_draw());
    assert_eq!(engine.status(), GameStatus::Draw);
    assert_eq!(engine.status().phase(), Phase::Drawn);
    assert_eq!(engine.history().len(), 10);
}

#[test]
fn test_draw_is_terminal() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let before = engine.clone();

    for cell in 0..9 {
        assert!(!engine.play_move(cell).is_placed());
    }
    assert_eq!(engine, before);
}

#[test]
fn test_occupied_cell_leaves_state_unchanged() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[4, 0]);
    let before = engine.clone();

    assert_eq!(
        engine.play_move(4),
        MoveOutcome::Ignored(IgnoredMove::Occupied(Position::Center))
    );
    assert_eq!(engine, before);
}

#[test]
fn test_move_after_win_leaves_state_unchanged() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 3, 1, 4, 2]);
    let before = engine.clone();

    assert_eq!(engine.play_move(8), MoveOutcome::Ignored(IgnoredMove::GameOver));
    assert_eq!(engine, before);
}

#[test]
fn test_jump_changes_only_current_step() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 4, 8]);
    let history = engine.history().to_vec();

    for step in [2, 0, 3, 1] {
        assert!(engine.jump_to(step));
        assert_eq!(engine.current_step(), step);
        assert_eq!(engine.history(), history.as_slice());
        assert_eq!(engine.next_player(), Player::for_step(step));
    }

    assert!(!engine.jump_to(4));
    assert_eq!(engine.current_step(), 1);
}

#[test]
fn test_jump_then_play_branches_history() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 4, 8]);
    let replaced = engine.history()[2].last_played().expect("move 2 was played");
    assert_eq!(replaced, Position::Center);

    assert!(engine.jump_to(1));
    assert_eq!(engine.play_move(replaced.to_index()), MoveOutcome::Placed { step: 2 });

    let history = engine.history();
    assert_eq!(history.len(), 3);
    assert_eq!(*history[2].move_number(), 2);
    assert_eq!(*history[2].last_played(), Some(Position::Center));
    assert_eq!(
        history[2].board().get(Position::Center),
        Square::Occupied(Player::O)
    );
    assert!(history[2].board().is_empty(Position::BottomRight));

    // The old move 3 is gone for good.
    assert!(!engine.jump_to(3));
}

#[test]
fn test_jump_back_from_won_position_reopens_play() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 3, 1, 4, 2]);
    assert!(engine.status().is_terminal());

    assert!(engine.jump_to(4));
    assert_eq!(engine.status(), GameStatus::NextToMove(Player::X));
    assert!(engine.play_move(8).is_placed());
    assert_eq!(engine.latest_step(), 5);
    assert_eq!(engine.status(), GameStatus::NextToMove(Player::O));
}

#[test]
fn test_moves_while_behind_use_displayed_board() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 1, 2, 3]);
    engine.jump_to(2);

    // Cell 2 was played at step 3 on the old branch, so it is free here.
    assert!(engine.play_move(2).is_placed());
    assert_eq!(
        engine.current_board().get(Position::TopRight),
        Square::Occupied(Player::X)
    );
    assert_eq!(engine.latest_step(), 3);
}
