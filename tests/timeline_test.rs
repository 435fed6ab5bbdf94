//! Tests for time travel: cursor jumps, truncation, and timeline labels.

use tictactoe_timeline::invariants;
use tictactoe_timeline::{Engine, EngineError, MoveOutcome, Player, Position, Square};

fn play(engine: &mut Engine, cells: &[usize]) {
    for &cell in cells {
        let outcome = engine.apply_move(cell).expect("Valid cell index");
        assert_eq!(outcome, MoveOutcome::Applied, "Move at {cell} was rejected");
    }
}

#[test]
fn test_jump_moves_cursor_without_touching_history() {
    let mut engine = Engine::new();
    play(&mut engine, &[4, 0, 8]);
    let history_before: Vec<_> = engine.history().to_vec();

    engine.jump_to(1).expect("Valid step");

    assert_eq!(engine.cursor(), 1);
    assert_eq!(engine.history(), history_before.as_slice());
    // Turn is re-derived from the cursor: O moves from step 1.
    assert_eq!(engine.current_player(), Player::O);
    assert_eq!(engine.status(), "Next player:O");
}

#[test]
fn test_move_after_jump_truncates_the_future() {
    let mut engine = Engine::new();
    play(&mut engine, &[4, 0, 8]);

    engine.jump_to(1).expect("Valid step");
    play(&mut engine, &[2]);

    // Snapshot 1 plus the new move: the old moves at 0 and 8 are gone.
    assert_eq!(engine.history().len(), 3);
    assert_eq!(engine.cursor(), 2);
    assert_eq!(
        engine.board().get(Position::TopRight),
        Square::Occupied(Player::O)
    );
    assert!(engine.board().is_empty(Position::TopLeft));
    assert!(engine.board().is_empty(Position::BottomRight));
    invariants::check_all(&engine).expect("Invariants hold after truncation");
}

#[test]
fn test_jump_out_of_range_errors() {
    let mut engine = Engine::new();
    play(&mut engine, &[4]);

    assert_eq!(
        engine.jump_to(2),
        Err(EngineError::InvalidIndex { index: 2, bound: 2 })
    );
    assert_eq!(engine.cursor(), 1);
}

#[test]
fn test_jumping_stays_legal_after_a_win() {
    let mut engine = Engine::new();
    // X wins the left column.
    play(&mut engine, &[0, 1, 3, 4, 6]);
    assert_eq!(engine.status(), "Winner X");

    engine.jump_to(0).expect("Valid step");
    assert_eq!(engine.status(), "Next player:X");
    engine.jump_to(5).expect("Valid step");
    assert_eq!(engine.status(), "Winner X");
}

#[test]
fn test_win_on_later_snapshot_does_not_block_earlier_moves() {
    let mut engine = Engine::new();
    // X wins the left column on snapshot 5.
    play(&mut engine, &[0, 1, 3, 4, 6]);

    // From snapshot 4 the win has not happened yet, so X may move - and
    // doing so discards the winning snapshot.
    engine.jump_to(4).expect("Valid step");
    let outcome = engine.apply_move(8).expect("Valid cell index");
    assert_eq!(outcome, MoveOutcome::Applied);
    assert_eq!(engine.history().len(), 6);
    assert_eq!(engine.status(), "Next player:O");
    invariants::check_all(&engine).expect("Invariants hold after branching");
}

#[test]
fn test_timeline_entries_pair_labels_with_jump_targets() {
    let mut engine = Engine::new();
    play(&mut engine, &[4, 0]);

    let timeline = engine.timeline();
    assert_eq!(timeline.len(), 3);
    assert_eq!(timeline[0].label(), "Go to game start");
    assert_eq!(timeline[2].label(), "Go to move # 2");

    // Every offered step is a valid jump target.
    for entry in &timeline {
        engine.jump_to(*entry.step()).expect("Valid step");
        assert_eq!(engine.cursor(), *entry.step());
    }
}

#[test]
fn test_invariants_hold_for_a_meandering_session() {
    let mut engine = Engine::new();
    play(&mut engine, &[4, 0, 8, 2]);
    engine.jump_to(2).expect("Valid step");
    play(&mut engine, &[6, 1]);
    engine.jump_to(0).expect("Valid step");
    play(&mut engine, &[3]);

    invariants::check_all(&engine).expect("Invariants hold");
    assert_eq!(engine.history().len(), 2);
    assert_eq!(
        engine.board().get(Position::MiddleLeft),
        Square::Occupied(Player::X)
    );
}
