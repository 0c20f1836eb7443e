//! End-to-end sessions driven through the public API

use hanoi_core::{Engine, Hint, ManualClock, Phase, Rejection, SequenceRng};

/// Three discs forced onto peg 0 with peg 2 as the target
fn forced_three_disc_game() -> Engine<SequenceRng, ManualClock> {
    let mut engine = Engine::new(SequenceRng::new(vec![0, 1]), ManualClock::new(0));
    engine.set_disc_count(3).unwrap();
    engine.start_game();
    assert_eq!(engine.pegs()[0], vec![3, 2, 1]);
    assert_eq!(engine.target_peg(), 2);
    engine
}

#[test]
fn test_minimal_solution_completes_game() {
    let mut engine = forced_three_disc_game();
    let solution = [(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)];
    let discs = [1, 2, 1, 3, 1, 2, 1];

    for (&(from, to), &disc) in solution.iter().zip(discs.iter()) {
        let record = engine.make_move(from, to).unwrap();
        assert_eq!(record.disc, disc);
    }

    assert!(engine.is_completed());
    assert_eq!(engine.phase(), Phase::Won);
    assert_eq!(engine.move_count(), 7);
    assert_eq!(engine.efficiency(), 100);
    assert!(engine.end_time().is_some());
}

#[test]
fn test_move_from_empty_peg_changes_nothing() {
    let mut engine = Engine::new(SequenceRng::new(vec![1, 0]), ManualClock::new(0));
    engine.set_disc_count(3).unwrap();
    engine.start_game();
    assert!(engine.pegs()[0].is_empty());

    let before = engine.snapshot();
    assert_eq!(engine.make_move(0, 1), Err(Rejection::EmptyPeg(0)));
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_larger_disc_onto_smaller_is_refused() {
    let mut engine = forced_three_disc_game();
    engine.make_move(0, 2).unwrap();
    engine.make_move(0, 1).unwrap();
    engine.make_move(2, 1).unwrap();
    // peg 0 = [3], peg 1 = [2, 1]

    assert!(!engine.is_valid_move(0, 1));
    let before = engine.snapshot();
    assert_eq!(
        engine.make_move(0, 1),
        Err(Rejection::LargerOnSmaller { disc: 3, onto: 1 })
    );
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_min_moves_for_disc_counts() {
    let mut engine = Engine::new(SequenceRng::default(), ManualClock::new(0));
    engine.set_disc_count(4).unwrap();
    assert_eq!(engine.min_moves(), 15);
    engine.set_disc_count(9).unwrap();
    assert_eq!(engine.min_moves(), 511);
}

#[test]
fn test_hint_on_fresh_game_is_legal() {
    let engine = forced_three_disc_game();
    let Hint { from, to } = engine.get_hint().unwrap();
    assert_eq!(from, 0);
    assert!(engine.is_valid_move(from, to));
}

#[test]
fn test_following_hints_never_stalls() {
    let mut engine = forced_three_disc_game();
    for _ in 0..50 {
        let hint = engine.get_hint().expect("a legal move always exists in play");
        engine.make_move(hint.from, hint.to).unwrap();
    }
    assert_eq!(engine.move_count(), 50);
}

#[test]
fn test_undo_then_replay() {
    let mut engine = forced_three_disc_game();
    engine.make_move(0, 2).unwrap();
    engine.make_move(0, 1).unwrap();
    let undone = engine.undo_move().unwrap();
    assert_eq!((undone.from, undone.to), (0, 1));
    engine.make_move(undone.from, undone.to).unwrap();
    assert_eq!(engine.move_count(), 2);
    assert_eq!(engine.move_history().len(), 2);
}
