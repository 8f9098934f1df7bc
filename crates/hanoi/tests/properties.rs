//! End-to-end properties of both engines across the supported disk range.

use hanoi::prelude::*;
use hanoi::{solve_with_config, FourPegEngine, SolutionVerifier, ThreePegEngine};
use hanoi_test::{assert_solves, replay, supported_disk_counts};

#[test]
fn test_three_peg_counts_are_minimal() {
    for n in supported_disk_counts() {
        let results = solve_with_config(3, n, &HanoiConfig::default()).unwrap();
        for result in &results {
            assert_eq!(result.move_count() as u64, (1u64 << n) - 1);
            assert_solves(n, 3, result.moves());
        }
    }
}

#[test]
fn test_four_peg_beats_three_peg() {
    for n in supported_disk_counts() {
        let results = solve_with_config(4, n, &HanoiConfig::default()).unwrap();
        for result in &results {
            assert!(result.move_count() < (1usize << n) - 1);
            assert_solves(n, 4, result.moves());
        }
    }
}

#[test]
fn test_three_peg_algorithms_agree() {
    for n in supported_disk_counts() {
        let mut engine = ThreePegEngine::new(n).unwrap();
        let recursive = engine.solve_recursive();
        let iterative = engine.solve_iterative();
        assert_eq!(recursive.moves(), iterative.moves(), "N={n}");
    }
}

#[test]
fn test_repeated_solves_are_identical() {
    let mut three = ThreePegEngine::new(7).unwrap();
    assert_eq!(three.solve_iterative().moves(), three.solve_iterative().moves());

    let mut four = FourPegEngine::new(7).unwrap();
    let first = four.solve_recursive_optimized();
    let _ = four.solve_frame_stewart();
    assert_eq!(first.moves(), four.solve_recursive_optimized().moves());
}

#[test]
fn test_verifier_rejects_larger_on_smaller() {
    let moves = [Move::new(1, 0, 2), Move::new(2, 0, 2)];
    let engine = ThreePegEngine::new(5).unwrap();
    assert!(!engine.verify(&moves));
    assert!(replay(5, 3, &moves).is_none());
}

#[test]
fn test_verifier_matches_reference_replay() {
    let verifier = SolutionVerifier::for_pegs(6, PegCount::Four);
    let mut engine = FourPegEngine::new(6).unwrap();
    let moves = engine.solve_frame_stewart().into_moves();

    assert!(verifier.verify(&moves));
    assert!(replay(6, 4, &moves).is_some());
    assert!(!verifier.verify(&moves[..moves.len() - 1]));
}

#[test]
fn test_five_disk_scenarios() {
    let mut three = ThreePegEngine::new(5).unwrap();
    let result = three.solve_recursive();
    assert_eq!(result.move_count(), 31);
    assert_eq!(result.moves()[0], Move::new(1, 0, 2));
    assert!(three.verify(result.moves()));

    let mut four = FourPegEngine::new(5).unwrap();
    let result = four.solve_frame_stewart();
    assert_eq!(result.move_count(), 13);
    assert!(four.verify(result.moves()));

    let estimate = four.minimum_moves_estimate();
    assert!(estimate > 1 && estimate < 31);
}

#[test]
fn test_split_cache_is_stable() {
    let mut engine = FourPegEngine::new(10).unwrap();
    for n in 0..=10 {
        assert_eq!(engine.optimal_split(n), engine.optimal_split(n));
    }
}

#[test]
fn test_facade_rejects_bad_input() {
    assert_eq!(
        solve_with_config(5, 6, &HanoiConfig::default()).unwrap_err(),
        HanoiError::InvalidPegCount(5)
    );
    assert!(matches!(
        solve_with_config(3, 4, &HanoiConfig::default()),
        Err(HanoiError::InvalidDiskCount { disk_count: 4, .. })
    ));
}

#[test]
fn test_facade_solve_uses_defaults_without_config_file() {
    let results = hanoi::solve(3, 5).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(hanoi::minimum_moves(4, 10).unwrap(), 49);
}
