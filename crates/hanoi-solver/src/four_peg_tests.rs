//! Tests for the four-peg engine.

use super::*;
use hanoi_core::HanoiError;
use hanoi_test::{assert_solves, moves_from, supported_disk_counts};

use crate::three_peg::three_peg_minimum;

#[test]
fn test_construction_rejects_out_of_range() {
    assert_eq!(
        FourPegEngine::new(4).unwrap_err(),
        HanoiError::InvalidDiskCount {
            disk_count: 4,
            min: 5,
            max: 10
        }
    );
    assert!(FourPegEngine::new(11).is_err());
}

#[test]
fn test_frame_stewart_result() {
    let mut engine = FourPegEngine::new(5).unwrap();
    let result = engine.solve_frame_stewart();

    assert_eq!(result.algorithm_name(), "FrameStewart_4Peg");
    assert_eq!(result.move_count(), result.moves().len());
    assert!(result.move_count() > 0);
    assert!(engine.verify(result.moves()));
}

#[test]
fn test_recursive_optimized_result() {
    let mut engine = FourPegEngine::new(5).unwrap();
    let result = engine.solve_recursive_optimized();

    assert_eq!(result.algorithm_name(), "Recursive_4Peg");
    assert_eq!(result.move_count(), 13);
    assert!(engine.verify(result.moves()));
}

#[test]
fn test_both_strategies_valid_and_shorter_than_three_pegs() {
    for n in supported_disk_counts() {
        let mut engine = FourPegEngine::new(n).unwrap();
        let frame_stewart = engine.solve_frame_stewart();
        let optimized = engine.solve_recursive_optimized();

        assert_solves(n, 4, frame_stewart.moves());
        assert_solves(n, 4, optimized.moves());
        assert!((frame_stewart.move_count() as u64) < three_peg_minimum(n));
        assert!((optimized.move_count() as u64) < three_peg_minimum(n));
    }
}

#[test]
fn test_frame_stewart_move_counts() {
    let expected = [(5, 13), (6, 17), (7, 25), (8, 33), (9, 41), (10, 49)];
    for (n, count) in expected {
        let mut engine = FourPegEngine::new(n).unwrap();
        assert_eq!(engine.solve_frame_stewart().move_count(), count, "n = {n}");
    }
}

#[test]
fn test_optimized_matches_estimate() {
    for n in supported_disk_counts() {
        let mut engine = FourPegEngine::new(n).unwrap();
        let result = engine.solve_recursive_optimized();
        assert_eq!(result.move_count() as u64, engine.minimum_moves_estimate());
    }
}

#[test]
fn test_estimate_for_five_disks_is_between_bounds() {
    let engine = FourPegEngine::new(5).unwrap();
    let estimate = engine.minimum_moves_estimate();
    assert!(estimate > 1 && estimate < 31);
}

#[test]
fn test_strategies_choose_different_splits() {
    let mut engine = FourPegEngine::new(5).unwrap();
    assert_eq!(engine.optimal_split(5), 3);
    assert_eq!(engine.split_table().best_split(5), 2);

    let frame_stewart = engine.solve_frame_stewart();
    let optimized = engine.solve_recursive_optimized();
    assert_eq!(frame_stewart.move_count(), optimized.move_count());
    assert_ne!(frame_stewart.moves(), optimized.moves());
}

#[test]
fn test_repeated_solves_identical() {
    let mut engine = FourPegEngine::new(8).unwrap();
    let first = engine.solve_frame_stewart();
    let second = engine.solve_frame_stewart();
    assert_eq!(first.moves(), second.moves());

    let first = engine.solve_recursive_optimized();
    let second = engine.solve_recursive_optimized();
    assert_eq!(first.moves(), second.moves());
}

#[test]
fn test_split_cache_is_stable_across_solves() {
    let mut engine = FourPegEngine::new(10).unwrap();
    let before = engine.optimal_split(10);
    engine.solve_frame_stewart();
    assert_eq!(engine.optimal_split(10), before);
}

#[test]
fn test_small_towers_with_custom_range() {
    let range = DiskRange::new(1, 4).unwrap();

    let mut engine = FourPegEngine::with_range(2, range).unwrap();
    let expected = moves_from(&[(1, 0, 1), (2, 0, 3), (1, 1, 3)]);
    assert_eq!(engine.solve_frame_stewart().moves(), expected.as_slice());
    assert_eq!(engine.solve_recursive_optimized().moves(), expected.as_slice());

    for n in 1..=4 {
        let mut engine = FourPegEngine::with_range(n, range).unwrap();
        assert_solves(n, 4, engine.solve_frame_stewart().moves());
        assert_solves(n, 4, engine.solve_recursive_optimized().moves());
    }
}

#[test]
fn test_first_phase_uses_offset_disks() {
    // n = 5, k = 3: the 3-peg phase moves disks 4 and 5 via peg 2.
    let mut engine = FourPegEngine::new(5).unwrap();
    let result = engine.solve_frame_stewart();
    let moves = result.moves();

    assert_eq!(
        &moves[5..8],
        &[Move::new(4, 0, 2), Move::new(5, 0, 3), Move::new(4, 2, 3)]
    );
    assert!(moves[..5].iter().all(|mv| mv.disk <= 3));
    assert!(moves[8..].iter().all(|mv| mv.disk <= 3));
}

#[test]
fn test_recursive_optimized_sequence_for_five_disks() {
    let mut engine = FourPegEngine::new(5).unwrap();
    let expected = moves_from(&[
        (1, 0, 3),
        (2, 0, 1),
        (1, 3, 1),
        (3, 0, 3),
        (4, 0, 2),
        (3, 3, 2),
        (5, 0, 3),
        (3, 2, 0),
        (4, 2, 3),
        (3, 0, 3),
        (1, 1, 0),
        (2, 1, 3),
        (1, 0, 3),
    ]);
    assert_eq!(engine.solve_recursive_optimized().moves(), expected.as_slice());
}

#[test]
fn test_fourth_peg_saves_nothing_below_three_disks() {
    let range = DiskRange::new(1, 4).unwrap();
    for n in 1..=4 {
        let mut engine = FourPegEngine::with_range(n, range).unwrap();
        let frame_stewart = engine.solve_frame_stewart().move_count() as u64;
        let optimized = engine.solve_recursive_optimized().move_count() as u64;
        if n <= 2 {
            assert_eq!(frame_stewart, three_peg_minimum(n));
            assert_eq!(optimized, three_peg_minimum(n));
        } else {
            assert!(frame_stewart < three_peg_minimum(n));
            assert!(optimized < three_peg_minimum(n));
        }
    }
}
