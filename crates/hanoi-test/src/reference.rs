//! Reference replay.
//!
//! Deliberately naive: nested `Vec`s and direct index checks, so it can
//! cross-check the verifier in `hanoi-core`.

use hanoi_core::{Disk, Move};

/// Replays `moves` from the initial configuration.
///
/// Returns the final pegs (bottom to top), or `None` at the first move that
/// names a missing peg, a disk not on top, or lands on a smaller disk.
pub fn replay(disk_count: Disk, peg_count: usize, moves: &[Move]) -> Option<Vec<Vec<Disk>>> {
    let mut pegs: Vec<Vec<Disk>> = vec![Vec::new(); peg_count];
    pegs[0] = (1..=disk_count).rev().collect();

    for mv in moves {
        if mv.from >= peg_count || mv.to >= peg_count {
            return None;
        }
        if pegs[mv.from].last() != Some(&mv.disk) {
            return None;
        }
        if let Some(&top) = pegs[mv.to].last() {
            if top < mv.disk {
                return None;
            }
        }
        pegs[mv.from].pop();
        pegs[mv.to].push(mv.disk);
    }
    Some(pegs)
}

/// Panics unless `moves` carries all disks onto the last peg.
pub fn assert_solves(disk_count: Disk, peg_count: usize, moves: &[Move]) {
    let pegs = replay(disk_count, peg_count, moves)
        .unwrap_or_else(|| panic!("illegal move in {disk_count}-disk sequence"));
    let expected: Vec<Disk> = (1..=disk_count).rev().collect();

    assert_eq!(pegs[peg_count - 1], expected, "disks not on destination peg");
    for (i, peg) in pegs.iter().enumerate().take(peg_count - 1) {
        assert!(peg.is_empty(), "peg {i} not empty: {peg:?}");
    }
}
