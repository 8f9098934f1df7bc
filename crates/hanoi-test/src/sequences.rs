//! Known solutions for small towers.

use hanoi_core::Move;

use crate::moves_from;

/// The 7-move solution for 3 disks, peg 0 to peg 2.
pub fn three_disks_three_pegs() -> Vec<Move> {
    moves_from(&[
        (1, 0, 2),
        (2, 0, 1),
        (1, 2, 1),
        (3, 0, 2),
        (1, 1, 0),
        (2, 1, 2),
        (1, 0, 2),
    ])
}

/// The 3-move solution for 2 disks, peg 0 to peg 3 via peg 1.
pub fn two_disks_four_pegs() -> Vec<Move> {
    moves_from(&[(1, 0, 1), (2, 0, 3), (1, 1, 3)])
}
