//! Replay-based solution verification.
//!
//! Verification is a predicate: a bad sequence yields `false` (or a
//! [`VerifyError`] from [`SolutionVerifier::check`]), never a panic. The
//! caller's moves are only read; replay happens on a private [`Board`].

use thiserror::Error;

use crate::board::{Board, MoveError};
use crate::disk::{Disk, PegCount};
use crate::moves::Move;

/// Why a move sequence is not a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// Move `index` (0-based) cannot be applied.
    #[error("Move {index} is illegal: {source}")]
    Illegal {
        index: usize,
        #[source]
        source: MoveError,
    },

    /// Every move applied but the board is not solved.
    #[error("Sequence ended without all disks on peg {destination}")]
    Incomplete { destination: usize },
}

/// Replays move sequences from the initial configuration.
///
/// # Examples
///
/// ```
/// use hanoi_core::{Move, PegCount, SolutionVerifier};
///
/// let verifier = SolutionVerifier::for_pegs(1, PegCount::Three);
/// assert!(verifier.verify(&[Move::new(1, 0, 2)]));
/// assert!(!verifier.verify(&[Move::new(1, 0, 1)]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionVerifier {
    disk_count: Disk,
    peg_count: usize,
    destination: usize,
}

impl SolutionVerifier {
    pub fn new(disk_count: Disk, peg_count: usize, destination: usize) -> Self {
        Self {
            disk_count,
            peg_count,
            destination,
        }
    }

    /// Verifier for a standard board whose destination is the last peg.
    pub fn for_pegs(disk_count: Disk, pegs: PegCount) -> Self {
        Self::new(disk_count, pegs.count(), pegs.destination())
    }

    #[inline]
    pub fn destination(&self) -> usize {
        self.destination
    }

    /// Returns true iff `moves` is legal throughout and ends solved.
    pub fn verify(&self, moves: &[Move]) -> bool {
        self.check(moves).is_ok()
    }

    /// Like [`verify`](Self::verify), reporting the first failure.
    pub fn check(&self, moves: &[Move]) -> Result<(), VerifyError> {
        self.replay(moves).map(|_| ())
    }

    /// Replays `moves` and returns the final board if the sequence solves
    /// the puzzle.
    pub fn replay(&self, moves: &[Move]) -> Result<Board, VerifyError> {
        let mut board = Board::new(self.disk_count, self.peg_count);
        for (index, mv) in moves.iter().enumerate() {
            board
                .apply(*mv)
                .map_err(|source| VerifyError::Illegal { index, source })?;
        }
        if board.is_solved(self.destination) {
            Ok(board)
        } else {
            Err(VerifyError::Incomplete {
                destination: self.destination,
            })
        }
    }
}
