//! Peg state for replaying and playing moves.
//!
//! Every peg, read bottom to top, is strictly decreasing in disk size, and
//! the pegs together hold each disk in `1..=N` exactly once. Both hold after
//! every successful [`Board::apply`] or [`Board::move_top`]; a rejected move
//! leaves the board untouched.

use smallvec::SmallVec;
use thiserror::Error;

use crate::disk::Disk;
use crate::moves::Move;

type Peg = SmallVec<[Disk; 16]>;

/// Why a move cannot be applied to the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Invalid peg {peg}: board has {peg_count} pegs")]
    PegOutOfRange { peg: usize, peg_count: usize },

    #[error("Source and destination pegs must be different (peg {0})")]
    SamePeg(usize),

    #[error("No disks on peg {0}")]
    EmptyPeg(usize),

    #[error("Disk {disk} is not on top of peg {peg} (top is {top})")]
    DiskNotOnTop { disk: Disk, peg: usize, top: Disk },

    #[error("Cannot place disk {disk} on smaller disk {onto}")]
    LargerOnSmaller { disk: Disk, onto: Disk },
}

/// A board of pegs holding disks `1..=disk_count`.
///
/// # Examples
///
/// ```
/// use hanoi_core::{Board, Move};
///
/// let mut board = Board::new(3, 3);
/// assert_eq!(board.peg(0), &[3, 2, 1]);
///
/// board.apply(Move::new(1, 0, 2)).unwrap();
/// assert_eq!(board.top(2), Some(1));
/// assert!(board.apply(Move::new(2, 0, 2)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    disk_count: Disk,
    pegs: Vec<Peg>,
}

impl Board {
    /// All disks on peg 0, largest at the bottom; other pegs empty.
    pub fn new(disk_count: Disk, peg_count: usize) -> Self {
        let mut pegs: Vec<Peg> = (0..peg_count).map(|_| Peg::new()).collect();
        if let Some(first) = pegs.first_mut() {
            first.extend((1..=disk_count).rev());
        }
        Self { disk_count, pegs }
    }

    #[inline]
    pub fn disk_count(&self) -> Disk {
        self.disk_count
    }

    #[inline]
    pub fn peg_count(&self) -> usize {
        self.pegs.len()
    }

    /// Disks on `peg`, bottom to top. Empty for an out-of-range index.
    pub fn peg(&self, peg: usize) -> &[Disk] {
        self.pegs.get(peg).map(|p| p.as_slice()).unwrap_or(&[])
    }

    /// All pegs, bottom to top, as owned vectors.
    pub fn pegs(&self) -> Vec<Vec<Disk>> {
        self.pegs.iter().map(|p| p.to_vec()).collect()
    }

    #[inline]
    pub fn top(&self, peg: usize) -> Option<Disk> {
        self.pegs.get(peg).and_then(|p| p.last().copied())
    }

    /// Applies a fully specified move, checking that `mv.disk` is the
    /// accessible disk on `mv.from`.
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        self.check_peg(mv.from)?;
        self.check_peg(mv.to)?;

        let top = self.top(mv.from).ok_or(MoveError::EmptyPeg(mv.from))?;
        if top != mv.disk {
            return Err(MoveError::DiskNotOnTop {
                disk: mv.disk,
                peg: mv.from,
                top,
            });
        }
        self.check_placement(mv.disk, mv.to)?;

        self.transfer(mv.from, mv.to);
        Ok(())
    }

    /// Moves whatever disk is on top of `from` onto `to`.
    pub fn move_top(&mut self, from: usize, to: usize) -> Result<Move, MoveError> {
        let disk = self.validate_top_move(from, to)?;
        self.transfer(from, to);
        Ok(Move::new(disk, from, to))
    }

    /// Checks a top-disk move without applying it, returning the disk that
    /// would move.
    pub fn validate_top_move(&self, from: usize, to: usize) -> Result<Disk, MoveError> {
        self.check_peg(from)?;
        self.check_peg(to)?;
        if from == to {
            return Err(MoveError::SamePeg(from));
        }
        let disk = self.top(from).ok_or(MoveError::EmptyPeg(from))?;
        self.check_placement(disk, to)?;
        Ok(disk)
    }

    /// True when every disk sits on `destination` in descending order and
    /// every other peg is empty.
    pub fn is_solved(&self, destination: usize) -> bool {
        let Some(target) = self.pegs.get(destination) else {
            return false;
        };
        let others_empty = self
            .pegs
            .iter()
            .enumerate()
            .all(|(i, p)| i == destination || p.is_empty());

        others_empty && target.iter().copied().eq((1..=self.disk_count).rev())
    }

    /// Restores the initial configuration.
    pub fn reset(&mut self) {
        *self = Self::new(self.disk_count, self.pegs.len());
    }

    fn check_peg(&self, peg: usize) -> Result<(), MoveError> {
        if peg < self.pegs.len() {
            Ok(())
        } else {
            Err(MoveError::PegOutOfRange {
                peg,
                peg_count: self.pegs.len(),
            })
        }
    }

    fn check_placement(&self, disk: Disk, to: usize) -> Result<(), MoveError> {
        match self.top(to) {
            Some(onto) if onto < disk => Err(MoveError::LargerOnSmaller { disk, onto }),
            _ => Ok(()),
        }
    }

    fn transfer(&mut self, from: usize, to: usize) {
        if let Some(disk) = self.pegs[from].pop() {
            self.pegs[to].push(disk);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_configuration() {
        let board = Board::new(5, 4);
        assert_eq!(board.peg_count(), 4);
        assert_eq!(board.peg(0), &[5, 4, 3, 2, 1]);
        assert!(board.peg(1).is_empty());
        assert!(board.peg(9).is_empty());
        assert_eq!(board.top(0), Some(1));
        assert!(board.is_solved(0));
        assert!(!board.is_solved(3));
    }

    #[test]
    fn test_apply_rejects_hidden_disk() {
        let mut board = Board::new(3, 3);
        assert_eq!(
            board.apply(Move::new(2, 0, 1)),
            Err(MoveError::DiskNotOnTop {
                disk: 2,
                peg: 0,
                top: 1
            })
        );
        assert_eq!(board.peg(0), &[3, 2, 1]);
    }

    #[test]
    fn test_apply_rejects_larger_on_smaller() {
        let mut board = Board::new(3, 3);
        board.apply(Move::new(1, 0, 2)).unwrap();
        assert_eq!(
            board.apply(Move::new(2, 0, 2)),
            Err(MoveError::LargerOnSmaller { disk: 2, onto: 1 })
        );
    }

    #[test]
    fn test_apply_rejects_out_of_range_and_empty() {
        let mut board = Board::new(3, 3);
        assert_eq!(
            board.apply(Move::new(1, 0, 3)),
            Err(MoveError::PegOutOfRange {
                peg: 3,
                peg_count: 3
            })
        );
        assert_eq!(board.apply(Move::new(1, 1, 2)), Err(MoveError::EmptyPeg(1)));
    }

    #[test]
    fn test_move_top() {
        let mut board = Board::new(2, 3);
        assert_eq!(board.move_top(0, 1), Ok(Move::new(1, 0, 1)));
        assert_eq!(board.move_top(0, 0), Err(MoveError::SamePeg(0)));
        assert_eq!(board.move_top(0, 1), Err(MoveError::LargerOnSmaller { disk: 2, onto: 1 }));
        assert_eq!(board.move_top(0, 2), Ok(Move::new(2, 0, 2)));
        assert_eq!(board.move_top(1, 2), Ok(Move::new(1, 1, 2)));
        assert!(board.is_solved(2));
    }

    #[test]
    fn test_reset() {
        let mut board = Board::new(3, 3);
        board.move_top(0, 2).unwrap();
        board.reset();
        assert_eq!(board, Board::new(3, 3));
    }
}
