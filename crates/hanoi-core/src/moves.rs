//! Moves and the engine-owned move log.

use std::fmt;
use std::ops::Deref;

use crate::disk::Disk;

/// A single transfer of `disk` from one peg to another.
///
/// A move is well-formed on its own; whether it is legal depends on the
/// board it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub disk: Disk,
    pub from: usize,
    pub to: usize,
}

impl Move {
    #[inline]
    pub const fn new(disk: Disk, from: usize, to: usize) -> Self {
        Self { disk, from, to }
    }
}

impl From<(Disk, usize, usize)> for Move {
    fn from((disk, from, to): (Disk, usize, usize)) -> Self {
        Self::new(disk, from, to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "disk {}: {} -> {}", self.disk, self.from, self.to)
    }
}

/// Append-only buffer of moves written during generation.
///
/// Engines own exactly one log and clear it at the start of every solve.
/// Reads go through `Deref<Target = [Move]>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a log with room for `capacity` moves.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            moves: Vec::with_capacity(capacity),
        }
    }

    /// Records a move.
    #[inline]
    pub fn record(&mut self, disk: Disk, from: usize, to: usize) {
        self.moves.push(Move::new(disk, from, to));
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Copies the recorded moves out, leaving the log intact.
    pub fn snapshot(&self) -> Vec<Move> {
        self.moves.clone()
    }

    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }
}

impl Deref for MoveLog {
    type Target = [Move];

    fn deref(&self) -> &[Move] {
        &self.moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_clear() {
        let mut log = MoveLog::new();
        log.record(1, 0, 2);
        log.record(2, 0, 1);
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], Move::new(1, 0, 2));

        let snapshot = log.snapshot();
        log.clear();
        assert!(log.is_empty());
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::from((3, 1, 2)).to_string(), "disk 3: 1 -> 2");
    }
}
