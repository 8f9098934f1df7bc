//! Algorithm results and the records derived from them.

use std::fmt;
use std::time::Duration;

use crate::disk::{Disk, PegCount};
use crate::moves::Move;

/// The move-generation strategies the engines implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Classic divide-and-conquer on 3 pegs.
    #[cfg_attr(feature = "serde", serde(rename = "Recursive_3Peg"))]
    Recursive3Peg,
    /// Explicit work-stack traversal on 3 pegs.
    #[cfg_attr(feature = "serde", serde(rename = "Iterative_3Peg"))]
    Iterative3Peg,
    /// Frame-Stewart split with the closed-form k on 4 pegs.
    #[cfg_attr(feature = "serde", serde(rename = "FrameStewart_4Peg"))]
    FrameStewart4Peg,
    /// Split chosen from the dynamic-programming cost table on 4 pegs.
    #[cfg_attr(feature = "serde", serde(rename = "Recursive_4Peg"))]
    Recursive4Peg,
}

impl Algorithm {
    /// Stable identifying name, as surfaced to collaborators.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Recursive3Peg => "Recursive_3Peg",
            Algorithm::Iterative3Peg => "Iterative_3Peg",
            Algorithm::FrameStewart4Peg => "FrameStewart_4Peg",
            Algorithm::Recursive4Peg => "Recursive_4Peg",
        }
    }

    pub const fn peg_count(self) -> PegCount {
        match self {
            Algorithm::Recursive3Peg | Algorithm::Iterative3Peg => PegCount::Three,
            Algorithm::FrameStewart4Peg | Algorithm::Recursive4Peg => PegCount::Four,
        }
    }

    /// Both algorithms for `pegs`, in the order they are run.
    pub const fn for_pegs(pegs: PegCount) -> [Algorithm; 2] {
        match pegs {
            PegCount::Three => [Algorithm::Recursive3Peg, Algorithm::Iterative3Peg],
            PegCount::Four => [Algorithm::FrameStewart4Peg, Algorithm::Recursive4Peg],
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output of one algorithm invocation.
///
/// Immutable once built; the caller owns it.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use hanoi_core::{Algorithm, AlgorithmResult, Move};
///
/// let moves = vec![Move::new(1, 0, 1), Move::new(2, 0, 2), Move::new(1, 1, 2)];
/// let result = AlgorithmResult::new(Algorithm::Recursive3Peg, moves, Duration::from_micros(3));
///
/// assert_eq!(result.algorithm_name(), "Recursive_3Peg");
/// assert_eq!(result.move_count(), 3);
/// assert_eq!(result.truncated_moves(2).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlgorithmResult {
    algorithm: Algorithm,
    move_count: usize,
    time_taken: Duration,
    moves: Vec<Move>,
}

impl AlgorithmResult {
    pub fn new(algorithm: Algorithm, moves: Vec<Move>, time_taken: Duration) -> Self {
        Self {
            algorithm,
            move_count: moves.len(),
            time_taken,
            moves,
        }
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Wall-clock time of the generation call. May be zero.
    #[inline]
    pub fn time_taken(&self) -> Duration {
        self.time_taken
    }

    pub fn time_taken_ms(&self) -> f64 {
        self.time_taken.as_secs_f64() * 1000.0
    }

    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    /// At most the first `limit` moves, for callers that cap transport size.
    pub fn truncated_moves(&self, limit: usize) -> &[Move] {
        &self.moves[..limit.min(self.moves.len())]
    }

    /// The (name, count, time) triple a collaborator stores per run.
    pub fn performance_record(&self) -> PerformanceRecord {
        PerformanceRecord {
            algorithm_name: self.algorithm_name().to_string(),
            move_count: self.move_count,
            time_taken_ms: self.time_taken_ms(),
        }
    }

    /// Numbered history entries for the first `limit` moves.
    pub fn move_history(&self, limit: usize) -> Vec<MoveRecord> {
        self.truncated_moves(limit)
            .iter()
            .enumerate()
            .map(|(i, mv)| MoveRecord {
                move_number: i + 1,
                disk: mv.disk,
                from_peg: mv.from,
                to_peg: mv.to,
            })
            .collect()
    }
}

/// Performance summary of one algorithm run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerformanceRecord {
    pub algorithm_name: String,
    pub move_count: usize,
    pub time_taken_ms: f64,
}

/// One numbered entry of a move history log. `move_number` starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub move_number: usize,
    pub disk: Disk,
    pub from_peg: usize,
    pub to_peg: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AlgorithmResult {
        let moves = vec![
            Move::new(1, 0, 3),
            Move::new(2, 0, 1),
            Move::new(1, 3, 1),
        ];
        AlgorithmResult::new(Algorithm::FrameStewart4Peg, moves, Duration::from_millis(2))
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(Algorithm::Recursive3Peg.name(), "Recursive_3Peg");
        assert_eq!(Algorithm::Iterative3Peg.name(), "Iterative_3Peg");
        assert_eq!(Algorithm::FrameStewart4Peg.name(), "FrameStewart_4Peg");
        assert_eq!(Algorithm::Recursive4Peg.name(), "Recursive_4Peg");
        assert_eq!(Algorithm::Recursive4Peg.peg_count(), PegCount::Four);
    }

    #[test]
    fn test_truncated_moves_caps_at_len() {
        let result = sample();
        assert_eq!(result.truncated_moves(50).len(), 3);
        assert_eq!(result.truncated_moves(1), &[Move::new(1, 0, 3)]);
        assert!(result.truncated_moves(0).is_empty());
    }

    #[test]
    fn test_performance_record() {
        let record = sample().performance_record();
        assert_eq!(record.algorithm_name, "FrameStewart_4Peg");
        assert_eq!(record.move_count, 3);
        assert!((record.time_taken_ms - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_move_history_numbering() {
        let history = sample().move_history(2);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].move_number, 1);
        assert_eq!(history[1].move_number, 2);
        assert_eq!(history[1].disk, 2);
        assert_eq!(history[1].to_peg, 1);
    }
}
