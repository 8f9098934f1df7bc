//! Four-peg engine.
//!
//! Both strategies share one recursion: move the top `k` disks to the
//! first spare with all four pegs, move the remaining `n - k` disks to the
//! destination with the 3-peg algorithm (the first spare is blocked by the
//! smaller tower), then move the `k` disks onto the destination with all
//! four pegs. Only the choice of `k` differs:
//! - **Frame-Stewart**: closed-form split from a [`SplitCache`]
//! - **Optimized recursive**: split from a [`SplitTable`], with the
//!   destination as the first spare while the top group moves aside
//!
//! Sub-problems work on a contiguous disk range, so every call carries the
//! absolute disk offset explicitly.

use hanoi_core::{
    Algorithm, AlgorithmResult, Disk, DiskRange, Move, MoveLog, PegCount, Result,
    SolutionVerifier,
};
use tracing::debug;

use crate::split::{SplitCache, SplitPolicy, SplitTable};
use crate::stats::GenerationTimer;
use crate::three_peg::move_tower;

const SOURCE: usize = 0;
const AUX1: usize = 1;
const AUX2: usize = 2;
const DESTINATION: usize = 3;

/// One 4-peg generation run: a split policy writing into a move log.
struct SplitRecursion<'a, P: SplitPolicy> {
    policy: &'a mut P,
    moves: &'a mut MoveLog,
}

impl<P: SplitPolicy> SplitRecursion<'_, P> {
    /// Moves disks `disk_offset + 1 ..= disk_offset + n` from `source` to
    /// `destination`.
    fn solve(
        &mut self,
        n: Disk,
        source: usize,
        destination: usize,
        aux1: usize,
        aux2: usize,
        disk_offset: Disk,
    ) {
        match n {
            0 => {}
            1 => self.moves.record(disk_offset + 1, source, destination),
            2 => {
                self.moves.record(disk_offset + 1, source, aux1);
                self.moves.record(disk_offset + 2, source, destination);
                self.moves.record(disk_offset + 1, aux1, destination);
            }
            _ => {
                let k = self.policy.split(n);
                let (spare1, spare2) = self.policy.aside_spares(aux2, destination);
                self.solve(k, source, aux1, spare1, spare2, disk_offset);
                move_tower(self.moves, n - k, source, aux2, destination, disk_offset + k);
                self.solve(k, aux1, destination, source, aux2, disk_offset);
            }
        }
    }
}

/// Solver for the 4-peg puzzle, moving all disks from peg 0 to peg 3.
///
/// Construction validates the disk count exactly like
/// [`ThreePegEngine`](crate::ThreePegEngine). The engine keeps one move
/// buffer, rebuilt on every solve, and a [`SplitCache`] that persists
/// across solves. Solving takes `&mut self`: sharing one engine between
/// threads needs external synchronization, or one engine per thread.
///
/// Neither strategy is proven optimal. Both produce valid solutions with
/// fewer than `2^N - 1` moves for every `N >= 3`, and may choose different
/// splits. For `N <= 2` a fourth peg saves nothing: 1 and 3 moves, the same
/// as on three pegs, which only a custom range can reach.
///
/// # Examples
///
/// ```
/// use hanoi_solver::FourPegEngine;
///
/// let mut engine = FourPegEngine::new(5).unwrap();
/// let result = engine.solve_frame_stewart();
///
/// assert_eq!(result.move_count(), 13);
/// assert!(engine.verify(result.moves()));
/// assert_eq!(engine.minimum_moves_estimate(), 13);
/// ```
#[derive(Debug, Clone)]
pub struct FourPegEngine {
    disk_count: Disk,
    moves: MoveLog,
    splits: SplitCache,
}

impl FourPegEngine {
    /// Creates an engine accepting the default disk range.
    pub fn new(disk_count: Disk) -> Result<Self> {
        Self::with_range(disk_count, DiskRange::default())
    }

    /// Creates an engine, rejecting `disk_count` outside `range`.
    pub fn with_range(disk_count: Disk, range: DiskRange) -> Result<Self> {
        range.validate()?;
        let disk_count = range.check(disk_count)?;
        debug!(event = "engine_created", peg_count = 4u64, disk_count = disk_count as u64);
        Ok(Self {
            disk_count,
            moves: MoveLog::new(),
            splits: SplitCache::new(),
        })
    }

    #[inline]
    pub fn disk_count(&self) -> Disk {
        self.disk_count
    }

    /// Frame-Stewart split `k = n - round(sqrt(2n + 1)) + 1`, memoized.
    pub fn optimal_split(&mut self, disk_count: Disk) -> Disk {
        self.splits.optimal_split(disk_count)
    }

    /// Frame-Stewart strategy with the closed-form split.
    pub fn solve_frame_stewart(&mut self) -> AlgorithmResult {
        self.moves.clear();
        let timer = GenerationTimer::start();
        SplitRecursion {
            policy: &mut self.splits,
            moves: &mut self.moves,
        }
        .solve(self.disk_count, SOURCE, DESTINATION, AUX1, AUX2, 0);
        self.finish(Algorithm::FrameStewart4Peg, timer)
    }

    /// Same recursion with splits from a freshly built [`SplitTable`].
    /// Table construction is included in the measured time.
    pub fn solve_recursive_optimized(&mut self) -> AlgorithmResult {
        self.moves.clear();
        let timer = GenerationTimer::start();
        let mut table = SplitTable::build(self.disk_count);
        SplitRecursion {
            policy: &mut table,
            moves: &mut self.moves,
        }
        .solve(self.disk_count, SOURCE, DESTINATION, AUX1, AUX2, 0);
        self.finish(Algorithm::Recursive4Peg, timer)
    }

    /// `min_moves[N]` from the same table
    /// [`solve_recursive_optimized`](Self::solve_recursive_optimized) uses.
    pub fn minimum_moves_estimate(&self) -> u64 {
        self.split_table().min_moves(self.disk_count)
    }

    pub fn split_table(&self) -> SplitTable {
        SplitTable::build(self.disk_count)
    }

    /// Replays `moves` on a fresh 4-peg board.
    pub fn verify(&self, moves: &[Move]) -> bool {
        self.verifier().verify(moves)
    }

    pub fn verifier(&self) -> SolutionVerifier {
        SolutionVerifier::for_pegs(self.disk_count, PegCount::Four)
    }

    fn finish(&self, algorithm: Algorithm, timer: GenerationTimer) -> AlgorithmResult {
        let elapsed = timer.elapsed();
        AlgorithmResult::new(algorithm, self.moves.snapshot(), elapsed)
    }
}

#[cfg(test)]
#[path = "four_peg_tests.rs"]
mod tests;
