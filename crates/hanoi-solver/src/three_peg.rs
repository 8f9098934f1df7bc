//! Three-peg engine.
//!
//! Two strategies produce the same `2^N - 1` move sequence from peg 0 to
//! peg 2 with peg 1 as the spare:
//! - **Recursive**: classic divide-and-conquer on the call stack
//! - **Iterative**: the same traversal driven by an explicit work stack,
//!   so memory is bounded by `2N` frames and no recursion is used

use hanoi_core::{
    Algorithm, AlgorithmResult, Disk, DiskRange, Move, MoveLog, PegCount, Result,
    SolutionVerifier,
};
use tracing::debug;

use crate::stats::GenerationTimer;

const SOURCE: usize = 0;
const AUX: usize = 1;
const DESTINATION: usize = 2;

/// Moves needed to transfer `disk_count` disks across 3 pegs: `2^n - 1`.
///
/// Saturates at `u64::MAX` for counts too large to represent.
#[inline]
pub fn three_peg_minimum(disk_count: Disk) -> u64 {
    if disk_count >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << disk_count) - 1
    }
}

/// Records the recursive 3-peg solution for disks
/// `disk_offset + 1 ..= disk_offset + n` onto `log`.
///
/// Used directly by the 4-peg strategies, where one peg is blocked by a
/// tower of smaller disks and the live problem has only 3 pegs.
pub(crate) fn move_tower(
    log: &mut MoveLog,
    n: Disk,
    source: usize,
    aux: usize,
    destination: usize,
    disk_offset: Disk,
) {
    if n == 0 {
        return;
    }
    if n == 1 {
        log.record(disk_offset + 1, source, destination);
        return;
    }

    move_tower(log, n - 1, source, destination, aux, disk_offset);
    log.record(disk_offset + n, source, destination);
    move_tower(log, n - 1, aux, source, destination, disk_offset);
}

/// Whether a work-stack frame is being entered or resumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// First visit: schedule the resume, then the first sub-tower.
    Enter,
    /// First sub-tower done: move the largest disk, then the second sub-tower.
    Resume,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    disk_count: Disk,
    source: usize,
    aux: usize,
    destination: usize,
    phase: Phase,
}

impl Frame {
    fn enter(disk_count: Disk, source: usize, aux: usize, destination: usize) -> Self {
        Self {
            disk_count,
            source,
            aux,
            destination,
            phase: Phase::Enter,
        }
    }
}

/// Records the same sequence as [`move_tower`] (with offset 0) using an
/// explicit LIFO stack.
fn move_tower_iterative(log: &mut MoveLog, n: Disk, source: usize, aux: usize, destination: usize) {
    if n == 0 {
        return;
    }

    let mut stack: Vec<Frame> = Vec::with_capacity(2 * n as usize);
    stack.push(Frame::enter(n, source, aux, destination));

    while let Some(frame) = stack.pop() {
        if frame.disk_count == 1 {
            log.record(1, frame.source, frame.destination);
            continue;
        }

        match frame.phase {
            Phase::Enter => {
                // The resume frame must pop after the whole first sub-tower.
                stack.push(Frame {
                    phase: Phase::Resume,
                    ..frame
                });
                stack.push(Frame::enter(
                    frame.disk_count - 1,
                    frame.source,
                    frame.destination,
                    frame.aux,
                ));
            }
            Phase::Resume => {
                log.record(frame.disk_count, frame.source, frame.destination);
                stack.push(Frame::enter(
                    frame.disk_count - 1,
                    frame.aux,
                    frame.source,
                    frame.destination,
                ));
            }
        }
    }
}

/// Solver for the 3-peg puzzle.
///
/// The disk count is validated once at construction; solve methods never
/// re-check it. Each solve clears and rebuilds the engine's single move
/// buffer, so repeated calls give identical output. Solving takes
/// `&mut self`: sharing one engine between threads needs external
/// synchronization, or one engine per thread.
///
/// # Examples
///
/// ```
/// use hanoi_core::Move;
/// use hanoi_solver::ThreePegEngine;
///
/// let mut engine = ThreePegEngine::new(5).unwrap();
/// let result = engine.solve_recursive();
///
/// assert_eq!(result.move_count(), 31);
/// assert_eq!(result.moves()[0], Move::new(1, 0, 2));
/// assert!(engine.verify(result.moves()));
/// ```
#[derive(Debug, Clone)]
pub struct ThreePegEngine {
    disk_count: Disk,
    moves: MoveLog,
}

impl ThreePegEngine {
    /// Creates an engine accepting the default disk range.
    pub fn new(disk_count: Disk) -> Result<Self> {
        Self::with_range(disk_count, DiskRange::default())
    }

    /// Creates an engine, rejecting `disk_count` outside `range`.
    pub fn with_range(disk_count: Disk, range: DiskRange) -> Result<Self> {
        range.validate()?;
        let disk_count = range.check(disk_count)?;
        debug!(event = "engine_created", peg_count = 3u64, disk_count = disk_count as u64);
        Ok(Self {
            disk_count,
            moves: MoveLog::with_capacity(three_peg_minimum(disk_count) as usize),
        })
    }

    #[inline]
    pub fn disk_count(&self) -> Disk {
        self.disk_count
    }

    /// Classic divide-and-conquer solution, exactly `2^N - 1` moves.
    pub fn solve_recursive(&mut self) -> AlgorithmResult {
        self.moves.clear();
        let timer = GenerationTimer::start();
        move_tower(&mut self.moves, self.disk_count, SOURCE, AUX, DESTINATION, 0);
        self.finish(Algorithm::Recursive3Peg, timer)
    }

    /// Work-stack traversal yielding the same sequence as
    /// [`solve_recursive`](Self::solve_recursive).
    pub fn solve_iterative(&mut self) -> AlgorithmResult {
        self.moves.clear();
        let timer = GenerationTimer::start();
        move_tower_iterative(&mut self.moves, self.disk_count, SOURCE, AUX, DESTINATION);
        self.finish(Algorithm::Iterative3Peg, timer)
    }

    /// `2^N - 1`, in closed form.
    pub fn minimum_moves(&self) -> u64 {
        three_peg_minimum(self.disk_count)
    }

    /// Replays `moves` on a fresh 3-peg board.
    pub fn verify(&self, moves: &[Move]) -> bool {
        self.verifier().verify(moves)
    }

    pub fn verifier(&self) -> SolutionVerifier {
        SolutionVerifier::for_pegs(self.disk_count, PegCount::Three)
    }

    fn finish(&self, algorithm: Algorithm, timer: GenerationTimer) -> AlgorithmResult {
        let elapsed = timer.elapsed();
        AlgorithmResult::new(algorithm, self.moves.snapshot(), elapsed)
    }
}
