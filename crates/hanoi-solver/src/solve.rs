//! Engine selection and the run-all-algorithms entry point.
//!
//! Logging levels:
//! - **INFO**: Solve start/end, one summary per algorithm
//! - **WARN**: A generated result failed verification
//! - **DEBUG**: Engine creation and split choices

use hanoi_config::HanoiConfig;
use hanoi_core::{
    Algorithm, AlgorithmResult, Disk, DiskRange, HanoiError, Move, PegCount, Result,
    SolutionVerifier,
};
use tracing::{info, warn};

use crate::four_peg::FourPegEngine;
use crate::stats::GenerationTimer;
use crate::three_peg::ThreePegEngine;

/// The engine matching a peg count.
#[derive(Debug, Clone)]
pub enum SolverEngine {
    Three(ThreePegEngine),
    Four(FourPegEngine),
}

impl SolverEngine {
    /// Builds the engine for `pegs`, validating `disk_count` against `range`.
    pub fn new(pegs: PegCount, disk_count: Disk, range: DiskRange) -> Result<Self> {
        Ok(match pegs {
            PegCount::Three => SolverEngine::Three(ThreePegEngine::with_range(disk_count, range)?),
            PegCount::Four => SolverEngine::Four(FourPegEngine::with_range(disk_count, range)?),
        })
    }

    pub fn peg_count(&self) -> PegCount {
        match self {
            SolverEngine::Three(_) => PegCount::Three,
            SolverEngine::Four(_) => PegCount::Four,
        }
    }

    pub fn disk_count(&self) -> Disk {
        match self {
            SolverEngine::Three(engine) => engine.disk_count(),
            SolverEngine::Four(engine) => engine.disk_count(),
        }
    }

    /// The two algorithms this engine implements, in run order.
    pub fn algorithms(&self) -> [Algorithm; 2] {
        Algorithm::for_pegs(self.peg_count())
    }

    /// Runs `algorithm`.
    ///
    /// # Errors
    ///
    /// Returns [`HanoiError::InvalidState`] when `algorithm` needs a
    /// different peg count than this engine.
    pub fn solve(&mut self, algorithm: Algorithm) -> Result<AlgorithmResult> {
        match (self, algorithm) {
            (SolverEngine::Three(engine), Algorithm::Recursive3Peg) => Ok(engine.solve_recursive()),
            (SolverEngine::Three(engine), Algorithm::Iterative3Peg) => Ok(engine.solve_iterative()),
            (SolverEngine::Four(engine), Algorithm::FrameStewart4Peg) => {
                Ok(engine.solve_frame_stewart())
            }
            (SolverEngine::Four(engine), Algorithm::Recursive4Peg) => {
                Ok(engine.solve_recursive_optimized())
            }
            (engine, algorithm) => Err(HanoiError::InvalidState(format!(
                "{} needs {} pegs, engine has {}",
                algorithm,
                algorithm.peg_count(),
                engine.peg_count()
            ))),
        }
    }

    /// `2^N - 1` for 3 pegs, the dynamic-programming estimate for 4.
    pub fn minimum_moves(&self) -> u64 {
        match self {
            SolverEngine::Three(engine) => engine.minimum_moves(),
            SolverEngine::Four(engine) => engine.minimum_moves_estimate(),
        }
    }

    pub fn verifier(&self) -> SolutionVerifier {
        match self {
            SolverEngine::Three(engine) => engine.verifier(),
            SolverEngine::Four(engine) => engine.verifier(),
        }
    }

    pub fn verify(&self, moves: &[Move]) -> bool {
        self.verifier().verify(moves)
    }
}

/// Runs both algorithms for `pegs` and returns their results in run order.
///
/// When `config.verify_results` is set, each result is replayed and a
/// failure is logged at WARN; results are returned either way.
///
/// # Examples
///
/// ```
/// use hanoi_config::HanoiConfig;
/// use hanoi_core::PegCount;
/// use hanoi_solver::solve_puzzle;
///
/// let results = solve_puzzle(PegCount::Three, 5, &HanoiConfig::default()).unwrap();
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].moves(), results[1].moves());
/// ```
pub fn solve_puzzle(
    pegs: PegCount,
    disk_count: Disk,
    config: &HanoiConfig,
) -> Result<Vec<AlgorithmResult>> {
    let mut engine = SolverEngine::new(pegs, disk_count, config.disks)?;
    solve_all(&mut engine, config.verify_results)
}

/// Runs both algorithms of an existing engine.
pub fn solve_all(engine: &mut SolverEngine, verify: bool) -> Result<Vec<AlgorithmResult>> {
    let timer = GenerationTimer::start();
    info!(
        event = "solve_start",
        peg_count = engine.peg_count().count() as u64,
        disk_count = engine.disk_count() as u64,
        minimum_moves = engine.minimum_moves(),
    );

    let mut results = Vec::with_capacity(2);
    for algorithm in engine.algorithms() {
        let result = engine.solve(algorithm)?;
        let verified = !verify || engine.verify(result.moves());
        if !verified {
            warn!(
                event = "verification_failed",
                algorithm = algorithm.name(),
                move_count = result.move_count() as u64,
            );
        }
        info!(
            event = "algorithm_end",
            algorithm = algorithm.name(),
            move_count = result.move_count() as u64,
            duration_us = result.time_taken().as_micros() as u64,
            verified = verified,
        );
        results.push(result);
    }

    info!(
        event = "solve_end",
        algorithm_count = results.len() as u64,
        duration_us = timer.elapsed().as_micros() as u64,
    );
    Ok(results)
}

/// Minimum (3 pegs) or estimated minimum (4 pegs) move count.
pub fn minimum_moves(pegs: PegCount, disk_count: Disk, range: DiskRange) -> Result<u64> {
    Ok(SolverEngine::new(pegs, disk_count, range)?.minimum_moves())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_for_peg_count() {
        let engine = SolverEngine::new(PegCount::Four, 6, DiskRange::default()).unwrap();
        assert_eq!(engine.peg_count(), PegCount::Four);
        assert_eq!(engine.disk_count(), 6);
        assert_eq!(
            engine.algorithms(),
            [Algorithm::FrameStewart4Peg, Algorithm::Recursive4Peg]
        );
    }

    #[test]
    fn test_engine_rejects_mismatched_algorithm() {
        let mut engine = SolverEngine::new(PegCount::Three, 5, DiskRange::default()).unwrap();
        let err = engine.solve(Algorithm::FrameStewart4Peg).unwrap_err();
        assert!(matches!(err, HanoiError::InvalidState(_)));
    }

    #[test]
    fn test_solve_puzzle_three_pegs() {
        let results = solve_puzzle(PegCount::Three, 6, &HanoiConfig::default()).unwrap();
        let names: Vec<_> = results.iter().map(|r| r.algorithm_name()).collect();
        assert_eq!(names, ["Recursive_3Peg", "Iterative_3Peg"]);
        assert!(results.iter().all(|r| r.move_count() == 63));
    }

    #[test]
    fn test_solve_puzzle_four_pegs() {
        let results = solve_puzzle(PegCount::Four, 7, &HanoiConfig::default()).unwrap();
        let names: Vec<_> = results.iter().map(|r| r.algorithm_name()).collect();
        assert_eq!(names, ["FrameStewart_4Peg", "Recursive_4Peg"]);
        assert!(results.iter().all(|r| r.move_count() == 25));
    }

    #[test]
    fn test_solve_puzzle_validates_disk_count() {
        let err = solve_puzzle(PegCount::Four, 12, &HanoiConfig::default()).unwrap_err();
        assert!(matches!(err, HanoiError::InvalidDiskCount { disk_count: 12, .. }));
    }

    #[test]
    fn test_solve_puzzle_uses_configured_range() {
        let config = HanoiConfig::default().with_disk_range(DiskRange::new(2, 3).unwrap());
        let results = solve_puzzle(PegCount::Three, 3, &config).unwrap();
        assert_eq!(results[0].move_count(), 7);
        assert!(solve_puzzle(PegCount::Three, 5, &config).is_err());
    }

    #[test]
    fn test_minimum_moves() {
        let range = DiskRange::default();
        assert_eq!(minimum_moves(PegCount::Three, 5, range).unwrap(), 31);
        assert_eq!(minimum_moves(PegCount::Four, 5, range).unwrap(), 13);
        assert_eq!(minimum_moves(PegCount::Four, 10, range).unwrap(), 49);
    }
}
