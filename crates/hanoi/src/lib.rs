//! Hanoi - Multi-peg move-sequence solver in Rust
//!
//! One-call API: pick a peg count and a disk count, get back both
//! algorithms' move sequences.
//!
//! # Example
//!
//! ```rust
//! use hanoi::prelude::*;
//!
//! let results = hanoi::solve(4, 6).unwrap();
//! assert_eq!(results[0].algorithm(), Algorithm::FrameStewart4Peg);
//! assert_eq!(results[0].move_count(), 17);
//! ```

// Data model
pub use hanoi_core::{
    Algorithm, AlgorithmResult, Board, Disk, DiskRange, HanoiError, Move, MoveError, MoveRecord,
    PegCount, PerformanceRecord, Result, SolutionVerifier, VerifyError, MAX_DISKS,
};

// Configuration
pub use hanoi_config::{ConfigError, HanoiConfig};

// Engines and the interactive session
pub use hanoi_solver::{
    frame_stewart_split, solve_puzzle, AnswerCheck, FourPegEngine, MoveOutcome, Puzzle,
    PuzzleSession, Question, SessionError, SolverEngine, SplitTable, ThreePegEngine,
};

#[cfg(feature = "console")]
pub use hanoi_console as console;

mod solver;
pub use solver::{minimum_moves, solve, solve_with_config, CONFIG_FILE};

pub mod prelude {
    pub use super::{
        Algorithm, AlgorithmResult, DiskRange, HanoiConfig, HanoiError, Move, PegCount,
        PuzzleSession, Question,
    };
}
