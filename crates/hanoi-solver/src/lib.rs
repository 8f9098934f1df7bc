//! Hanoi Solver Engines
//!
//! This crate provides the move-generation engines and their callers:
//! - `ThreePegEngine`: recursive and explicit-stack iterative solutions
//! - `FourPegEngine`: Frame-Stewart and dynamic-programming split strategies
//! - Split-point selection (memoized closed form and cost table)
//! - `solve_puzzle`: run both algorithms for a peg count, verified and logged
//! - `PuzzleSession`: interactive play against the same engines
//!
//! All generation is synchronous and single-threaded.

pub mod four_peg;
pub mod session;
pub mod solve;
pub mod split;
pub mod stats;
pub mod three_peg;

pub use four_peg::FourPegEngine;
pub use session::{AnswerCheck, MoveOutcome, Puzzle, PuzzleSession, Question, SessionError};
pub use solve::{minimum_moves, solve_all, solve_puzzle, SolverEngine};
pub use split::{frame_stewart_split, SplitCache, SplitPolicy, SplitTable};
pub use stats::GenerationTimer;
pub use three_peg::{three_peg_minimum, ThreePegEngine};
