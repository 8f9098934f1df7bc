//! Hanoi Core - Data model for multi-peg disk-transfer puzzles
//!
//! This crate provides the types shared by the solver engines and their
//! callers:
//! - Disks, peg counts and the supported disk range
//! - Moves and the append-only move log engines write into
//! - Algorithm results and the records collaborators persist
//! - A replay board and the solution verifier built on it

pub mod board;
pub mod disk;
pub mod error;
pub mod moves;
pub mod result;
pub mod verify;

pub use board::{Board, MoveError};
pub use disk::{Disk, DiskRange, PegCount, DEFAULT_MAX_DISKS, DEFAULT_MIN_DISKS, MAX_DISKS};
pub use error::{HanoiError, Result};
pub use moves::{Move, MoveLog};
pub use result::{Algorithm, AlgorithmResult, MoveRecord, PerformanceRecord};
pub use verify::{SolutionVerifier, VerifyError};
