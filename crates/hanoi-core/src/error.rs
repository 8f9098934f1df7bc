//! Error types for Hanoi

use thiserror::Error;

use crate::disk::Disk;

/// Main error type for Hanoi operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HanoiError {
    /// Disk count outside the supported inclusive range
    #[error("Number of disks must be between {min} and {max}, got {disk_count}")]
    InvalidDiskCount { disk_count: Disk, min: Disk, max: Disk },

    /// Peg count other than 3 or 4
    #[error("Number of pegs must be 3 or 4, got {0}")]
    InvalidPegCount(usize),

    /// Disk range bounds that cannot describe a puzzle
    #[error("Invalid disk range {min}..={max}")]
    InvalidDiskRange { min: Disk, max: Disk },

    /// Error in configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid operation for the current state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for Hanoi operations
pub type Result<T> = std::result::Result<T, HanoiError>;
