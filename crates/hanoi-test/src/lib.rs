//! Shared test fixtures for Hanoi crates.
//!
//! This crate provides data and pure functions for testing. It depends only
//! on `hanoi-core` so every other crate can use it as a dev-dependency.
//!
//! - [`reference`] - A plain `Vec`-based replay, independent of `Board`
//! - [`sequences`] - Known solutions for small towers
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! hanoi-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use hanoi_test::{assert_solves, supported_disk_counts};
//! ```

pub mod reference;
pub mod sequences;

use std::ops::RangeInclusive;

use hanoi_core::{Disk, Move};

pub use reference::{assert_solves, replay};

/// Disk counts the engines accept by default.
pub fn supported_disk_counts() -> RangeInclusive<Disk> {
    hanoi_core::DEFAULT_MIN_DISKS..=hanoi_core::DEFAULT_MAX_DISKS
}

/// Builds moves from `(disk, from, to)` triples.
pub fn moves_from(triples: &[(Disk, usize, usize)]) -> Vec<Move> {
    triples.iter().copied().map(Move::from).collect()
}
