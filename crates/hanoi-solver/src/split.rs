//! Split-point selection for the 4-peg strategies.
//!
//! Both 4-peg strategies move the top `k` disks aside with all four pegs,
//! move the remaining `n - k` with three, then bring the `k` back. They
//! differ only in how `k` is chosen:
//! - [`SplitCache`]: closed form `k = n - round(sqrt(2n + 1)) + 1`, memoized
//! - [`SplitTable`]: exhaustive search over a dynamic-programming cost table
//!
//! The Frame-Stewart split is conjectured optimal for 4 pegs, not proven.

use std::collections::HashMap;

use hanoi_core::Disk;
use tracing::debug;

use crate::three_peg::three_peg_minimum;

/// Source of the split point `k` for a sub-problem of `disk_count` disks.
pub trait SplitPolicy {
    /// Number of disks in the top group. Only called with `disk_count >= 2`,
    /// and must return a value in `1..disk_count`.
    fn split(&mut self, disk_count: Disk) -> Disk;

    /// Spare pegs, in order, for moving the top group aside when the
    /// sub-problem's own spares are `aux2` and `destination`.
    fn aside_spares(&self, aux2: usize, destination: usize) -> (usize, usize) {
        (aux2, destination)
    }
}

/// Closed-form Frame-Stewart split: `n - round(sqrt(2n + 1)) + 1`, clamped
/// to `[1, n - 1]`. Returns 0 for `n <= 1`.
pub fn frame_stewart_split(disk_count: Disk) -> Disk {
    if disk_count <= 1 {
        return 0;
    }
    let root = (f64::from(2 * disk_count + 1)).sqrt().round() as Disk;
    (disk_count + 1).saturating_sub(root).clamp(1, disk_count - 1)
}

/// Memoized closed-form split points.
///
/// A key, once computed, is never recomputed or changed. Values for
/// `n <= 1` are not stored.
///
/// # Examples
///
/// ```
/// use hanoi_solver::SplitCache;
///
/// let mut cache = SplitCache::new();
/// assert_eq!(cache.optimal_split(10), 6);
/// assert_eq!(cache.optimal_split(10), 6);
/// assert_eq!(cache.optimal_split(1), 0);
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SplitCache {
    cache: HashMap<Disk, Disk>,
}

impl SplitCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the memoized split for `disk_count`, computing it on first use.
    pub fn optimal_split(&mut self, disk_count: Disk) -> Disk {
        if disk_count <= 1 {
            return 0;
        }
        *self.cache.entry(disk_count).or_insert_with(|| {
            let split = frame_stewart_split(disk_count);
            debug!(event = "split_chosen", disk_count = disk_count as u64, split = split as u64);
            split
        })
    }

    /// Returns a previously computed split without computing it.
    pub fn get(&self, disk_count: Disk) -> Option<Disk> {
        self.cache.get(&disk_count).copied()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl SplitPolicy for SplitCache {
    fn split(&mut self, disk_count: Disk) -> Disk {
        self.optimal_split(disk_count)
    }
}

/// Dynamic-programming table of minimum 4-peg move counts and the split
/// achieving each.
///
/// `min_moves[1] = 1`; for `n >= 2`,
/// `min_moves[n] = min over k in 1..n of 2 * min_moves[k] + 2^(n-k) - 1`.
/// Ties go to the smallest `k`. Another tie-break keeps the counts but
/// changes the exact move sequence.
///
/// # Examples
///
/// ```
/// use hanoi_solver::SplitTable;
///
/// let table = SplitTable::build(5);
/// assert_eq!(table.min_moves(5), 13);
/// assert_eq!(table.best_split(5), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTable {
    min_moves: Vec<u64>,
    best_split: Vec<Disk>,
}

impl SplitTable {
    /// Fills the table for every count up to `disk_count`.
    pub fn build(disk_count: Disk) -> Self {
        let len = disk_count as usize + 1;
        let mut min_moves = vec![0u64; len.max(2)];
        let mut best_split: Vec<Disk> = vec![0; len.max(2)];
        min_moves[1] = 1;

        for n in 2..=disk_count {
            let mut best_cost = u64::MAX;
            let mut best_k = 1;
            for k in 1..n {
                let cost = min_moves[k as usize]
                    .saturating_mul(2)
                    .saturating_add(three_peg_minimum(n - k));
                if cost < best_cost {
                    best_cost = cost;
                    best_k = k;
                }
            }
            min_moves[n as usize] = best_cost;
            best_split[n as usize] = best_k;
            debug!(event = "split_chosen", disk_count = n as u64, split = best_k as u64);
        }

        min_moves.truncate(len);
        best_split.truncate(len);
        Self {
            min_moves,
            best_split,
        }
    }

    /// Largest disk count the table covers.
    pub fn disk_count(&self) -> Disk {
        (self.min_moves.len() - 1) as Disk
    }

    /// Minimum 4-peg moves for `disk_count` disks.
    ///
    /// # Panics
    ///
    /// Panics if `disk_count` exceeds the table.
    pub fn min_moves(&self, disk_count: Disk) -> u64 {
        self.min_moves[disk_count as usize]
    }

    /// Minimizing split for `disk_count` disks; 0 for `disk_count <= 1`.
    ///
    /// # Panics
    ///
    /// Panics if `disk_count` exceeds the table.
    pub fn best_split(&self, disk_count: Disk) -> Disk {
        self.best_split[disk_count as usize]
    }
}

impl SplitPolicy for SplitTable {
    fn split(&mut self, disk_count: Disk) -> Disk {
        self.best_split(disk_count)
    }

    /// The destination is the first spare while the top group moves aside.
    fn aside_spares(&self, aux2: usize, destination: usize) -> (usize, usize) {
        (destination, aux2)
    }
}
