//! Disks, peg counts and the supported disk range.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{HanoiError, Result};

/// A disk identifier in `1..=N`. Larger numbers are physically larger disks.
pub type Disk = u32;

/// Smallest disk count accepted by default.
pub const DEFAULT_MIN_DISKS: Disk = 5;

/// Largest disk count accepted by default.
pub const DEFAULT_MAX_DISKS: Disk = 10;

/// Hard ceiling for any configured range.
///
/// A 3-peg solution for `MAX_DISKS` disks is about a million moves.
pub const MAX_DISKS: Disk = 20;

/// Inclusive range of disk counts an engine accepts at construction.
///
/// # Examples
///
/// ```
/// use hanoi_core::DiskRange;
///
/// let range = DiskRange::default();
/// assert!(range.contains(5));
/// assert!(range.contains(10));
/// assert!(!range.contains(11));
/// assert!(range.check(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiskRange {
    pub min: Disk,
    pub max: Disk,
}

impl DiskRange {
    /// Creates a validated range.
    pub fn new(min: Disk, max: Disk) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Rejects empty ranges, zero disks and anything above [`MAX_DISKS`].
    pub fn validate(&self) -> Result<()> {
        if self.min == 0 || self.min > self.max || self.max > MAX_DISKS {
            return Err(HanoiError::InvalidDiskRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, disk_count: Disk) -> bool {
        (self.min..=self.max).contains(&disk_count)
    }

    /// Returns `disk_count` unchanged when it lies in the range.
    pub fn check(&self, disk_count: Disk) -> Result<Disk> {
        if self.contains(disk_count) {
            Ok(disk_count)
        } else {
            Err(HanoiError::InvalidDiskCount {
                disk_count,
                min: self.min,
                max: self.max,
            })
        }
    }

    pub fn iter(&self) -> RangeInclusive<Disk> {
        self.min..=self.max
    }
}

impl Default for DiskRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_DISKS,
            max: DEFAULT_MAX_DISKS,
        }
    }
}

impl fmt::Display for DiskRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Number of pegs on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "usize", into = "usize"))]
pub enum PegCount {
    Three,
    Four,
}

impl PegCount {
    #[inline]
    pub const fn count(self) -> usize {
        match self {
            PegCount::Three => 3,
            PegCount::Four => 4,
        }
    }

    /// The peg every solution must end on: the last one.
    #[inline]
    pub const fn destination(self) -> usize {
        self.count() - 1
    }
}

impl TryFrom<usize> for PegCount {
    type Error = HanoiError;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            3 => Ok(PegCount::Three),
            4 => Ok(PegCount::Four),
            other => Err(HanoiError::InvalidPegCount(other)),
        }
    }
}

impl From<PegCount> for usize {
    fn from(pegs: PegCount) -> usize {
        pegs.count()
    }
}

impl fmt::Display for PegCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}
