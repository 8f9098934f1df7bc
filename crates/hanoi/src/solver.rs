//! Solver entry points that hide engine selection and configuration.

use hanoi_config::HanoiConfig;
use hanoi_core::{AlgorithmResult, Disk, PegCount, Result};

/// Configuration file read by [`solve`] from the working directory.
pub const CONFIG_FILE: &str = "hanoi.toml";

/// Runs both algorithms for `peg_count` pegs and `disk_count` disks.
///
/// Settings come from [`CONFIG_FILE`] when it exists and parses, and from
/// [`HanoiConfig::default`] otherwise.
///
/// # Errors
///
/// Returns an error when `peg_count` is not 3 or 4, or when `disk_count`
/// is outside the configured range.
pub fn solve(peg_count: usize, disk_count: Disk) -> Result<Vec<AlgorithmResult>> {
    #[cfg(feature = "console")]
    hanoi_console::init();

    let config = HanoiConfig::load(CONFIG_FILE).unwrap_or_default();
    solve_with_config(peg_count, disk_count, &config)
}

/// Runs both algorithms with an explicit configuration.
///
/// Unlike [`solve`], never installs the console subscriber.
pub fn solve_with_config(
    peg_count: usize,
    disk_count: Disk,
    config: &HanoiConfig,
) -> Result<Vec<AlgorithmResult>> {
    let pegs = PegCount::try_from(peg_count)?;
    hanoi_solver::solve_puzzle(pegs, disk_count, config)
}

/// Minimum move count for 3 pegs, dynamic-programming estimate for 4.
pub fn minimum_moves(peg_count: usize, disk_count: Disk) -> Result<u64> {
    let config = HanoiConfig::load(CONFIG_FILE).unwrap_or_default();
    let pegs = PegCount::try_from(peg_count)?;
    hanoi_solver::minimum_moves(pegs, disk_count, config.disks)
}
