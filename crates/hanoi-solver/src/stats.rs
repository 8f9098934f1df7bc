//! Generation timing.
//!
//! Only the generation call is timed, on the monotonic clock. The value is
//! informational and may be zero on fast hardware.

use std::time::{Duration, Instant};

/// Wall-clock timer around one generation call.
///
/// # Example
///
/// ```
/// use hanoi_solver::stats::GenerationTimer;
///
/// let timer = GenerationTimer::start();
/// let moves = 31u64;
/// let elapsed = timer.elapsed();
///
/// assert!(elapsed <= timer.elapsed());
/// assert!(GenerationTimer::moves_per_second(moves, elapsed) >= 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GenerationTimer {
    start_time: Instant,
}

impl GenerationTimer {
    /// Starts timing now.
    pub fn start() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Returns the elapsed time since the timer started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the move generation rate, or 0 when no time was measured.
    pub fn moves_per_second(moves: u64, elapsed: Duration) -> f64 {
        let secs = elapsed.as_secs_f64();
        if secs > 0.0 {
            moves as f64 / secs
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_is_monotonic() {
        let timer = GenerationTimer::start();
        let first = timer.elapsed();
        let second = timer.elapsed();
        assert!(second >= first);
    }

    #[test]
    fn test_moves_per_second_zero_duration() {
        assert_eq!(GenerationTimer::moves_per_second(100, Duration::ZERO), 0.0);
    }

    #[test]
    fn test_moves_per_second() {
        let rate = GenerationTimer::moves_per_second(500, Duration::from_millis(250));
        assert!((rate - 2000.0).abs() < 1e-9);
    }
}
