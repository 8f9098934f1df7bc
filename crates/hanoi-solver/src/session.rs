//! Interactive puzzle session.
//!
//! A [`PuzzleSession`] holds at most one current [`Puzzle`]: a board the
//! player moves disks on by hand, plus the engine results for the same
//! disk and peg counts. The disk count is drawn at random from the
//! configured range when a game starts.

use std::fmt;
use std::str::FromStr;

use hanoi_config::HanoiConfig;
use hanoi_core::{AlgorithmResult, Board, Disk, HanoiError, MoveError, PegCount};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, info};

use crate::solve::{solve_all, SolverEngine};

/// Longest accepted player name, in characters.
pub const MAX_PLAYER_NAME_LEN: usize = 100;

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Invalid player name: {0}")]
    InvalidPlayerName(String),

    #[error("No active game")]
    NoActiveGame,

    #[error("Unknown question type: {0}")]
    UnknownQuestion(String),

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Hanoi(#[from] HanoiError),
}

/// One game in progress.
#[derive(Debug, Clone)]
pub struct Puzzle {
    player_name: String,
    peg_count: PegCount,
    board: Board,
    move_count: u64,
    completed: bool,
    algorithm_results: Vec<AlgorithmResult>,
}

impl Puzzle {
    fn new(player_name: String, disk_count: Disk, peg_count: PegCount) -> Self {
        Self {
            player_name,
            peg_count,
            board: Board::new(disk_count, peg_count.count()),
            move_count: 0,
            completed: false,
            algorithm_results: Vec::new(),
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn disk_count(&self) -> Disk {
        self.board.disk_count()
    }

    pub fn peg_count(&self) -> PegCount {
        self.peg_count
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Results of the last [`PuzzleSession::solve_with_algorithms`] call.
    pub fn algorithm_results(&self) -> &[AlgorithmResult] {
        &self.algorithm_results
    }
}

/// Outcome of a successful player move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub disk: Disk,
    pub from_peg: usize,
    pub to_peg: usize,
    pub move_count: u64,
    pub completed: bool,
}

/// Questions a player can answer about the current puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    MinimumMoves,
    DiskCount,
}

impl FromStr for Question {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimum_moves" => Ok(Question::MinimumMoves),
            "disk_count" => Ok(Question::DiskCount),
            other => Err(SessionError::UnknownQuestion(other.to_string())),
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Question::MinimumMoves => write!(f, "minimum_moves"),
            Question::DiskCount => write!(f, "disk_count"),
        }
    }
}

/// Result of checking a player's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerCheck {
    pub question: Question,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Holder of the current puzzle.
///
/// # Examples
///
/// ```
/// use hanoi_config::HanoiConfig;
/// use hanoi_solver::session::{PuzzleSession, Question};
///
/// let mut session = PuzzleSession::new(HanoiConfig::default().with_random_seed(7));
/// let disks = session.new_game("Ada", 3).unwrap().disk_count();
/// assert!((5..=10).contains(&disks));
///
/// session.make_move(0, 2).unwrap();
/// let check = session.check_answer(Question::DiskCount, &disks.to_string()).unwrap();
/// assert!(check.is_correct);
/// ```
#[derive(Debug)]
pub struct PuzzleSession {
    config: HanoiConfig,
    rng: StdRng,
    current: Option<Puzzle>,
}

impl PuzzleSession {
    /// Creates a session; a configured `random_seed` makes disk selection
    /// reproducible.
    pub fn new(config: HanoiConfig) -> Self {
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            rng,
            current: None,
        }
    }

    pub fn config(&self) -> &HanoiConfig {
        &self.config
    }

    pub fn current(&self) -> Option<&Puzzle> {
        self.current.as_ref()
    }

    /// Picks a disk count uniformly from the configured range.
    pub fn generate_disk_count(&mut self) -> Disk {
        let disks = self.config.disks;
        self.rng.random_range(disks.min..=disks.max)
    }

    /// Non-blank, at most [`MAX_PLAYER_NAME_LEN`] characters, and only
    /// letters, digits, whitespace, `-` and `_`.
    pub fn validate_player_name(name: &str) -> Result<(), SessionError> {
        if name.trim().is_empty() {
            return Err(SessionError::InvalidPlayerName(
                "Player name cannot be empty".to_string(),
            ));
        }
        if name.chars().count() > MAX_PLAYER_NAME_LEN {
            return Err(SessionError::InvalidPlayerName(format!(
                "Player name cannot exceed {MAX_PLAYER_NAME_LEN} characters"
            )));
        }
        let allowed = |c: char| c.is_alphanumeric() || c.is_whitespace() || c == '-' || c == '_';
        if !name.chars().all(allowed) {
            return Err(SessionError::InvalidPlayerName(
                "Player name can only contain letters, numbers, spaces, hyphens, and underscores"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Starts a new game, replacing any current one.
    pub fn new_game(&mut self, player_name: &str, peg_count: usize) -> Result<&Puzzle, SessionError> {
        Self::validate_player_name(player_name)?;
        let pegs = PegCount::try_from(peg_count)?;
        let disk_count = self.generate_disk_count();

        info!(
            event = "game_start",
            peg_count = pegs.count() as u64,
            disk_count = disk_count as u64,
        );
        let puzzle = self
            .current
            .insert(Puzzle::new(player_name.to_string(), disk_count, pegs));
        Ok(puzzle)
    }

    /// Checks a move on the current board, returning the disk it would move.
    pub fn validate_move(&self, from: usize, to: usize) -> Result<Disk, SessionError> {
        let puzzle = self.current.as_ref().ok_or(SessionError::NoActiveGame)?;
        Ok(puzzle.board.validate_top_move(from, to)?)
    }

    /// Moves the top disk of `from` onto `to`.
    pub fn make_move(&mut self, from: usize, to: usize) -> Result<MoveOutcome, SessionError> {
        let puzzle = self.current.as_mut().ok_or(SessionError::NoActiveGame)?;
        let mv = puzzle.board.move_top(from, to)?;
        puzzle.move_count += 1;

        if puzzle.board.is_solved(puzzle.peg_count.destination()) && !puzzle.completed {
            puzzle.completed = true;
            info!(event = "game_completed", move_count = puzzle.move_count);
        }
        debug!(event = "player_move", disk = mv.disk as u64, from = from as u64, to = to as u64);

        Ok(MoveOutcome {
            disk: mv.disk,
            from_peg: from,
            to_peg: to,
            move_count: puzzle.move_count,
            completed: puzzle.completed,
        })
    }

    /// Runs both engine algorithms for the current puzzle and keeps the
    /// results on it.
    pub fn solve_with_algorithms(&mut self) -> Result<Vec<AlgorithmResult>, SessionError> {
        let verify = self.config.verify_results;
        let range = self.config.disks;
        let puzzle = self.current.as_mut().ok_or(SessionError::NoActiveGame)?;

        let mut engine = SolverEngine::new(puzzle.peg_count, puzzle.disk_count(), range)?;
        let results = solve_all(&mut engine, verify)?;
        puzzle.algorithm_results = results.clone();
        Ok(results)
    }

    /// Minimum move count for the current puzzle.
    pub fn minimum_moves(&self) -> Result<u64, SessionError> {
        let puzzle = self.current.as_ref().ok_or(SessionError::NoActiveGame)?;
        let engine = SolverEngine::new(puzzle.peg_count, puzzle.disk_count(), self.config.disks)?;
        Ok(engine.minimum_moves())
    }

    /// Compares a trimmed answer with the correct one.
    pub fn check_answer(
        &self,
        question: Question,
        user_answer: &str,
    ) -> Result<AnswerCheck, SessionError> {
        let puzzle = self.current.as_ref().ok_or(SessionError::NoActiveGame)?;
        let correct_answer = match question {
            Question::MinimumMoves => self.minimum_moves()?.to_string(),
            Question::DiskCount => puzzle.disk_count().to_string(),
        };
        let is_correct = user_answer.trim() == correct_answer;

        Ok(AnswerCheck {
            question,
            user_answer: user_answer.to_string(),
            correct_answer,
            is_correct,
        })
    }

    /// Puts every disk back on peg 0 and zeroes the move count.
    pub fn reset(&mut self) {
        if let Some(puzzle) = self.current.as_mut() {
            puzzle.board.reset();
            puzzle.move_count = 0;
            puzzle.completed = false;
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
