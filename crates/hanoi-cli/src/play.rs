//! Line-driven game loop.

use std::io::{self, BufRead, Write};

use hanoi::{Board, PuzzleSession, Question, SessionError};
use owo_colors::OwoColorize;

const HELP: &str = "commands: move FROM TO | answer minimum_moves|disk_count VALUE | board | solve | reset | help | quit";

enum Action {
    Continue,
    Quit,
}

/// Reads commands from `input` until `quit` or end of input.
pub fn run(session: &mut PuzzleSession, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    if let Some(puzzle) = session.current() {
        writeln!(
            out,
            "{}, move {} disks from peg 0 to peg {}.",
            puzzle.player_name().bright_cyan(),
            puzzle.disk_count(),
            puzzle.peg_count().destination()
        )?;
        writeln!(out, "{HELP}")?;
        write_board(out, puzzle.board())?;
    }

    for line in input.lines() {
        let line = line?;
        match handle(session, line.trim(), out) {
            Ok(Action::Continue) => {}
            Ok(Action::Quit) => break,
            Err(err) => writeln!(out, "{} {}", "rejected:".bright_red(), err)?,
        }
    }
    Ok(())
}

fn handle(
    session: &mut PuzzleSession,
    line: &str,
    out: &mut impl Write,
) -> Result<Action, CommandError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] => {}
        ["quit"] | ["exit"] => return Ok(Action::Quit),
        ["help"] => writeln!(out, "{HELP}")?,
        ["move", from, to] => {
            let outcome = session.make_move(parse_peg(from)?, parse_peg(to)?)?;
            writeln!(
                out,
                "#{}: disk {} {} -> {}",
                outcome.move_count, outcome.disk, outcome.from_peg, outcome.to_peg
            )?;
            if let Some(puzzle) = session.current() {
                write_board(out, puzzle.board())?;
            }
            if outcome.completed {
                writeln!(
                    out,
                    "{} solved in {} moves (minimum {})",
                    "Done!".bright_green().bold(),
                    outcome.move_count,
                    session.minimum_moves()?
                )?;
            }
        }
        ["answer", question, answer] => {
            let question: Question = question.parse()?;
            let check = session.check_answer(question, answer)?;
            if check.is_correct {
                writeln!(out, "{}", "correct".bright_green())?;
            } else {
                writeln!(
                    out,
                    "{}, the answer is {}",
                    "wrong".bright_red(),
                    check.correct_answer
                )?;
            }
        }
        ["board"] => {
            if let Some(puzzle) = session.current() {
                write_board(out, puzzle.board())?;
            }
        }
        ["solve"] => {
            for result in session.solve_with_algorithms()? {
                let perf = result.performance_record();
                writeln!(
                    out,
                    "{}: {} moves in {:.3} ms",
                    perf.algorithm_name, perf.move_count, perf.time_taken_ms
                )?;
            }
        }
        ["reset"] => {
            session.reset();
            if let Some(puzzle) = session.current() {
                write_board(out, puzzle.board())?;
            }
        }
        _ => return Err(CommandError::Unknown(line.to_string())),
    }
    Ok(Action::Continue)
}

fn parse_peg(word: &str) -> Result<usize, CommandError> {
    word.parse()
        .map_err(|_| CommandError::Unknown(format!("not a peg number: {word}")))
}

fn write_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    for peg in 0..board.peg_count() {
        let disks: Vec<String> = board.peg(peg).iter().map(|d| d.to_string()).collect();
        writeln!(out, "  {} | {}", peg, disks.join(" "))?;
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
enum CommandError {
    #[error("unrecognized command: {0}")]
    Unknown(String),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Io(#[from] io::Error),
}
