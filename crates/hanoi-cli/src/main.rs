use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use hanoi::{ConfigError, Disk, HanoiConfig, HanoiError, PuzzleSession, SessionError};
use owo_colors::OwoColorize;
use thiserror::Error;

mod play;
mod report;

#[derive(Parser)]
#[command(
    name = "hanoi",
    about = "Generate and verify multi-peg Tower of Hanoi move sequences",
    version
)]
struct Cli {
    /// Configuration file (TOML or YAML)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run both algorithms for a peg count and print their results
    Solve {
        /// Number of pegs (3 or 4)
        #[arg(long, short = 'p', default_value_t = 3)]
        pegs: usize,

        /// Number of disks
        #[arg(long, short = 'd')]
        disks: Disk,

        /// Moves to print per algorithm (defaults to the configured limit)
        #[arg(long)]
        show: Option<usize>,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the minimum (3 pegs) or estimated minimum (4 pegs) move count
    Minimum {
        #[arg(long, short = 'p', default_value_t = 3)]
        pegs: usize,

        #[arg(long, short = 'd')]
        disks: Disk,
    },
    /// Play a puzzle on the terminal
    Play {
        /// Player name
        #[arg(long, short = 'n')]
        name: String,

        #[arg(long, short = 'p', default_value_t = 3)]
        pegs: usize,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Hanoi(#[from] HanoiError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<HanoiConfig, CliError> {
    let Some(path) = path else {
        return Ok(HanoiConfig::load(hanoi::CONFIG_FILE).unwrap_or_default());
    };
    let is_yaml = path
        .extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml");
    let config = if is_yaml {
        HanoiConfig::from_yaml_file(path)?
    } else {
        HanoiConfig::from_toml_file(path)?
    };
    Ok(config)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Solve {
            pegs,
            disks,
            show,
            json,
        } => {
            if !json {
                hanoi::console::init();
            }
            let results = hanoi::solve_with_config(pegs, disks, &config)?;
            let limit = show.unwrap_or_else(|| config.move_display_limit());
            let report = report::SolveReport::new(pegs, disks, &config, &results, limit)?;

            let mut stdout = io::stdout().lock();
            if json {
                serde_json::to_writer_pretty(&mut stdout, &report)?;
                writeln!(stdout)?;
            } else {
                report.write_text(&mut stdout)?;
            }
        }
        Command::Minimum { pegs, disks } => {
            let pegs = hanoi::PegCount::try_from(pegs)?;
            let minimum = hanoi::SolverEngine::new(pegs, disks, config.disks)?.minimum_moves();
            println!("{minimum}");
        }
        Command::Play { name, pegs } => {
            hanoi::console::init();
            let mut session = PuzzleSession::new(config);
            session.new_game(&name, pegs)?;
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            play::run(&mut session, stdin.lock(), &mut stdout)?;
        }
    }
    Ok(())
}

