//! Colorful console output for solver runs.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve start/end, one line per algorithm, games)
//! - **WARN**: Results that failed verification
//! - **DEBUG**: Engine creation and split choices (not rendered, left to other layers)

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing. `RUST_LOG` overrides the default
/// INFO level.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(tracing::Level::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(HanoiConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
 _   _                   _
| | | | __ _ _ __   ___ (_)
| |_| |/ _` | '_ \ / _ \| |
|  _  | (_| | | | | (_) | |
|_| |_|\__,_|_| |_|\___/|_|
"#;

    let version_line = format!("        v{} - Multi-Peg Move Solver\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct HanoiConsoleLayer;

impl<S: Subscriber> Layer<S> for HanoiConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        // Accept events from solver modules
        if !target.starts_with("hanoi_solver") && !target.starts_with("hanoi::") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    algorithm: Option<String>,
    peg_count: Option<u64>,
    disk_count: Option<u64>,
    minimum_moves: Option<u64>,
    move_count: Option<u64>,
    duration_us: Option<u64>,
    algorithm_count: Option<u64>,
    verified: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "algorithm" => self.algorithm = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "peg_count" => self.peg_count = Some(value),
            "disk_count" => self.disk_count = Some(value),
            "minimum_moves" => self.minimum_moves = Some(value),
            "move_count" => self.move_count = Some(value),
            "duration_us" => self.duration_us = Some(value),
            "algorithm_count" => self.algorithm_count = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "verified" {
            self.verified = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "algorithm" => self.algorithm = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "algorithm_end" => format_algorithm_end(v),
        "verification_failed" => format_verification_failed(v),
        "solve_end" => format_solve_end(v),
        "game_start" => format_game_start(v),
        "game_completed" => format_game_completed(v),
        _ => String::new(),
    }
}

fn format_solve_start(v: &EventVisitor) -> String {
    let pegs = v.peg_count.unwrap_or(0);
    let disks = v.disk_count.unwrap_or(0);
    let minimum = v.minimum_moves.unwrap_or(0);

    format!(
        "{} Solving │ {} pegs │ {} disks │ minimum {} moves",
        "▶".bright_green().bold(),
        pegs.bright_yellow(),
        disks.bright_yellow(),
        minimum.to_formatted_string(&Locale::en).bright_magenta()
    )
}

fn format_algorithm_end(v: &EventVisitor) -> String {
    let algorithm = v.algorithm.as_deref().unwrap_or("Unknown");
    let moves = v.move_count.unwrap_or(0);
    let duration = v.duration_us.unwrap_or(0);

    let status = match v.verified {
        Some(true) => "✓ valid".bright_green().to_string(),
        Some(false) => "✗ invalid".bright_red().bold().to_string(),
        None => "unchecked".bright_black().to_string(),
    };

    format!(
        "  {} {:<18} │ {:>8} moves │ {:>10} │ {}",
        "◀".bright_blue(),
        algorithm.white().bold(),
        moves.to_formatted_string(&Locale::en).bright_magenta().bold(),
        format_duration_us(duration).yellow(),
        status
    )
}

fn format_verification_failed(v: &EventVisitor) -> String {
    let algorithm = v.algorithm.as_deref().unwrap_or("Unknown");
    format!(
        "  {} {} produced an invalid move sequence",
        "!".bright_red().bold(),
        algorithm.bright_red()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let count = v.algorithm_count.unwrap_or(0);
    let duration = v.duration_us.unwrap_or(0);

    format!(
        "{} Solving complete │ {} algorithms │ {}",
        "■".bright_cyan().bold(),
        count.white(),
        format_duration_us(duration).yellow()
    )
}

fn format_game_start(v: &EventVisitor) -> String {
    format!(
        "{} New game │ {} pegs │ {} disks",
        "▶".bright_green().bold(),
        v.peg_count.unwrap_or(0).bright_yellow(),
        v.disk_count.unwrap_or(0).bright_yellow()
    )
}

fn format_game_completed(v: &EventVisitor) -> String {
    format!(
        "{} Puzzle solved in {} moves",
        "★".bright_yellow().bold(),
        v.move_count
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_green()
    )
}

fn format_duration_us(us: u64) -> String {
    if us < 1000 {
        format!("{}µs", us)
    } else if us < 1_000_000 {
        format!("{:.2}ms", us as f64 / 1000.0)
    } else {
        format!("{:.2}s", us as f64 / 1_000_000.0)
    }
}
