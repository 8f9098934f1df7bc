//! Solve output, as text or JSON.

use std::io::{self, Write};

use hanoi::{
    AlgorithmResult, Disk, HanoiConfig, HanoiError, MoveRecord, PegCount, PerformanceRecord,
    SolutionVerifier, SolverEngine,
};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub peg_count: usize,
    pub disk_count: Disk,
    pub minimum_moves: u64,
    pub results: Vec<AlgorithmReport>,
}

#[derive(Debug, Serialize)]
pub struct AlgorithmReport {
    #[serde(flatten)]
    pub performance: PerformanceRecord,
    pub verified: bool,
    /// First moves only; `performance.move_count` has the full length.
    pub moves: Vec<MoveRecord>,
}

impl SolveReport {
    pub fn new(
        peg_count: usize,
        disk_count: Disk,
        config: &HanoiConfig,
        results: &[AlgorithmResult],
        move_limit: usize,
    ) -> Result<Self, HanoiError> {
        let pegs = PegCount::try_from(peg_count)?;
        let minimum_moves = SolverEngine::new(pegs, disk_count, config.disks)?.minimum_moves();
        let verifier = SolutionVerifier::for_pegs(disk_count, pegs);

        let results = results
            .iter()
            .map(|result| AlgorithmReport {
                performance: result.performance_record(),
                verified: verifier.verify(result.moves()),
                moves: result.move_history(move_limit),
            })
            .collect();

        Ok(Self {
            peg_count,
            disk_count,
            minimum_moves,
            results,
        })
    }

    pub fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "\n{} pegs, {} disks, minimum {} moves",
            self.peg_count.bright_yellow(),
            self.disk_count.bright_yellow(),
            self.minimum_moves.bright_magenta()
        )?;

        for report in &self.results {
            let perf = &report.performance;
            writeln!(
                out,
                "\n{} ({} moves, {:.3} ms, {})",
                perf.algorithm_name.white().bold(),
                perf.move_count,
                perf.time_taken_ms,
                if report.verified { "valid" } else { "INVALID" }
            )?;
            for record in &report.moves {
                writeln!(
                    out,
                    "  {:>4}. disk {} : {} -> {}",
                    record.move_number, record.disk, record.from_peg, record.to_peg
                )?;
            }
            let hidden = perf.move_count.saturating_sub(report.moves.len());
            if hidden > 0 {
                writeln!(out, "  ... {} more", hidden)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(pegs: usize, disks: Disk, limit: usize) -> SolveReport {
        let config = HanoiConfig::default();
        let results = hanoi::solve_with_config(pegs, disks, &config).unwrap();
        SolveReport::new(pegs, disks, &config, &results, limit).unwrap()
    }

    #[test]
    fn test_report_truncates_moves() {
        let report = report(3, 6, 10);
        assert_eq!(report.minimum_moves, 63);
        assert_eq!(report.results.len(), 2);
        for result in &report.results {
            assert!(result.verified);
            assert_eq!(result.performance.move_count, 63);
            assert_eq!(result.moves.len(), 10);
            assert_eq!(result.moves[0].move_number, 1);
        }
    }

    #[test]
    fn test_report_json_shape() {
        let report = report(4, 5, 3);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["peg_count"], 4);
        assert_eq!(json["minimum_moves"], 13);
        assert_eq!(json["results"][0]["algorithm_name"], "FrameStewart_4Peg");
        assert_eq!(json["results"][1]["algorithm_name"], "Recursive_4Peg");
        assert_eq!(json["results"][0]["moves"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_text_mentions_hidden_moves() {
        let mut out = Vec::new();
        report(3, 5, 2).write_text(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("... 29 more"));
        assert!(text.contains("Iterative_3Peg"));
    }

    #[test]
    fn test_algorithm_serializes_as_its_name() {
        for pegs in [PegCount::Three, PegCount::Four] {
            for algorithm in hanoi::Algorithm::for_pegs(pegs) {
                let json = serde_json::to_value(algorithm).unwrap();
                assert_eq!(json, algorithm.name());
                let back: hanoi::Algorithm = serde_json::from_value(json).unwrap();
                assert_eq!(back, algorithm);
            }
        }
    }
}
