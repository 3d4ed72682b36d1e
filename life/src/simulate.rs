//! Simulation driver for `life run`.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use crate::core::{Board, StepStats, step_with_stats};
use crate::io::config::LifeConfig;
use crate::io::life106::{parse_board, write_board};
use crate::io::write_atomic;

/// Summary of a completed simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    pub generations: u32,
    pub initial_cells: usize,
    pub final_cells: usize,
    /// Stats summed over every generation actually stepped.
    pub totals: StepStats,
    /// First generation at which the board was empty, if it died out.
    pub extinct_at: Option<u32>,
}

/// Run `generations` steps from `board`.
///
/// Stepping stops early once the board is empty, since the empty board is a
/// fixed point.
pub fn simulate(board: Board, generations: u32) -> (Board, SimulationReport) {
    let mut report = SimulationReport {
        generations,
        initial_cells: board.len(),
        final_cells: board.len(),
        totals: StepStats::default(),
        extinct_at: board.is_empty().then_some(0),
    };

    let mut current = board;
    for generation in 1..=generations {
        if current.is_empty() {
            break;
        }
        let _span = info_span!("generation", n = generation).entered();
        let (next, stats) = step_with_stats(&current);
        debug!(
            live = next.len(),
            candidates = stats.candidates,
            cache_hits = stats.cache_hits,
            births = stats.births,
            deaths = stats.deaths,
            "stepped"
        );
        add_stats(&mut report.totals, &stats);
        if next.is_empty() {
            report.extinct_at = Some(generation);
        }
        current = next;
    }

    report.final_cells = current.len();
    (current, report)
}

fn add_stats(total: &mut StepStats, stats: &StepStats) {
    total.candidates += stats.candidates;
    total.cache_hits += stats.cache_hits;
    total.births += stats.births;
    total.deaths += stats.deaths;
    total.survivors += stats.survivors;
}

/// Read a board and simulate it per `cfg`.
///
/// Parse failures keep their [`ParseError`](crate::io::life106::ParseError)
/// type inside the returned error so callers can downcast it.
pub fn load_and_simulate<R: BufRead>(input: R, cfg: &LifeConfig) -> Result<(Board, SimulationReport)> {
    let parsed = parse_board(input, &cfg.header, cfg.header_policy())?;
    let (board, report) = simulate(parsed.board, cfg.generations);
    info!(
        generations = report.generations,
        initial = report.initial_cells,
        live = report.final_cells,
        candidates = report.totals.candidates,
        "simulation complete"
    );
    Ok((board, report))
}

/// Read a board, simulate it per `cfg`, and write the result.
///
/// Nothing is written unless the input was read and simulated successfully.
pub fn run<R: BufRead, W: Write>(input: R, output: W, cfg: &LifeConfig) -> Result<SimulationReport> {
    let (board, report) = load_and_simulate(input, cfg)?;
    write_board(output, &board, &cfg.format_options()).context("write output")?;
    Ok(report)
}

/// [`run`] against files, falling back to stdin/stdout when a path is absent.
///
/// The input is fully consumed before the output is touched, and an output
/// file is replaced atomically, so `input` and `output` may be the same path.
pub fn run_paths(
    input: Option<&Path>,
    output: Option<&Path>,
    cfg: &LifeConfig,
) -> Result<SimulationReport> {
    let (board, report) = match input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("open input {}", path.display()))?;
            load_and_simulate(BufReader::new(file), cfg)?
        }
        None => load_and_simulate(io::stdin().lock(), cfg)?,
    };

    let opts = cfg.format_options();
    match output {
        Some(path) => {
            let mut buf = Vec::new();
            write_board(&mut buf, &board, &opts).context("render output")?;
            write_atomic(path, &buf).with_context(|| format!("write output {}", path.display()))?;
        }
        None => {
            write_board(BufWriter::new(io::stdout().lock()), &board, &opts)
                .context("write output")?;
        }
    }
    Ok(report)
}
