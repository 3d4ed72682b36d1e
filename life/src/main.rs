//! Sparse Game of Life simulator.
//!
//! Reads live cells in Life 1.06 format, advances them a configured number of
//! generations, and prints the surviving cells in the same format.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use life::exit_codes;
use life::io::config::{DEFAULT_CONFIG_FILE, LifeConfig, load_config, write_config};
use life::io::life106::ParseError;
use life::logging;
use life::simulate::run_paths;

#[derive(Parser)]
#[command(name = "life", version, about = "Sparse Conway's Game of Life simulator")]
struct Cli {
    /// Log per-generation stats to stderr (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate a Life 1.06 board and print the surviving cells.
    Run(RunArgs),
    /// Write a default config file if missing.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
        /// Config file to create.
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Config file; defaults apply when it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Input file (stdin when omitted).
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Output file (stdout when omitted).
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Number of generations to simulate.
    #[arg(short, long)]
    generations: Option<u32>,
    /// Header token for input and output.
    #[arg(long)]
    header: Option<String>,
    /// Accept input without a header line.
    #[arg(long)]
    no_header_required: bool,
    /// Do not write the header line on output.
    #[arg(long)]
    no_header: bool,
    /// Keep board iteration order instead of sorting by (x, y).
    #[arg(long)]
    unsorted: bool,
    /// Print a `Result of N generations:` line before the output.
    #[arg(long)]
    banner: bool,
}

impl RunArgs {
    /// Layer command-line overrides on top of the loaded config.
    fn apply(&self, cfg: &mut LifeConfig) {
        if let Some(generations) = self.generations {
            cfg.generations = generations;
        }
        if let Some(header) = &self.header {
            cfg.header.clone_from(header);
        }
        if self.no_header_required {
            cfg.require_header = false;
        }
        if self.no_header {
            cfg.write_header = false;
        }
        if self.unsorted {
            cfg.sort_output = false;
        }
        if self.banner {
            cfg.print_banner = true;
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let code = match run(cli) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Run(args) => cmd_run(&args),
        Command::Init { force, config } => cmd_init(&config, force),
    }
}

fn cmd_run(args: &RunArgs) -> Result<()> {
    let mut cfg = load_config(&args.config)?;
    args.apply(&mut cfg);
    cfg.validate().context("invalid command-line overrides")?;
    run_paths(args.input.as_deref(), args.output.as_deref(), &cfg)?;
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        info!(path = %path.display(), "config exists; leaving it unchanged");
        return Ok(());
    }
    write_config(path, &LifeConfig::default())
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ParseError>() {
        Some(ParseError::HeaderMismatch { .. }) => exit_codes::BAD_HEADER,
        _ => exit_codes::INVALID,
    }
}
