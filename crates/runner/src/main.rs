//! polypack CLI: counts the spaces of a puzzle whose presents fit.

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use polypack_core::{SearchConfig, UnitOrder};
use polypack_runner::{PuzzleParser, Runner, RunnerConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "polypack")]
#[command(about = "Exact polyomino packing feasibility for rectangular spaces")]
#[command(version)]
struct Cli {
    /// Puzzle file (present catalog followed by space lines)
    input: PathBuf,

    /// Worker threads (0 = one per available core)
    #[arg(short, long, default_value = "0")]
    threads: usize,

    /// Order in which units are placed
    #[arg(long, value_enum, default_value = "area")]
    order: OrderArg,

    /// Restart the cell scan at 0 for consecutive units of one type
    #[arg(long)]
    no_carry_forward: bool,

    /// Reject spaces whose units need more cells than they have without searching
    #[arg(long)]
    precheck: bool,

    /// Output file for results (JSON)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a summary with the packing found for each feasible space
    #[arg(long)]
    render: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    /// Smallest presents first
    Area,
    /// Present index order
    Declared,
}

impl From<OrderArg> for UnitOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Area => UnitOrder::AreaAscending,
            OrderArg::Declared => UnitOrder::AsDeclared,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let puzzle = PuzzleParser::new()
        .parse_file(&cli.input)
        .with_context(|| format!("failed to load puzzle {}", cli.input.display()))?;
    log::info!(
        "loaded {} presents, {} spaces, {} units",
        puzzle.presents.len(),
        puzzle.spaces.len(),
        puzzle.unit_count()
    );

    let search = SearchConfig::new()
        .with_order(cli.order.into())
        .with_carry_forward(!cli.no_carry_forward)
        .with_area_precheck(cli.precheck)
        .with_threads(cli.threads);
    let runner = Runner::new(
        RunnerConfig::new()
            .with_search(search)
            .with_render(cli.render),
    );

    let summary = runner.run(puzzle)?;

    if cli.render || cli.verbose > 0 {
        summary.print_summary();
    }

    if let Some(path) = cli.output {
        summary.save_json(&path)?;
        log::info!("results saved to {}", path.display());
    }

    println!("{}", summary.feasible);
    Ok(())
}
