//! # route-optimizer CLI
//!
//! Computes a TSP tour from a distance table and writes it as CSV.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{error, LevelFilter};

use route_optimizer::config::RoutingConfig;
use route_optimizer::distance::MissingPairPolicy;
use route_optimizer::pipeline::{self, PipelineInputs, PipelineOutcome, RunSummary};
use route_optimizer::routing::{FirstSolutionStrategy, LocalSearch};
use route_optimizer::solver::SolverKind;

/// Exit code when no feasible tour exists.
const EXIT_INFEASIBLE: u8 = 2;

/// Command-line interface for route-optimizer
#[derive(Parser)]
#[command(name = "route-optimizer")]
#[command(version, about = "Optimize a single-vehicle delivery tour from a distance table")]
#[command(long_about = "Reads a distance table with columns Source, Destination and Distance(M),
builds a symmetric distance matrix, and writes the visiting order to a
one-column CSV (TSP_Route), starting and ending at the depot.

Exit codes: 0 solved, 2 no feasible tour (nothing written), 1 error.")]
struct Cli {
    /// Distance table
    #[arg(long, default_value = "data/distance.csv")]
    distances: PathBuf,

    /// Orders table (loaded and counted only)
    #[arg(long)]
    orders: Option<PathBuf>,

    /// Route output file
    #[arg(long, default_value = "outputs/tsp_route.csv")]
    output: PathBuf,

    /// TOML configuration file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of vehicles
    #[arg(long)]
    vehicles: Option<usize>,

    /// Depot city index in sorted label order
    #[arg(long)]
    depot: Option<usize>,

    /// First-solution strategy
    #[arg(long, value_enum)]
    strategy: Option<FirstSolutionStrategy>,

    /// Local search stage
    #[arg(long, value_enum)]
    local_search: Option<LocalSearch>,

    /// Handling of city pairs without a distance
    #[arg(long, value_enum)]
    missing_pairs: Option<MissingPairPolicy>,

    /// Solver to run
    #[arg(long, value_enum)]
    solver: Option<SolverKind>,

    /// Print a JSON run summary on stdout
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn routing_config(&self) -> anyhow::Result<RoutingConfig> {
        let mut config = match &self.config {
            Some(path) => RoutingConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => RoutingConfig::default(),
        };
        if let Some(v) = self.vehicles {
            config.vehicles = v;
        }
        if let Some(d) = self.depot {
            config.depot = d;
        }
        if let Some(s) = self.strategy {
            config.strategy = s;
        }
        if let Some(l) = self.local_search {
            config.local_search = l;
        }
        if let Some(m) = self.missing_pairs {
            config.missing_pairs = m;
        }
        if let Some(s) = self.solver {
            config.solver = s;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    logger.target(env_logger::Target::Stderr);
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    match run(&cli) {
        Ok(PipelineOutcome::Solved(_)) => ExitCode::SUCCESS,
        Ok(PipelineOutcome::Infeasible) => ExitCode::from(EXIT_INFEASIBLE),
        Err(e) => {
            error!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<PipelineOutcome> {
    let config = cli.routing_config()?;
    let inputs = PipelineInputs {
        distances: cli.distances.clone(),
        orders: cli.orders.clone(),
        output: cli.output.clone(),
    };

    let outcome = pipeline::run(&inputs, &config)
        .with_context(|| format!("optimizing route from {}", inputs.distances.display()))?;

    match &outcome {
        PipelineOutcome::Solved(_) => {
            eprintln!("Optimized route saved to {}", inputs.output.display());
        }
        PipelineOutcome::Infeasible => eprintln!("No solution found."),
    }

    if cli.json {
        let summary = RunSummary::new(&outcome, &inputs.output);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(outcome)
}
