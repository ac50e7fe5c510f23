//! End-to-end run: load tables, index cities, build the matrix, solve, write.

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Serialize;

use crate::config::RoutingConfig;
use crate::data::{read_distance_table, read_order_table, write_routes, DistanceRecord};
use crate::distance::build_matrix;
use crate::error::Result;
use crate::models::{CityIndex, Tour, TspProblem};
use crate::solver::{solver_for, SolveOutcome};

/// File locations for one run.
#[derive(Debug, Clone)]
pub struct PipelineInputs {
    /// Distance table (`Source`, `Destination`, `Distance(M)`).
    pub distances: PathBuf,
    /// Orders table. Loaded and counted when present, otherwise unused.
    pub orders: Option<PathBuf>,
    /// Route output file.
    pub output: PathBuf,
}

/// Final state of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// Tours for vehicle 0 and every other vehicle that visits a city.
    Solved(Vec<Tour>),
    /// No feasible tour; nothing was written.
    Infeasible,
}

impl PipelineOutcome {
    /// Sum of tour costs, `None` when infeasible.
    pub fn total_cost(&self) -> Option<f64> {
        match self {
            Self::Solved(tours) => Some(tours.iter().map(Tour::cost).sum()),
            Self::Infeasible => None,
        }
    }
}

/// Indexes cities, builds the matrix, and solves, all in memory.
///
/// # Examples
///
/// ```
/// use route_optimizer::config::RoutingConfig;
/// use route_optimizer::data::DistanceRecord;
/// use route_optimizer::pipeline::{optimize, PipelineOutcome};
///
/// let rows = vec![
///     DistanceRecord::new("A", "B", 1.0),
///     DistanceRecord::new("B", "C", 2.0),
///     DistanceRecord::new("A", "C", 3.0),
/// ];
/// let PipelineOutcome::Solved(tours) = optimize(&rows, &RoutingConfig::default()).unwrap() else {
///     panic!("triangle is feasible");
/// };
/// assert_eq!(tours[0].labels(), ["A", "B", "C", "A"]);
/// assert_eq!(tours[0].cost(), 6.0);
/// ```
pub fn optimize(records: &[DistanceRecord], config: &RoutingConfig) -> Result<PipelineOutcome> {
    let cities = CityIndex::from_records(records);
    info!("indexed {} cities", cities.len());
    config.validate(cities.len())?;

    let matrix = build_matrix(records, &cities, config.missing_pairs)?;
    let problem = TspProblem::new(matrix, config.vehicles, config.depot)?;

    let solver = solver_for(config);
    info!(
        "running {} solver from depot {}",
        solver.name(),
        cities.label(config.depot).unwrap_or("?")
    );
    let plan = match solver.solve(&problem)? {
        SolveOutcome::Solved(plan) => plan,
        SolveOutcome::Infeasible => return Ok(PipelineOutcome::Infeasible),
    };

    let dm = problem.matrix();
    let tours = plan
        .routes()
        .iter()
        .enumerate()
        .map(|(vehicle, nodes)| {
            let cost: f64 = nodes.windows(2).map(|w| dm.get(w[0], w[1])).sum();
            Tour::from_nodes(vehicle, nodes, cost, &cities)
        })
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .filter(|tour| tour.vehicle() == 0 || !tour.is_unused())
        .collect();
    Ok(PipelineOutcome::Solved(tours))
}

/// Runs the whole pipeline and writes the route file when a tour is found.
pub fn run(inputs: &PipelineInputs, config: &RoutingConfig) -> Result<PipelineOutcome> {
    if let Some(orders) = &inputs.orders {
        let table = read_order_table(orders)?;
        if table.is_empty() {
            warn!("orders table {} has no rows", orders.display());
        }
    }

    let records = read_distance_table(&inputs.distances)?;
    let outcome = optimize(&records, config)?;

    match &outcome {
        PipelineOutcome::Solved(tours) => write_routes(&inputs.output, tours)?,
        PipelineOutcome::Infeasible => info!("no feasible tour; not writing {}", inputs.output.display()),
    }
    Ok(outcome)
}

/// Machine-readable summary of a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// `"solved"` or `"infeasible"`.
    pub status: &'static str,
    /// Route file, when one was written.
    pub output: Option<PathBuf>,
    /// Total cost across tours.
    pub total_cost: Option<f64>,
    /// Labels of each written tour.
    pub routes: Vec<Vec<String>>,
}

impl RunSummary {
    /// Summarizes `outcome` for a run that wrote to `output`.
    pub fn new(outcome: &PipelineOutcome, output: &Path) -> Self {
        match outcome {
            PipelineOutcome::Solved(tours) => Self {
                status: "solved",
                output: Some(output.to_path_buf()),
                total_cost: outcome.total_cost(),
                routes: tours.iter().map(|t| t.labels().to_vec()).collect(),
            },
            PipelineOutcome::Infeasible => Self {
                status: "infeasible",
                output: None,
                total_cost: None,
                routes: Vec::new(),
            },
        }
    }
}
