//! End-to-end runs over CSV files on disk.

use std::fs;
use std::path::Path;

use route_optimizer::config::RoutingConfig;
use route_optimizer::distance::MissingPairPolicy;
use route_optimizer::pipeline::{run, PipelineInputs, PipelineOutcome};
use route_optimizer::solver::SolverKind;
use route_optimizer::Error;

const TRIANGLE: &str = "Source,Destination,Distance(M)\nA,B,1\nB,C,2\nA,C,3\n";

fn inputs(dir: &Path, distances: &str) -> PipelineInputs {
    let path = dir.join("distance.csv");
    fs::write(&path, distances).expect("write distances");
    PipelineInputs {
        distances: path,
        orders: None,
        output: dir.join("outputs").join("tsp_route.csv"),
    }
}

#[test]
fn test_triangle_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let inputs = inputs(dir.path(), TRIANGLE);

    let outcome = run(&inputs, &RoutingConfig::default()).expect("run");
    assert_eq!(outcome.total_cost(), Some(6.0));

    let written = fs::read_to_string(&inputs.output).expect("route file");
    assert_eq!(written, "TSP_Route\nA\nB\nC\nA\n");
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().expect("tempdir");
    let inputs = inputs(
        dir.path(),
        "Source,Destination,Distance(M)\n\
         D1,D2,4\nD1,D3,7\nD1,D4,3\nD2,D3,2\nD2,D4,6\nD3,D4,5\n",
    );

    run(&inputs, &RoutingConfig::default()).expect("first run");
    let first = fs::read(&inputs.output).expect("first output");
    run(&inputs, &RoutingConfig::default()).expect("second run");
    let second = fs::read(&inputs.output).expect("second output");
    assert_eq!(first, second);
}

#[test]
fn test_later_rows_override_earlier() {
    let dir = tempfile::tempdir().expect("tempdir");
    // A-C is first listed as 100 and then corrected to 1. With the correction
    // the optimal tour is A-B-D-C-A (or its reverse) at cost 4; with 100 it
    // would be A-B-C-D-A at cost 22.
    let inputs = inputs(
        dir.path(),
        "Source,Destination,Distance(M)\n\
         A,B,1\nA,C,100\nA,D,10\nB,C,10\nB,D,1\nC,D,1\nC,A,1\n",
    );
    let config = RoutingConfig {
        solver: SolverKind::Exact,
        ..RoutingConfig::default()
    };

    let outcome = run(&inputs, &config).expect("run");
    assert_eq!(outcome.total_cost(), Some(4.0));
    let written = fs::read_to_string(&inputs.output).expect("route file");
    assert!(
        written == "TSP_Route\nA\nB\nD\nC\nA\n" || written == "TSP_Route\nA\nC\nD\nB\nA\n",
        "got {written:?}"
    );
}

#[test]
fn test_infeasible_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let inputs = inputs(
        dir.path(),
        "Source,Destination,Distance(M)\nA,B,1\nB,C,1\n",
    );
    let config = RoutingConfig {
        missing_pairs: MissingPairPolicy::Forbid,
        ..RoutingConfig::default()
    };

    let outcome = run(&inputs, &config).expect("run");
    assert_eq!(outcome, PipelineOutcome::Infeasible);
    assert!(!inputs.output.exists());
}

#[test]
fn test_missing_pairs_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let inputs = inputs(
        dir.path(),
        "Source,Destination,Distance(M)\nA,B,1\nB,C,1\n",
    );
    let err = run(&inputs, &RoutingConfig::default()).unwrap_err();
    assert!(matches!(err, Error::MissingPairs { count: 1, .. }));
    assert!(err.to_string().contains("A-C"));
    assert!(!inputs.output.exists());
}

#[test]
fn test_orders_file_is_loaded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut inputs = inputs(dir.path(), TRIANGLE);
    let orders = dir.path().join("order_small.csv");
    fs::write(&orders, "Order_ID,Destination\n1,B\n2,C\n").expect("write orders");
    inputs.orders = Some(orders);

    let outcome = run(&inputs, &RoutingConfig::default()).expect("run");
    assert_eq!(outcome.total_cost(), Some(6.0));
}

#[test]
fn test_missing_orders_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut inputs = inputs(dir.path(), TRIANGLE);
    inputs.orders = Some(dir.path().join("nope.csv"));

    assert!(run(&inputs, &RoutingConfig::default()).is_err());
    assert!(!inputs.output.exists());
}

#[test]
fn test_missing_distance_column() {
    let dir = tempfile::tempdir().expect("tempdir");
    let inputs = inputs(dir.path(), "Source,Destination,Meters\nA,B,1\n");
    let err = run(&inputs, &RoutingConfig::default()).unwrap_err();
    assert!(matches!(err, Error::MissingColumn { .. }));
}

#[test]
fn test_non_zero_depot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let inputs = inputs(dir.path(), TRIANGLE);
    let config = RoutingConfig {
        depot: 2,
        ..RoutingConfig::default()
    };

    let outcome = run(&inputs, &config).expect("run");
    assert_eq!(outcome.total_cost(), Some(6.0));
    let written = fs::read_to_string(&inputs.output).expect("route file");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "TSP_Route");
    assert_eq!(lines[1], "C");
    assert_eq!(lines.last(), Some(&"C"));
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_forbidden_pair_still_finds_closed_tour() {
    let dir = tempfile::tempdir().expect("tempdir");
    // A-D has no distance. The cheapest-arc walk A→B→C→D cannot return to
    // A, but A-B-D-C-A and its reverse are closed tours of cost 12.
    let inputs = inputs(
        dir.path(),
        "Source,Destination,Distance(M)\n\
         A,B,1\nB,C,1\nC,D,1\nA,C,5\nB,D,5\n",
    );
    let config = RoutingConfig {
        missing_pairs: MissingPairPolicy::Forbid,
        ..RoutingConfig::default()
    };

    let outcome = run(&inputs, &config).expect("run");
    assert_eq!(outcome.total_cost(), Some(12.0));
    let written = fs::read_to_string(&inputs.output).expect("route file");
    assert!(
        written == "TSP_Route\nA\nB\nD\nC\nA\n" || written == "TSP_Route\nA\nC\nD\nB\nA\n",
        "got {written:?}"
    );
}
