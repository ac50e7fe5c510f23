//! Binary behavior: exit codes, messages, and output files.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::cargo_bin("route-optimizer").expect("binary built")
}

#[test]
fn test_solved_writes_route() {
    let dir = tempfile::tempdir().expect("tempdir");
    let distances = dir.path().join("distance.csv");
    let output = dir.path().join("out").join("tsp_route.csv");
    fs::write(&distances, "Source,Destination,Distance(M)\nA,B,1\nB,C,2\nA,C,3\n")
        .expect("write");

    bin()
        .arg("--distances")
        .arg(&distances)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Optimized route saved to"));

    assert_eq!(
        fs::read_to_string(&output).expect("route file"),
        "TSP_Route\nA\nB\nC\nA\n"
    );
}

#[test]
fn test_json_summary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let distances = dir.path().join("distance.csv");
    fs::write(&distances, "Source,Destination,Distance(M)\nA,B,1\nB,C,2\nA,C,3\n")
        .expect("write");

    bin()
        .arg("--distances")
        .arg(&distances)
        .arg("--output")
        .arg(dir.path().join("route.csv"))
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"solved\""))
        .stdout(predicate::str::contains("\"total_cost\": 6.0"));
}

#[test]
fn test_infeasible_exit_code() {
    let dir = tempfile::tempdir().expect("tempdir");
    let distances = dir.path().join("distance.csv");
    let output = dir.path().join("tsp_route.csv");
    fs::write(&distances, "Source,Destination,Distance(M)\nA,B,1\nB,C,1\n").expect("write");

    bin()
        .arg("--distances")
        .arg(&distances)
        .arg("--output")
        .arg(&output)
        .args(["--missing-pairs", "forbid"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No solution found."));

    assert!(!output.exists());
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    bin()
        .arg("--distances")
        .arg(dir.path().join("absent.csv"))
        .arg("--output")
        .arg(dir.path().join("tsp_route.csv"))
        .env_remove("RUST_LOG")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("absent.csv"))
        .stderr(predicate::function(|err: &str| err.matches("Error:").count() == 1));
}

#[test]
fn test_forbidden_pair_with_closed_tour_succeeds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let distances = dir.path().join("distance.csv");
    let output = dir.path().join("tsp_route.csv");
    fs::write(
        &distances,
        "Source,Destination,Distance(M)
A,B,1
B,C,1
C,D,1
A,C,5
B,D,5
",
    )
    .expect("write");

    bin()
        .arg("--distances")
        .arg(&distances)
        .arg("--output")
        .arg(&output)
        .args(["--missing-pairs", "forbid"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No solution found.").not());

    let written = fs::read_to_string(&output).expect("route file");
    assert!(written.starts_with("TSP_Route\nA\n"));
    assert!(written.ends_with("\nA\n"));
    assert_eq!(written.lines().count(), 6);
}

#[test]
fn test_config_file_with_flag_override() {
    let dir = tempfile::tempdir().expect("tempdir");
    let distances = dir.path().join("distance.csv");
    let config = dir.path().join("route.toml");
    let output = dir.path().join("tsp_route.csv");
    fs::write(&distances, "Source,Destination,Distance(M)\nA,B,1\nB,C,2\nA,C,3\n")
        .expect("write");
    fs::write(&config, "depot = 5\nsolver = \"exact\"\n").expect("write");

    bin()
        .arg("--distances")
        .arg(&distances)
        .arg("--output")
        .arg(&output)
        .arg("--config")
        .arg(&config)
        .args(["--depot", "1"])
        .assert()
        .success();

    let written = fs::read_to_string(&output).expect("route file");
    assert!(written.starts_with("TSP_Route\nB\n"));
    assert!(written.ends_with("\nB\n"));
}
