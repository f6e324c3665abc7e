// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Integration tests for the routecity CLI commands

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// routecity with a clean environment
fn routecity() -> Command {
    let mut cmd = Command::cargo_bin("routecity").unwrap();
    cmd.env_remove("ROUTECITY_CONFIG")
        .env_remove("ROUTECITY_SEED")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_route_on_preset() {
    routecity()
        .args(["route", "--preset", "karlstad", "--from", "A", "--to", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quickest path A -> E: 6"))
        .stdout(predicate::str::contains("A -> C -> F -> E"));
}

#[test]
fn test_no_color_accepts_any_value() {
    for value in ["1", "yes", "true"] {
        routecity()
            .env("NO_COLOR", value)
            .args(["route", "--preset", "karlstad", "--from", "A", "--to", "E"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Quickest path A -> E: 6"));
    }
}

#[test]
fn test_route_report_all() {
    routecity()
        .args(["route", "--preset", "karlstad", "--from", "D", "--to", "H", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Start Node D\n\n"))
        .stdout(predicate::str::contains(
            "Node:H\nShortest Time Cost: 12\nVia Node: D -> J -> I -> H",
        ));
}

#[test]
fn test_route_json() {
    let output = routecity()
        .args(["--json", "route", "--preset", "stockholm", "--from", "a", "--to", "j"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["start"], "A");
    let j = json["paths"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "J")
        .unwrap();
    assert_eq!(j["distance"], 15.0);
}

#[test]
fn test_route_errors() {
    routecity()
        .args(["route", "--preset", "karlstad", "--from", "A", "--to", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be different"));

    routecity()
        .args(["route", "--preset", "karlstad", "--to", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--from is required"));

    routecity()
        .args(["route", "--preset", "atlantis", "--from", "A", "--to", "B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown preset"));
}

#[test]
fn test_route_on_random_network() {
    routecity()
        .args([
            "route", "--names", "Karlstad,Kil,Arvika,Sunne,Torsby",
            "--from", "Karlstad", "--to", "Torsby", "--seed", "11",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quickest path Karlstad -> Torsby"));
}

#[test]
fn test_generate_is_reproducible_with_seed() {
    let run = || {
        routecity()
            .args(["generate", "--seed", "7", "--format", "dot"])
            .output()
            .unwrap()
    };

    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(String::from_utf8_lossy(&first.stdout).starts_with("graph network {"));
}

#[test]
fn test_generate_json() {
    let output = routecity()
        .args(["--json", "generate", "--seed", "3", "one", "two", "three", "four"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["nodes"].as_array().unwrap().len(), 4);
    let edges = json["connections"].as_array().unwrap().len();
    assert!((4..=6).contains(&edges));
}

#[test]
fn test_generate_rejects_two_names() {
    routecity()
        .args(["generate", "one", "two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 3 nodes"));
}

#[test]
fn test_config_file_sets_seed_and_costs() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "seed = 5\nmin_cost = 3\nmax_cost = 3\n").unwrap();

    let output = routecity()
        .args(["--json", "generate"])
        .env("ROUTECITY_CONFIG", &config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    for connection in json["connections"].as_array().unwrap() {
        assert_eq!(connection["time_cost"], 3.0);
    }
}

#[test]
fn test_completions() {
    routecity()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("routecity"));
}
