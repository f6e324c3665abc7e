// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Route command - quickest path between two nodes of a preset or random network

use super::Output;
use crate::config::Config;
use crate::error::RouteError;
use crate::network::Network;
use crate::pathfinder::QuickestPaths;
use crate::presets::{Preset, TEN_NODES};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::info;

/// Where the network for a route query comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// One of the fixed preset networks, by name
    Preset(String),
    /// A random network over these names
    Random(Vec<String>),
}

/// Run the route command
pub fn run(
    from: Option<String>,
    to: Option<String>,
    all: bool,
    source: Source,
    config: &Config,
    output: Output,
) -> Result<()> {
    let from = from.ok_or_else(|| RouteError::NullArgument("--from is required".into()))?;
    let to = to.ok_or_else(|| RouteError::NullArgument("--to is required".into()))?;

    let network = build_network(&source, config)?;
    info!(
        "Routing {} -> {} over {} nodes and {} edges",
        from,
        to,
        network.node_count(),
        network.edge_count()
    );

    let paths = network
        .find_quickest_path(&from, &to, !all)
        .with_context(|| format!("Failed to find a path from {from} to {to}"))?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
    } else if all {
        print!("{}", paths.report());
    } else {
        println!("{}", summary(&paths, &to, output.color));
    }

    Ok(())
}

/// Build the network a route query runs against
pub fn build_network(source: &Source, config: &Config) -> Result<Network> {
    match source {
        Source::Preset(name) => {
            let preset = Preset::from_name(name).ok_or_else(|| {
                anyhow::anyhow!("Unknown preset: {}. Valid: karlstad, stockholm", name)
            })?;
            Ok(preset.build()?)
        }
        Source::Random(names) => {
            let mut network = if names.is_empty() {
                Network::with_nodes(&TEN_NODES)?
            } else {
                Network::with_nodes(names)?
            };
            config.randomizer()?.randomize(&mut network)?;
            Ok(network)
        }
    }
}

/// One-line answer for the route to `to`, followed by the nodes on it
fn summary(paths: &QuickestPaths, to: &str, color: bool) -> String {
    let Some(entry) = paths.get(to) else {
        return format!("{to} is not in the network");
    };

    if !entry.is_reachable() {
        return format!("No route from {} to {}", paths.start(), entry.name);
    }

    let via = entry.nodes.join(" -> ");
    let cost = entry.distance.to_string();
    if color {
        format!(
            "Quickest path {} -> {}: {}\n  {}",
            paths.start(),
            entry.name,
            cost.bold(),
            via.green()
        )
    } else {
        format!(
            "Quickest path {} -> {}: {}\n  {}",
            paths.start(),
            entry.name,
            cost,
            via
        )
    }
}
