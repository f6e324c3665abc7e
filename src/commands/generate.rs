// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Generate command - wires a random network and prints it

use super::Output;
use crate::config::Config;
use crate::network::Network;
use crate::presets::TEN_NODES;
use anyhow::Result;
use tracing::info;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateFormat {
    /// Connection list with per-node degrees
    Text,
    /// Graphviz DOT format
    Dot,
    /// JSON format
    Json,
}

impl GenerateFormat {
    /// Parse format from string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "dot" | "graphviz" => Some(Self::Dot),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Run the generate command
pub fn run(names: &[String], format: &str, config: &Config, output: Output) -> Result<()> {
    let format = if output.json {
        GenerateFormat::Json
    } else {
        GenerateFormat::parse(format).ok_or_else(|| {
            anyhow::anyhow!("Unknown format: {}. Supported: text, dot, json", format)
        })?
    };

    let mut network = if names.is_empty() {
        Network::with_nodes(&TEN_NODES)?
    } else {
        Network::with_nodes(names)?
    };
    config.randomizer()?.randomize(&mut network)?;
    info!(
        "Generated {} nodes with {} edges",
        network.node_count(),
        network.edge_count()
    );

    let content = match format {
        GenerateFormat::Text => to_text(&network),
        GenerateFormat::Dot => network.to_dot(),
        GenerateFormat::Json => network.to_json()?,
    };
    println!("{}", content.trim_end());

    Ok(())
}

fn to_text(network: &Network) -> String {
    let mut text = format!("Connections ({}):\n", network.edge_count());
    for event in network.connection_log() {
        text.push_str(&format!(
            "  {} -- {} ({})\n",
            event.from, event.to, event.time_cost
        ));
    }

    text.push_str("\nDegrees:\n");
    for name in network.node_names() {
        let degree = network.degree(name).unwrap_or_default();
        text.push_str(&format!("  {name}: {degree}\n"));
    }
    text
}
