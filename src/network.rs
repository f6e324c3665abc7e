// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! The network of named locations and the weighted connections between them

use crate::error::{Result, RouteError};
use crate::pathfinder::{PathFinder, QuickestPaths};
use crate::randomizer::Randomizer;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::{Bfs, EdgeRef, NodeIndexable};
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Fewest nodes a network needs before it can be randomized or routed
pub const MIN_NODES: usize = 3;

/// A named location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Display name, as first added
    pub name: String,
}

/// One side of an edge, as seen from the node that owns it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    /// Name of the neighboring node
    pub target: String,
    /// Time it takes to travel the edge
    pub time_cost: f64,
}

/// Record of an edge in the order it was created
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionEvent {
    /// Node named first when the edge was added
    pub from: String,
    /// Node named second when the edge was added
    pub to: String,
    /// Time cost of the edge
    pub time_cost: f64,
}

/// Undirected weighted graph of named nodes.
///
/// Node names are unique ignoring case. Nodes and edges are only ever
/// added.
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// The underlying undirected graph, edge weights are time costs
    graph: UnGraph<Node, f64>,
    /// Lower-cased name to node index
    node_indices: HashMap<String, NodeIndex>,
    /// Edges in creation order
    connection_log: Vec<ConnectionEvent>,
}

/// Check a node name: alphanumeric runs separated by single spaces or hyphens
pub fn validate_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .split(|c: char| c == ' ' || c == '-')
            .all(|part| !part.is_empty() && part.chars().all(char::is_alphanumeric));

    if valid {
        Ok(())
    } else {
        Err(RouteError::invalid_argument(format!(
            "Invalid node name: {name:?}"
        )))
    }
}

fn key(name: &str) -> String {
    name.to_lowercase()
}

impl Network {
    /// Create an empty network
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node after validating its name
    pub fn add_node(&mut self, name: &str) -> Result<()> {
        validate_name(name)?;

        let key = key(name);
        if self.node_indices.contains_key(&key) {
            return Err(RouteError::invalid_argument(format!(
                "Node already exists: {name}"
            )));
        }

        let idx = self.graph.add_node(Node {
            name: name.to_string(),
        });
        self.node_indices.insert(key, idx);
        debug!("Added node {}", name);

        Ok(())
    }

    /// Connect two existing nodes in both directions with the same cost
    pub fn add_connection(&mut self, from: &str, to: &str, time_cost: f64) -> Result<()> {
        if !time_cost.is_finite() || time_cost < 0.0 {
            return Err(RouteError::invalid_argument(format!(
                "Time cost must be a non-negative number, got {time_cost}"
            )));
        }

        let from_idx = self
            .index_of(from)
            .ok_or_else(|| RouteError::invalid_argument(format!("Node not found: {from}")))?;
        let to_idx = self
            .index_of(to)
            .ok_or_else(|| RouteError::invalid_argument(format!("Node not found: {to}")))?;

        if from_idx == to_idx {
            return Err(RouteError::invalid_argument(format!(
                "Can not connect {from} to itself"
            )));
        }
        if self.has_edge(from_idx, to_idx) {
            return Err(RouteError::invalid_argument(format!(
                "{from} and {to} are already connected"
            )));
        }

        self.graph.add_edge(from_idx, to_idx, time_cost);
        self.connection_log.push(ConnectionEvent {
            from: self.graph[from_idx].name.clone(),
            to: self.graph[to_idx].name.clone(),
            time_cost,
        });
        debug!("Connected {} and {} ({})", from, to, time_cost);

        Ok(())
    }

    /// Edgeless network holding `names`, at least three of them
    pub fn with_nodes<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let mut network = Self::new();
        network.add_nodes(names)?;
        Ok(network)
    }

    /// Add every name, then connect them at random.
    ///
    /// The nodes are staged on a copy, so the network is left untouched
    /// unless every name is added and connected.
    pub fn create_network<S, R>(&mut self, names: &[S], rng: &mut R) -> Result<()>
    where
        S: AsRef<str>,
        R: Rng,
    {
        if self.edge_count() > 0 {
            return Err(RouteError::invalid_state(
                "Can not create a random network on top of existing connections",
            ));
        }

        let mut staged = self.clone();
        staged.add_nodes(names)?;
        staged.randomize_connections(rng)?;
        *self = staged;
        Ok(())
    }

    fn add_nodes<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        if names.len() < MIN_NODES {
            return Err(RouteError::invalid_argument(format!(
                "A network needs at least {MIN_NODES} nodes, got {}",
                names.len()
            )));
        }

        for name in names {
            self.add_node(name.as_ref())?;
        }
        Ok(())
    }

    /// Connect the nodes of an edgeless network at random, costs 1 to 10
    pub fn randomize_connections<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        Randomizer::new(rng).randomize(self)
    }

    /// Quickest paths from `start`, see [`PathFinder::find_quickest_path`]
    pub fn find_quickest_path(
        &self,
        start: &str,
        end: &str,
        stop_at_end: bool,
    ) -> Result<QuickestPaths> {
        PathFinder::new(self)?.find_quickest_path(start, end, stop_at_end)
    }

    /// Number of nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of undirected edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Check if the network has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Check if a node exists, ignoring case
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.node_indices.contains_key(&key(name))
    }

    /// Node names in the order they were added
    #[must_use]
    pub fn node_names(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].name.as_str())
            .collect()
    }

    /// Number of edges touching `name`
    #[must_use]
    pub fn degree(&self, name: &str) -> Option<usize> {
        self.index_of(name).map(|idx| self.degree_of(idx))
    }

    /// Connections of `name`, one per neighbor
    #[must_use]
    pub fn connections(&self, name: &str) -> Option<Vec<Connection>> {
        let idx = self.index_of(name)?;
        Some(
            self.neighbors_of(idx)
                .map(|(other, time_cost)| Connection {
                    target: self.graph[other].name.clone(),
                    time_cost,
                })
                .collect(),
        )
    }

    /// Check if two nodes share an edge
    #[must_use]
    pub fn are_connected(&self, a: &str, b: &str) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(a), Some(b)) => self.has_edge(a, b),
            _ => false,
        }
    }

    /// Edges in the order they were created
    #[must_use]
    pub fn connection_log(&self) -> &[ConnectionEvent] {
        &self.connection_log
    }

    /// Check if every node is reachable from every other node
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let Some(first) = self.graph.node_indices().next() else {
            return true;
        };

        let mut bfs = Bfs::new(&self.graph, first);
        let mut reached = 0;
        while bfs.next(&self.graph).is_some() {
            reached += 1;
        }
        reached == self.graph.node_count()
    }

    /// Export to DOT format for Graphviz, edges in creation order
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("graph network {\n");
        dot.push_str("  node [shape=circle];\n\n");

        for name in self.node_names() {
            dot.push_str(&format!("  \"{name}\";\n"));
        }

        dot.push('\n');

        for event in &self.connection_log {
            dot.push_str(&format!(
                "  \"{}\" -- \"{}\" [label=\"{}\"];\n",
                event.from, event.to, event.time_cost
            ));
        }

        dot.push_str("}\n");
        dot
    }

    /// Export nodes and the connection log to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct Export<'a> {
            nodes: Vec<&'a str>,
            connections: &'a [ConnectionEvent],
        }

        let mut nodes = self.node_names();
        nodes.sort_by_key(|name| key(name));

        serde_json::to_string_pretty(&Export {
            nodes,
            connections: &self.connection_log,
        })
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.node_indices.get(&key(name)).copied()
    }

    pub(crate) fn name_of(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].name
    }

    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    pub(crate) fn node_bound(&self) -> usize {
        self.graph.node_bound()
    }

    pub(crate) fn degree_of(&self, idx: NodeIndex) -> usize {
        self.graph.edges(idx).count()
    }

    pub(crate) fn has_edge(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.graph.find_edge(a, b).is_some()
    }

    /// Neighbors of `idx` with the cost of the edge leading to each
    pub(crate) fn neighbors_of(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.graph.edges(idx).map(move |edge| {
            let other = if edge.source() == idx {
                edge.target()
            } else {
                edge.source()
            };
            (other, *edge.weight())
        })
    }
}
