// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Single-source quickest paths over a [`Network`]
//!
//! Dijkstra with lazy decrease-key: an improved distance pushes a fresh queue
//! entry and older entries for the same node are dropped when they surface
//! after the node has been settled. When two routes tie on cost the first
//! one relaxed is kept.

use crate::error::{Result, RouteError};
use crate::network::{Network, MIN_NODES};
use crate::queue::{Order, PriorityQueue};
use petgraph::graph::NodeIndex;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Quickest known route from the start to one node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathEntry {
    /// Name of the node this entry describes
    pub name: String,
    /// Total time cost from the start, infinite when unreachable.
    /// Serialized as `null` when infinite.
    pub distance: f64,
    /// Node names from the start to this node, both included
    pub nodes: Vec<String>,
}

impl PathEntry {
    fn unvisited(name: &str) -> Self {
        Self {
            name: name.to_string(),
            distance: f64::INFINITY,
            nodes: vec![name.to_string()],
        }
    }

    /// Check if a route from the start was found
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Result of one path-finding run, one entry per node in the network
#[derive(Debug, Clone, PartialEq)]
pub struct QuickestPaths {
    start: String,
    /// Keyed by lower-cased node name
    entries: BTreeMap<String, PathEntry>,
}

impl QuickestPaths {
    /// Name of the node the run started from
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Entry for `name`, ignoring case
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PathEntry> {
        self.entries.get(&name.to_lowercase())
    }

    /// Total cost to `name`
    #[must_use]
    pub fn distance(&self, name: &str) -> Option<f64> {
        self.get(name).map(|entry| entry.distance)
    }

    /// Node names on the route to `name`
    #[must_use]
    pub fn path(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(|entry| entry.nodes.as_slice())
    }

    /// Check if `name` can be reached from the start
    #[must_use]
    pub fn is_reachable(&self, name: &str) -> bool {
        self.get(name).is_some_and(PathEntry::is_reachable)
    }

    /// Entries ordered by name
    pub fn iter(&self) -> impl Iterator<Item = &PathEntry> {
        self.entries.values()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the run covered no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plain-text summary of every node except the start
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = format!("Start Node {}\n\n", self.start);
        let start_key = self.start.to_lowercase();

        for (key, entry) in &self.entries {
            if *key == start_key {
                continue;
            }
            let cost = if entry.is_reachable() {
                entry.distance.to_string()
            } else {
                "Infinity".to_string()
            };
            out.push_str(&format!(
                "Node:{}\nShortest Time Cost: {}\nVia Node: {}\n\n",
                entry.name,
                cost,
                entry.nodes.join(" -> ")
            ));
        }

        out
    }
}

impl Serialize for QuickestPaths {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct View<'a> {
            start: &'a str,
            paths: Vec<&'a PathEntry>,
        }

        View {
            start: &self.start,
            paths: self.entries.values().collect(),
        }
        .serialize(serializer)
    }
}

/// Queue entry, ordered by distance only
#[derive(Debug)]
struct Candidate {
    distance: f64,
    node: NodeIndex,
    path: Vec<String>,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.total_cmp(&other.distance)
    }
}

/// Quickest-path queries against a borrowed network.
///
/// The finder keeps nothing between calls, so the network may change
/// between one finder and the next.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'a> {
    network: &'a Network,
}

impl<'a> PathFinder<'a> {
    /// Create a finder, the network needs at least three nodes
    pub fn new(network: &'a Network) -> Result<Self> {
        if network.node_count() < MIN_NODES {
            return Err(RouteError::invalid_state(format!(
                "Can not create a path finder for a network with {} node(s), at least {MIN_NODES} are needed",
                network.node_count()
            )));
        }
        Ok(Self { network })
    }

    /// Quickest paths from `start` to every node.
    ///
    /// With `stop_at_end` the search ends as soon as `end` is settled, so
    /// only `end` and the nodes settled before it are guaranteed final.
    /// Without it the whole component of `start` is explored; nodes outside
    /// it keep an infinite distance and a path of just themselves.
    pub fn find_quickest_path(
        &self,
        start: &str,
        end: &str,
        stop_at_end: bool,
    ) -> Result<QuickestPaths> {
        if start.to_lowercase() == end.to_lowercase() {
            return Err(RouteError::invalid_argument(
                "Start node and end node must be different",
            ));
        }
        let (Some(start_idx), Some(end_idx)) =
            (self.network.index_of(start), self.network.index_of(end))
        else {
            return Err(RouteError::invalid_argument(format!(
                "Both {start} and {end} must be in the network"
            )));
        };

        debug!(
            "Finding quickest path {} -> {} (stop at end: {})",
            start, end, stop_at_end
        );

        let bound = self.network.node_bound();
        let mut settled = vec![false; bound];
        let mut entries: Vec<Option<PathEntry>> = vec![None; bound];
        for idx in self.network.node_indices() {
            entries[idx.index()] = Some(PathEntry::unvisited(self.network.name_of(idx)));
        }

        let start_name = self.network.name_of(start_idx).to_string();
        if let Some(entry) = entries[start_idx.index()].as_mut() {
            entry.distance = 0.0;
        }

        let mut queue = PriorityQueue::with_capacity(Order::MinFirst, bound);
        queue.add(Candidate {
            distance: 0.0,
            node: start_idx,
            path: vec![start_name.clone()],
        });

        while let Ok(current) = queue.pop() {
            if settled[current.node.index()] {
                trace!("Dropping stale entry for {}", self.network.name_of(current.node));
                continue;
            }
            settled[current.node.index()] = true;

            if stop_at_end && current.node == end_idx {
                break;
            }

            for (neighbor, time_cost) in self.network.neighbors_of(current.node) {
                if settled[neighbor.index()] {
                    continue;
                }
                let Some(entry) = entries[neighbor.index()].as_mut() else {
                    continue;
                };

                let candidate = current.distance + time_cost;
                if candidate < entry.distance {
                    let mut path = current.path.clone();
                    path.push(entry.name.clone());
                    entry.distance = candidate;
                    entry.nodes.clone_from(&path);
                    trace!("Relaxed {} to {}", entry.name, candidate);

                    queue.add(Candidate {
                        distance: candidate,
                        node: neighbor,
                        path,
                    });
                }
            }
        }

        let entries = entries
            .into_iter()
            .flatten()
            .map(|entry| (entry.name.to_lowercase(), entry))
            .collect();

        Ok(QuickestPaths {
            start: start_name,
            entries,
        })
    }
}
