// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Random connected networks where every node ends with two or three edges
//!
//! Generation runs in two phases over a frontier of nodes that have edges
//! but fewer than three, kept in a [`PriorityQueue`] ordered by degree.
//!
//! 1. Closure growth: starting from a random node, connect unconnected nodes
//!    one at a time to the current node until it has three edges, then move
//!    on to a random frontier node. Every node is linked to the graph built
//!    so far at the moment it leaves the unconnected pool, so the result is
//!    connected.
//! 2. Degree completion: pop the lowest-degree frontier node and connect it
//!    to frontier nodes it is not yet adjacent to, lowest degree first, until
//!    it has three edges or no legal target is left.

use crate::error::{Result, RouteError};
use crate::network::{Network, MIN_NODES};
use crate::queue::{Order, PriorityQueue};
use petgraph::graph::NodeIndex;
use rand::Rng;
use tracing::{debug, trace};

/// Degree at which a node leaves the frontier
pub const MAX_DEGREE: usize = 3;

/// Fewest edges any node has after randomization
pub const MIN_DEGREE: usize = 2;

/// Default inclusive range of edge costs
pub const DEFAULT_COST_RANGE: (u32, u32) = (1, 10);

/// Frontier slot; the degree mirrors the node's degree in the network and
/// is the ordering key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Pending {
    degree: usize,
    node: NodeIndex,
}

/// Connects an edgeless network at random
#[derive(Debug, Clone)]
pub struct Randomizer<R> {
    rng: R,
    min_cost: u32,
    max_cost: u32,
}

impl<R: Rng> Randomizer<R> {
    /// Randomizer drawing from `rng`, integer costs from 1 to 10
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            min_cost: DEFAULT_COST_RANGE.0,
            max_cost: DEFAULT_COST_RANGE.1,
        }
    }

    /// Draw edge costs uniformly from `min..=max` instead
    pub fn with_cost_range(mut self, min: u32, max: u32) -> Result<Self> {
        if min == 0 || min > max {
            return Err(RouteError::invalid_argument(format!(
                "Invalid cost range {min}..={max}"
            )));
        }
        self.min_cost = min;
        self.max_cost = max;
        Ok(self)
    }

    /// Connect every node of `network`.
    ///
    /// The network needs at least three nodes and no edges. Afterwards every
    /// node has two or three edges and the network is connected.
    pub fn randomize(&mut self, network: &mut Network) -> Result<()> {
        if network.node_count() < MIN_NODES {
            return Err(RouteError::invalid_state(format!(
                "Can not randomize a network with {} node(s), at least {MIN_NODES} are needed",
                network.node_count()
            )));
        }
        if network.edge_count() > 0 {
            return Err(RouteError::invalid_state(
                "Can not randomize a network that already has connections",
            ));
        }

        let mut frontier = PriorityQueue::with_capacity(Order::MinFirst, network.node_count());

        self.grow_closure(network, &mut frontier)?;
        debug!(
            "Closure grown: {} edges, {} node(s) still below {MAX_DEGREE}",
            network.edge_count(),
            frontier.count()
        );

        self.complete_degrees(network, &mut frontier)?;
        debug!(
            "Randomized {} nodes with {} edges",
            network.node_count(),
            network.edge_count()
        );

        Ok(())
    }

    fn grow_closure(
        &mut self,
        network: &mut Network,
        frontier: &mut PriorityQueue<Pending>,
    ) -> Result<()> {
        let mut empty: Vec<NodeIndex> = network.node_indices().collect();

        let mut current = empty.swap_remove(self.rng.gen_range(0..empty.len()));
        frontier.add(Pending {
            degree: 0,
            node: current,
        });

        while !empty.is_empty() {
            while network.degree_of(current) < MAX_DEGREE && !empty.is_empty() {
                let target = empty.swap_remove(self.rng.gen_range(0..empty.len()));
                self.connect(network, current, target)?;

                frontier.add(Pending {
                    degree: 1,
                    node: target,
                });
                let slot = slot_of(frontier, current)?;
                if let Some(pending) = frontier.get_mut(slot) {
                    pending.degree += 1;
                }
                frontier.sort_at(slot)?;
            }

            if network.degree_of(current) >= MAX_DEGREE {
                let slot = slot_of(frontier, current)?;
                frontier.remove_at(slot)?;
            }

            if empty.is_empty() || frontier.is_empty() {
                break;
            }
            let slot = self.rng.gen_range(0..frontier.count());
            current = frontier.get(slot).ok_or(RouteError::EmptyQueue)?.node;
        }

        Ok(())
    }

    fn complete_degrees(
        &mut self,
        network: &mut Network,
        frontier: &mut PriorityQueue<Pending>,
    ) -> Result<()> {
        while frontier.count() > 1 {
            let current = frontier.pop()?.node;

            while network.degree_of(current) < MAX_DEGREE {
                let Some(slot) = self.pick_target(network, frontier, current) else {
                    break;
                };
                let target = frontier.get(slot).ok_or(RouteError::EmptyQueue)?.node;
                self.connect(network, current, target)?;

                if network.degree_of(target) >= MAX_DEGREE {
                    frontier.remove_at(slot)?;
                } else {
                    if let Some(pending) = frontier.get_mut(slot) {
                        pending.degree += 1;
                    }
                    frontier.sort_at(slot)?;
                }
            }
        }

        Ok(())
    }

    /// Random frontier slot among the lowest-degree nodes not yet adjacent
    /// to `current`
    fn pick_target(
        &mut self,
        network: &Network,
        frontier: &PriorityQueue<Pending>,
        current: NodeIndex,
    ) -> Option<usize> {
        let open: Vec<(usize, usize)> = frontier
            .iter()
            .enumerate()
            .filter(|(_, pending)| !network.has_edge(current, pending.node))
            .map(|(slot, pending)| (slot, pending.degree))
            .collect();

        let lowest = open.iter().map(|&(_, degree)| degree).min()?;
        let candidates: Vec<usize> = open
            .iter()
            .filter(|&&(_, degree)| degree == lowest)
            .map(|&(slot, _)| slot)
            .collect();

        Some(candidates[self.rng.gen_range(0..candidates.len())])
    }

    fn connect(&mut self, network: &mut Network, a: NodeIndex, b: NodeIndex) -> Result<()> {
        let time_cost = self.rng.gen_range(self.min_cost..=self.max_cost);
        let from = network.name_of(a).to_string();
        let to = network.name_of(b).to_string();
        trace!("Connecting {} and {} ({})", from, to, time_cost);
        network.add_connection(&from, &to, f64::from(time_cost))
    }
}

fn slot_of(frontier: &PriorityQueue<Pending>, node: NodeIndex) -> Result<usize> {
    frontier
        .position(|pending| pending.node == node)
        .ok_or_else(|| RouteError::invalid_state("node missing from the frontier"))
}
