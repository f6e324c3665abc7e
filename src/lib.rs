// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Routecity library - quickest routes through a network of named locations
//!
//! This crate provides an undirected weighted [`Network`], a quickest-path
//! finder built on an indexable binary heap, and a generator that wires an
//! edgeless network into a connected graph where every node has two or three
//! connections.
//!
//! ```
//! use routecity::prelude::*;
//!
//! let mut network = Network::new();
//! for name in ["Karlstad", "Kil", "Arvika"] {
//!     network.add_node(name)?;
//! }
//! network.add_connection("Karlstad", "Kil", 2.0)?;
//! network.add_connection("Kil", "Arvika", 3.0)?;
//! network.add_connection("Karlstad", "Arvika", 7.0)?;
//!
//! let paths = network.find_quickest_path("Karlstad", "Arvika", true)?;
//! assert_eq!(paths.distance("Arvika"), Some(5.0));
//! # Ok::<(), routecity::RouteError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod network;
pub mod pathfinder;
pub mod presets;
pub mod queue;
pub mod randomizer;

pub use error::{Result, RouteError};
pub use network::Network;

/// Prelude for common imports
pub mod prelude {
    pub use crate::error::{Result, RouteError};
    pub use crate::network::{Connection, ConnectionEvent, Network};
    pub use crate::pathfinder::{PathEntry, PathFinder, QuickestPaths};
    pub use crate::queue::{Order, PriorityQueue};
    pub use crate::randomizer::Randomizer;
}
