// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Fixed ten-node networks used by the CLI and the test suites

use crate::error::Result;
use crate::network::Network;

/// Node names shared by every preset
pub const TEN_NODES: [&str; 10] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];

const KARLSTAD: [(&str, &str, f64); 12] = [
    ("A", "B", 10.0),
    ("A", "C", 2.0),
    ("B", "C", 22.0),
    ("B", "D", 22.0),
    ("D", "E", 4.0),
    ("E", "F", 3.0),
    ("F", "C", 1.0),
    ("D", "J", 8.0),
    ("I", "J", 1.0),
    ("I", "H", 3.0),
    ("G", "H", 10.0),
    ("G", "E", 1.0),
];

const STOCKHOLM: [(&str, &str, f64); 12] = [
    ("A", "B", 10.0),
    ("A", "C", 2.0),
    ("C", "B", 8.0),
    ("B", "J", 5.0),
    ("J", "D", 7.0),
    ("D", "I", 2.0),
    ("I", "H", 1.0),
    ("H", "F", 9.0),
    ("H", "G", 2.0),
    ("F", "E", 4.0),
    ("F", "C", 30.0),
    ("E", "G", 8.0),
];

/// Named preset networks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Ten nodes, twelve edges; A to E costs 6
    Karlstad,
    /// Ten nodes, twelve edges; A to J costs 15
    Stockholm,
}

impl Preset {
    /// Parse a preset from its name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "karlstad" => Some(Self::Karlstad),
            "stockholm" => Some(Self::Stockholm),
            _ => None,
        }
    }

    /// Build the preset network
    pub fn build(self) -> Result<Network> {
        let edges: &[(&str, &str, f64)] = match self {
            Self::Karlstad => &KARLSTAD,
            Self::Stockholm => &STOCKHOLM,
        };

        let mut network = Network::new();
        for name in TEN_NODES {
            network.add_node(name)?;
        }
        for &(from, to, time_cost) in edges {
            network.add_connection(from, to, time_cost)?;
        }
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_build() {
        for preset in [Preset::Karlstad, Preset::Stockholm] {
            let network = preset.build().unwrap();
            assert_eq!(network.node_count(), 10);
            assert_eq!(network.edge_count(), 12);
            assert!(network.is_connected());
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Preset::from_name("Karlstad"), Some(Preset::Karlstad));
        assert_eq!(Preset::from_name("STOCKHOLM"), Some(Preset::Stockholm));
        assert_eq!(Preset::from_name("mellerud"), None);
    }

    #[test]
    fn test_stockholm_a_to_j() {
        let network = Preset::Stockholm.build().unwrap();
        let result = network.find_quickest_path("A", "J", true).unwrap();

        // A-B and A-C-B both cost 10; the direct edge is relaxed first
        assert_eq!(result.distance("J"), Some(15.0));
        assert_eq!(result.path("J").unwrap(), ["A", "B", "J"]);
    }
}
