// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management

use crate::randomizer::{Randomizer, DEFAULT_COST_RANGE};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured seed
pub const SEED_ENV: &str = "ROUTECITY_SEED";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed for network generation; fresh entropy when unset
    pub seed: Option<u64>,
    /// Cheapest random edge cost
    pub min_cost: u32,
    /// Most expensive random edge cost
    pub max_cost: u32,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            min_cost: DEFAULT_COST_RANGE.0,
            max_cost: DEFAULT_COST_RANGE.1,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    /// Random source for this configuration
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Randomizer using this configuration's seed and cost range
    pub fn randomizer(&self) -> Result<Randomizer<StdRng>> {
        Randomizer::new(self.rng())
            .with_cost_range(self.min_cost, self.max_cost)
            .context("Invalid cost range in configuration")
    }
}

/// Default configuration file location
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "hyperpolymath", "routecity")
        .map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration from `path`, the default location, or defaults.
///
/// An explicit path must exist. `ROUTECITY_SEED` overrides the seed.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => read(path)?,
        None => match default_path() {
            Some(path) if path.exists() => read(&path)?,
            _ => Config::default(),
        },
    };

    if let Ok(seed) = std::env::var(SEED_ENV) {
        config.seed = Some(
            seed.parse()
                .with_context(|| format!("{SEED_ENV} is not a valid seed: {seed}"))?,
        );
    }

    Ok(config)
}

fn read(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Config::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
