// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Routecity CLI - quickest routes through a network of named locations

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use routecity::commands::{self, route::Source, Output};
use routecity::config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "routecity")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "ROUTECITY_CONFIG")]
    config: Option<std::path::PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    no_color: bool,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the quickest path between two nodes
    Route {
        /// Start node
        #[arg(long)]
        from: Option<String>,

        /// End node
        #[arg(long)]
        to: Option<String>,

        /// Explore the whole network and report every node
        #[arg(long)]
        all: bool,

        /// Use a preset network (karlstad, stockholm)
        #[arg(long, conflicts_with = "names")]
        preset: Option<String>,

        /// Node names for a random network (default A-J)
        #[arg(long, value_delimiter = ',')]
        names: Vec<String>,

        /// Seed for the random network
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a random network with two or three connections per node
    Generate {
        /// Node names (default A-J)
        names: Vec<String>,

        /// Output format (text, dot, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Seed for the random network
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = config::load(cli.config.as_deref())?;

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => config.log_level.parse().unwrap_or(tracing::Level::INFO),
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let output = Output {
        json: cli.json,
        color: !cli.no_color,
    };

    // Execute command
    match cli.command {
        Commands::Route { from, to, all, preset, names, seed } => {
            if seed.is_some() {
                config.seed = seed;
            }
            let source = match preset {
                Some(name) => Source::Preset(name),
                None => Source::Random(names),
            };
            commands::route::run(from, to, all, source, &config, output)
        }
        Commands::Generate { names, format, seed } => {
            if seed.is_some() {
                config.seed = seed;
            }
            commands::generate::run(&names, &format, &config, output)
        }
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}
