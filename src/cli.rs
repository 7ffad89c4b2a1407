//! Command-line interface for subnet-decomposer
//!
//! Uses clap with derive for type-safe CLI parsing

use crate::config::DEFAULT_LOG_CONFIG;
use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Register IPv4 networks and decompose them into subnets
#[derive(Parser, Debug)]
#[command(name = "subnet-decomposer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Registry file (overrides SUBNET_REGISTRY_FILE)
    #[arg(short, long)]
    pub registry: Option<PathBuf>,

    /// log4rs configuration file
    #[arg(long, default_value = DEFAULT_LOG_CONFIG)]
    pub log_config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format flags shared by the listing commands
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct FormatArgs {
    /// Output in JSON format
    #[arg(long, conflicts_with = "csv")]
    pub json: bool,

    /// Output in CSV format
    #[arg(long)]
    pub csv: bool,
}

impl FormatArgs {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.csv {
            OutputFormat::Csv
        } else {
            OutputFormat::Table
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register an address with the number of hosts it must hold
    Add {
        /// Address, a.b.c.d or a.b.c.d/n
        address: String,

        /// Number of hosts (greater than 0)
        hosts: u32,
    },

    /// Show every registered address decomposed into subnets
    List {
        #[command(flatten)]
        format: FormatArgs,

        /// Most /32 units enumerated per address, 0 for no limit
        #[arg(long)]
        max_units: Option<u64>,
    },

    /// Change the host count of a registered address
    Edit {
        /// Registered address
        address: String,

        /// New number of hosts
        hosts: u32,
    },

    /// Remove a registered address
    Delete {
        /// Registered address
        address: String,
    },

    /// Print every record stored in the registry
    Dump,

    /// Print the device configuration for an address
    ExportConfig {
        /// Bare address, a.b.c.d
        ip: String,

        /// Interface name (overrides SUBNET_INTERFACE)
        #[arg(long)]
        interface: Option<String>,
    },

    /// Decompose a network without registering it
    Decompose {
        /// Base network, a.b.c.d[/n]
        network: String,

        /// Number of hosts
        hosts: u32,

        #[command(flatten)]
        format: FormatArgs,

        /// Most /32 units enumerated, 0 for no limit
        #[arg(long)]
        limit: Option<u64>,
    },
}
