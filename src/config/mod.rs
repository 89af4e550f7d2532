pub mod settings;

pub use settings::Settings;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "historic-sites")]
#[command(about = "Query and aggregate historical-site records")]
pub struct CliConfig {
    /// Settings file (TOML); built-in defaults apply when absent
    #[arg(long)]
    pub config: Option<String>,

    /// CSV dataset path or HTTP(S) URL, overriding the settings file
    #[arg(long)]
    pub dataset: Option<String>,

    /// Write the JSON result to this file instead of stdout
    #[arg(long)]
    pub out: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Look up one site by its National Register Number
    Lookup { register_number: String },

    /// List the sites in a category ("All", "Home", "Bridge", ...)
    Category { label: String },

    /// Per-county site counts as a chart spec
    Counties {
        /// Keep only the N highest-count counties
        #[arg(long)]
        top: Option<usize>,
    },

    /// Per-year registration counts for one county as a chart spec
    Years { county: String },
}
