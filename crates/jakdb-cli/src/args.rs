use clap::{Parser, Subcommand};

/// CLI arguments for jakdb-cli
#[derive(Debug, Parser)]
#[command(
    name = "jakdb",
    version,
    about = "CLI for querying and inspecting the jakdb-core facility directory"
)]
pub struct CliArgs {
    /// Path to the input JSON file (default: the bundled jak_directory.json)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Optional comma-separated list of districts to load (e.g. Kollam,Ernakulam)
    #[arg(short = 'f', long = "filter", global = true)]
    pub filter: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the directory contents
    Stats,

    /// List districts with their facility counts
    Districts,

    /// Search facilities by district and/or free-text query
    Find {
        /// District to match exactly (case-insensitive); empty matches every district
        #[arg(short, long, default_value = "")]
        district: String,

        /// Substring to match against names and codes (case-insensitive)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Maximum number of results to print
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },

    /// List facilities within a radius of a coordinate, nearest first
    Nearby {
        /// Reference latitude in decimal degrees
        lat: f64,

        /// Reference longitude in decimal degrees
        lon: f64,

        /// Search radius in kilometers
        #[arg(short, long, default_value_t = 25.0)]
        radius: f64,

        /// Maximum number of results to print
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },

    /// Show full details for one facility, by id or JAK code
    Show {
        /// Facility id or JAK code (e.g. 9, JAK-EKM-001)
        id: String,
    },
}
