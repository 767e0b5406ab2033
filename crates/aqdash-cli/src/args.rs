use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments for aqdash
#[derive(Debug, Parser)]
#[command(
    name = "aqdash",
    version,
    about = "Air-quality dashboard in the terminal: AQI bands, pollutants and city snapshots"
)]
pub struct CliArgs {
    /// Path to the city CSV (default: the dataset shipped with aqdash-core)
    #[arg(short = 'i', long = "input", env = "AQDASH_INPUT", global = true)]
    pub input: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded city dataset
    Stats,

    /// Print the AQI band table
    Bands,

    /// Classify an AQI value
    Classify {
        /// AQI value (any real number; out-of-range values fall back to "Good")
        #[arg(allow_negative_numbers = true)]
        aqi: f64,
    },

    /// List cities with their AQI category
    Cities {
        /// Only cities whose name or state contains this (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show the weather snapshot, gauge and tips for one city
    City {
        /// City name (e.g. "Fresno")
        name: String,
    },

    /// List pollutants with their safety status
    Pollutants,

    /// Show hazards and safety information for one pollutant
    Pollutant {
        /// Id, formula or name (e.g. pm25, CO, Ozone)
        id: String,
    },

    /// Show the pollutant share breakdown
    Distribution,
}
