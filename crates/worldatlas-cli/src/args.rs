use clap::{Parser, Subcommand};

/// CLI arguments for worldatlas-cli
#[derive(Debug, Parser)]
#[command(
    name = "worldatlas",
    version,
    about = "CLI for inspecting a continents/countries dataset"
)]
pub struct CliArgs {
    /// Path to the dataset JSON. Without it, the file is looked up next to
    /// the executable and four directories above it.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Print records as JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List all continents in source order
    Continents,

    /// List the countries of a continent
    Countries {
        /// Continent name, exactly as in the dataset (e.g. "Europe")
        continent: String,
    },

    /// Show the details of one country
    Country {
        continent: String,
        /// Country name; the first record with this name is shown
        name: String,
    },

    /// Search countries by name (accent and case insensitive)
    Search { query: String },

    /// Download and decode a country's flag, then print its dimensions
    Flag { continent: String, name: String },
}
