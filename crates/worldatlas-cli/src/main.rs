//! worldatlas-cli — Command-line interface for worldatlas-core
//!
//! Inspect a continents/countries dataset from the terminal: summary
//! statistics, continent and country listings, single-country details,
//! name search, and a flag download check.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ worldatlas stats
//!
//! - List continents, then the countries of one
//!   $ worldatlas continents
//!   $ worldatlas countries Europe
//!
//! - Show details for a country (first record with that name)
//!   $ worldatlas country Europe France
//!   $ worldatlas --json country Europe France
//!
//! - Search by name, ignoring accents and case
//!   $ worldatlas search cote
//!
//! Data source
//! -----------
//!
//! By default the dataset is looked up the same way the desktop viewer
//! does it (next to the executable, then four levels up) and a missing
//! file simply means no data. Use `--input <path>` to load a specific file;
//! errors in that file are reported instead of being swallowed.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{anyhow, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use worldatlas_core::{Atlas, Country, FlagSource, SourceLocator};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = CliArgs::parse();

    let atlas = match &args.input {
        Some(path) => Atlas::load_from_path(path)
            .with_context(|| format!("Failed to load dataset from {path}"))?,
        None => Atlas::load(&SourceLocator::beside_executable()).atlas,
    };

    match args.command {
        Commands::Stats => {
            let stats = atlas.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Dataset statistics:");
                println!("  Continents: {}", stats.continents);
                println!("  Countries: {}", stats.countries);
                println!("  With flag URL: {}", stats.with_flags);
            }
        }

        Commands::Continents => {
            for name in atlas.continent_names() {
                println!("{name}");
            }
        }

        Commands::Countries { continent } => match atlas.continent(&continent) {
            Some(c) => {
                for name in c.country_names() {
                    println!("{name}");
                }
            }
            None => eprintln!("Continent {continent} not found"),
        },

        Commands::Country { continent, name } => {
            match atlas.find_country(&continent, &name) {
                Some(c) if args.json => println!("{}", serde_json::to_string_pretty(c)?),
                Some(c) => print_country(c),
                None => eprintln!("No country {name} in {continent}"),
            }
        }

        Commands::Search { query } => {
            let matches = atlas.find_countries(&query);
            if matches.is_empty() {
                println!("No countries found matching: {query}");
            } else {
                for (continent, country) in matches {
                    println!("{} — {}", country.name, continent.name);
                }
            }
        }

        Commands::Flag { continent, name } => {
            let country = atlas
                .find_country(&continent, &name)
                .ok_or_else(|| anyhow!("No country {name} in {continent}"))?;
            if !country.has_flag() {
                println!("{} has no flag URL", country.name);
                return Ok(());
            }
            let flag = flag_source()?
                .fetch(&country.flag_url)
                .with_context(|| format!("Failed to fetch {}", country.flag_url))?;
            println!("{}: {}x{} px", country.flag_url, flag.width, flag.height);
        }
    }

    Ok(())
}

fn print_country(c: &Country) {
    println!("Country: {}", c.name);
    println!("Capital: {}", c.capital);
    println!("Population: {}", c.population);
    println!("Area: {}", c.area);
    println!("Currency: {}", c.currency);
    println!("Flag: {}", c.flag_url);
}

#[cfg(feature = "fetch")]
fn flag_source() -> anyhow::Result<Box<dyn FlagSource>> {
    Ok(Box::new(worldatlas_core::HttpFlagSource::new()?))
}

#[cfg(not(feature = "fetch"))]
fn flag_source() -> anyhow::Result<Box<dyn FlagSource>> {
    Ok(Box::new(worldatlas_core::NoFlags))
}

/// Logs go to stderr so they never mix with command output.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("worldatlas_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
