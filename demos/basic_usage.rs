//! Basic usage example for worldatlas-rs
//!
//! This example demonstrates how to:
//! - Load the bundled continents/countries dataset
//! - Walk continents and their countries
//! - Look up a single country
//! - Drive the browse state the desktop viewer uses

use worldatlas_core::prelude::*;

fn main() -> Result<()> {
    println!("=== worldatlas-rs Basic Usage Example ===\n");

    // Load the sample dataset shipped with worldatlas-core
    let path = Atlas::default_data_dir().join(Atlas::default_dataset_filename());
    println!("Loading {}...", path.display());
    let atlas = Atlas::load_from_path(&path)?;
    println!("✓ Dataset loaded successfully\n");

    // Example 1: Continents and sizes
    println!("--- Example 1: Continents ---");
    for continent in atlas.continents() {
        println!("{} ({} countries)", continent.name, continent.countries.len());
    }
    println!();

    // Example 2: A single country
    println!("--- Example 2: Country details ---");
    if let Some(country) = atlas.find_country("Europe", "France") {
        println!("Country: {}", country.name);
        println!("Capital: {}", country.capital);
        println!("Population: {}", country.population);
        println!("Area: {}", country.area);
        println!("Currency: {}", country.currency);
    }
    println!();

    // Example 3: Browsing without network access
    println!("--- Example 3: Browse state ---");
    let mut browser = Browser::new(atlas, NoFlags);
    browser.select_continent("Asia");
    println!("Countries in Asia: {:?}", browser.country_names());
    browser.select_country("Japan");
    if let Some(japan) = browser.details() {
        println!("Selected {} (flag loaded: {})", japan.name, browser.flag().is_some());
    }

    Ok(())
}
