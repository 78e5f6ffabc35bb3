// crates/worldatlas-core/src/model.rs

//! # Domain Model
//!
//! The normalized, read-only view of the dataset: an ordered list of
//! continents, each holding an ordered list of countries.
//!
//! **Structure:** `Atlas` -> `Vec<Continent>` -> `Vec<Country>`

use crate::text::fold_key;
use serde::{Deserialize, Serialize};

/// A country entry, already formatted for display.
///
/// Every field is plain text. Missing source values are empty strings,
/// never `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub capital: String,
    /// e.g. `"67,000,000"`, or the source string verbatim.
    pub population: String,
    /// e.g. `"551,695 km²"`, or the source string verbatim.
    pub area: String,
    pub currency: String,
    pub flag_url: String,
}

impl Country {
    /// A record carrying only a name (bare entries in the source).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn has_flag(&self) -> bool {
        !self.flag_url.trim().is_empty()
    }
}

/// One top-level key of the source document and its countries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continent {
    pub name: String,
    pub countries: Vec<Country>,
}

impl Continent {
    /// First country with exactly this name. Duplicates are allowed, so
    /// later records with the same name are never returned.
    pub fn country(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.name == name)
    }

    pub fn country_names(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(|c| c.name.as_str())
    }
}

/// The whole dataset, in source-document order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atlas {
    continents: Vec<Continent>,
}

/// Simple aggregate statistics for the atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasStats {
    pub continents: usize,
    pub countries: usize,
    pub with_flags: usize,
}

impl Atlas {
    pub fn new(continents: Vec<Continent>) -> Self {
        Self { continents }
    }

    /// The "no data" atlas every failed load degrades to.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.continents.is_empty()
    }

    pub fn continents(&self) -> &[Continent] {
        &self.continents
    }

    pub fn continent_names(&self) -> impl Iterator<Item = &str> {
        self.continents.iter().map(|c| c.name.as_str())
    }

    pub fn continent(&self, name: &str) -> Option<&Continent> {
        self.continents.iter().find(|c| c.name == name)
    }

    /// Resolves `country` inside `continent`, first match by name.
    pub fn find_country(&self, continent: &str, country: &str) -> Option<&Country> {
        self.continent(continent)?.country(country)
    }

    /// Accent-insensitive and case-insensitive substring search over every
    /// country name. Results come back in atlas order.
    pub fn find_countries(&self, query: &str) -> Vec<(&Continent, &Country)> {
        let q = fold_key(query);
        if q.is_empty() {
            return Vec::new();
        }

        self.continents
            .iter()
            .flat_map(|continent| continent.countries.iter().map(move |c| (continent, c)))
            .filter(|(_, c)| fold_key(&c.name).contains(&q))
            .collect()
    }

    pub fn stats(&self) -> AtlasStats {
        let countries = self.continents.iter().flat_map(|c| &c.countries);
        AtlasStats {
            continents: self.continents.len(),
            countries: countries.clone().count(),
            with_flags: countries.filter(|c| c.has_flag()).count(),
        }
    }
}
