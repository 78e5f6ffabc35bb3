// crates/worldatlas-core/src/browse.rs

//! # Browse State
//!
//! The selection model behind the desktop shell: current continent,
//! current country, and the flag for it. Rendering code only reads from
//! here and forwards clicks to [`Browser::select_continent`] /
//! [`Browser::select_country`].
//!
//! All work is synchronous. Selecting a country with a flag URL blocks
//! on the [`FlagSource`] until it answers.

use crate::flag::{FlagImage, FlagSource};
use crate::model::{Atlas, Continent, Country};
use tracing::warn;

pub struct Browser<F: FlagSource> {
    atlas: Atlas,
    flags: F,
    /// Index into `atlas.continents()`.
    continent: Option<usize>,
    details: Option<Country>,
    flag: Option<FlagImage>,
    flag_revision: u64,
}

impl<F: FlagSource> Browser<F> {
    /// Takes ownership of the atlas and selects the first continent, if any.
    pub fn new(atlas: Atlas, flags: F) -> Self {
        let mut browser = Self {
            atlas,
            flags,
            continent: None,
            details: None,
            flag: None,
            flag_revision: 0,
        };
        if !browser.atlas.is_empty() {
            browser.continent = Some(0);
        }
        browser
    }

    pub fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    pub fn continent_names(&self) -> impl Iterator<Item = &str> {
        self.atlas.continent_names()
    }

    pub fn current_continent(&self) -> Option<&Continent> {
        self.continent.and_then(|i| self.atlas.continents().get(i))
    }

    /// Names for the country list of the current continent, in stored order.
    pub fn country_names(&self) -> Vec<&str> {
        self.current_continent()
            .map(|c| c.country_names().collect())
            .unwrap_or_default()
    }

    /// The record whose fields are on display.
    pub fn details(&self) -> Option<&Country> {
        self.details.as_ref()
    }

    pub fn flag(&self) -> Option<&FlagImage> {
        self.flag.as_ref()
    }

    /// Bumped on every flag change, including clears.
    pub fn flag_revision(&self) -> u64 {
        self.flag_revision
    }

    /// Switches continent and clears the detail view.
    ///
    /// An unknown name deselects the continent, leaving an empty list.
    /// Returns whether the name was known.
    pub fn select_continent(&mut self, name: &str) -> bool {
        self.continent = self
            .atlas
            .continents()
            .iter()
            .position(|c| c.name == name);
        self.clear_selection();
        self.continent.is_some()
    }

    /// Shows the first record in the current continent named `name`.
    ///
    /// When nothing matches, the view is left untouched and `false` is
    /// returned.
    pub fn select_country(&mut self, name: &str) -> bool {
        let Some(country) = self.current_continent().and_then(|c| c.country(name)) else {
            return false;
        };
        let country = country.clone();

        self.set_flag(None);
        if country.has_flag() {
            match self.flags.fetch(&country.flag_url) {
                Ok(image) => self.set_flag(Some(image)),
                Err(error) => {
                    warn!(country = %country.name, url = %country.flag_url, %error, "Flag unavailable");
                }
            }
        }
        self.details = Some(country);
        true
    }

    /// Blanks the detail fields and the flag.
    pub fn clear_selection(&mut self) {
        self.details = None;
        self.set_flag(None);
    }

    fn set_flag(&mut self, flag: Option<FlagImage>) {
        if self.flag.is_none() && flag.is_none() {
            return;
        }
        self.flag = flag;
        self.flag_revision += 1;
    }
}
