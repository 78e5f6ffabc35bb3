// crates/worldatlas-core/src/lib.rs

//! # worldatlas-core
//!
//! A small continent/country reference dataset: lenient JSON ingestion,
//! source-file resolution, and the selection state a browsing UI needs.
//!
//! ```rust
//! use worldatlas_core::Atlas;
//!
//! let atlas = Atlas::parse_or_empty(
//!     r#"{"Europe": [{"name": "France", "population": 67000000, "area_km2": 551695}]}"#,
//! );
//! let france = atlas.find_country("Europe", "France").unwrap();
//! assert_eq!(france.population, "67,000,000");
//! assert_eq!(france.area, "551,695 km²");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod browse;
pub mod error;
pub mod flag;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod text;

// Re-exports
pub use crate::browse::Browser;
pub use crate::error::{AtlasError, Result};
#[cfg(feature = "fetch")]
pub use crate::flag::HttpFlagSource;
pub use crate::flag::{FlagImage, FlagSource, NoFlags};
pub use crate::loader::{LoadOutcome, LoadStatus, SourceLocator, DATASET_FILENAME};
pub use crate::model::{Atlas, AtlasStats, Continent, Country};
pub use crate::normalize::Quantity;

pub mod prelude {
    pub use crate::{
        Atlas, AtlasError, AtlasStats, Browser, Continent, Country, FlagImage, FlagSource,
        LoadOutcome, LoadStatus, NoFlags, Result, SourceLocator,
    };
    #[cfg(feature = "fetch")]
    pub use crate::HttpFlagSource;
}
