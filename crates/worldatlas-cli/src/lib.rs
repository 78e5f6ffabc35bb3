//! worldatlas-cli
//! ==============
//!
//! Command-line interface for inspecting `worldatlas-core` datasets.
//!
//! This crate primarily provides a binary (`worldatlas-cli`). The library
//! target only carries this overview page.
//!
//! Basic usage:
//!
//! ```text
//! worldatlas-cli --help
//! worldatlas-cli stats
//! worldatlas-cli countries Europe
//! worldatlas-cli --input ./countries_by_continent.json country Europe France
//! ```
//!
//! For programmatic access to the data structures, use the
//! [`worldatlas-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
