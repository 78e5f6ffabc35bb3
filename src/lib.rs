// src/lib.rs

//! Umbrella crate: re-exports [`worldatlas_core`] so the demos under
//! `demos/` can be run from the workspace root.

pub use worldatlas_core::*;
