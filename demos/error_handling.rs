//! Error handling example for worldatlas-rs
//!
//! Shows the strict loaders next to the degrading ones the viewer relies on.

use worldatlas_core::prelude::*;

fn main() -> Result<()> {
    println!("=== worldatlas-rs Error Handling Example ===\n");

    // Example 1: Strict loading reports problems
    println!("--- Example 1: Strict loading of a missing file ---");
    match Atlas::load_from_path("does/not/exist.json") {
        Ok(_) => println!("✓ Unexpectedly loaded"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 2: Strict parsing distinguishes syntax from shape
    println!("--- Example 2: Strict parsing ---");
    for doc in [r#"{"Europe": ["#, r#"["Europe"]"#, r#"{"Europe": ["France"]}"#] {
        match Atlas::from_json_str(doc) {
            Ok(atlas) => println!("  ok: {} continent(s)", atlas.stats().continents),
            Err(e) => println!("  error: {e}"),
        }
    }
    println!();

    // Example 3: Degrading loading never fails
    println!("--- Example 3: Degrading load ---");
    let outcome = Atlas::load(&SourceLocator::new("/nonexistent/app/dir"));
    match &outcome.status {
        LoadStatus::Loaded(path) => println!("  loaded from {}", path.display()),
        LoadStatus::Missing { searched } => println!("  nothing found, searched {searched:?}"),
        LoadStatus::Failed { path, error } => println!("  {} unusable: {error}", path.display()),
    }
    println!("  continents available: {}", outcome.atlas.stats().continents);

    Ok(())
}
