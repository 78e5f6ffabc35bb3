#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

//! worldatlas — desktop viewer for the continents/countries dataset.
//!
//! The dataset is read once at startup from `countries_by_continent.json`
//! next to the executable (or four directories above it). A missing or
//! broken file just means an empty viewer.

mod app;

use eframe::egui;
use tracing_subscriber::EnvFilter;
use worldatlas_core::{Atlas, SourceLocator};

fn init_logging() {
    // GUI framework (eframe, egui, winit) logs arrive via the log bridge
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("worldatlas=info,worldatlas_core=info,eframe=warn,egui=warn,winit=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> eframe::Result<()> {
    init_logging();

    let outcome = Atlas::load(&SourceLocator::beside_executable());
    tracing::info!(status = ?outcome.status, "Startup dataset resolved");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(app::WINDOW_TITLE)
            .with_inner_size([950.0, 650.0])
            .with_min_inner_size([760.0, 520.0]),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        app::WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(app::AtlasApp::new(cc, outcome.atlas)))),
    )
}
