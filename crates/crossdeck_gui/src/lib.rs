//! Crossdeck desktop front end.
//!
//! Exposes a `run` helper for the binary and the [`surface`] module so the
//! puzzle surface can be driven headlessly in tests.

mod app;
/// Interactive puzzle surface: viewport, gestures, and rendering.
pub mod surface;

use app::CrossdeckApp;
use crossdeck_core::Config;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("crossdeck_core=info,crossdeck_gui=info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

/// Start the desktop UI with tracing enabled.
///
/// # Returns
/// The result of `eframe::run_native`.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error.
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let app = CrossdeckApp::new(Config::from_env());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("Crossdeck"),
        ..Default::default()
    };

    eframe::run_native("Crossdeck", options, Box::new(|_cc| Ok(Box::new(app))))
}
