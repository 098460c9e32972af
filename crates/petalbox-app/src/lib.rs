//! Petalbox demo application.
//!
//! Drives the shape demos without a GUI: slider values become config
//! defaults, taps become scripted trigger events, and each scene is
//! written out as SVG.

mod config;
mod random;
mod scenes;

pub use config::{ConfigError, DemoConfig};

use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("render error: {0}")]
    Render(#[from] petalbox_render::RenderError),
    #[error("shape error: {0}")]
    Shape(#[from] petalbox_core::ShapeError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the demo: load config from the first CLI argument when given,
/// then render every scene.
pub fn run() -> Result<(), AppError> {
    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    scenes::render_all(&config)
}
