//! Petalbox Render Library
//!
//! SVG backend for petalbox shapes. Consumes the pure geometry from
//! `petalbox-core` and serializes it as standalone SVG documents.

mod svg;

pub use svg::SvgDocument;

use thiserror::Error;

/// Rendering errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
