//! Demo run configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Demo run configuration, loadable from a JSON file. Any omitted
/// field falls back to its default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Directory SVG output is written into.
    pub output_dir: PathBuf,
    /// Square canvas edge length in pixels.
    pub canvas_size: f64,
    /// Frames per second for animation sequences.
    pub frame_rate: u32,
    /// Seconds each tap-triggered animation runs for.
    pub animation_duration: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("out"),
            canvas_size: 300.0,
            frame_rate: 60,
            animation_duration: 1.0,
        }
    }
}

impl DemoConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// The drawing rect every scene renders into.
    pub fn canvas_rect(&self) -> kurbo::Rect {
        kurbo::Rect::new(0.0, 0.0, self.canvas_size, self.canvas_size)
    }

    /// Seconds between consecutive animation frames.
    pub fn frame_interval(&self) -> f64 {
        1.0 / self.frame_rate.max(1) as f64
    }

    /// Frames in one animation sequence, both endpoints included.
    pub fn frame_count(&self) -> u32 {
        (self.animation_duration * self.frame_rate as f64).ceil() as u32 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!((config.canvas_size - 300.0).abs() < f64::EPSILON);
        assert_eq!(config.frame_count(), 61);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: DemoConfig =
            serde_json::from_str(r#"{"canvas_size": 512.0, "frame_rate": 30}"#).unwrap();
        assert!((config.canvas_size - 512.0).abs() < f64::EPSILON);
        assert_eq!(config.frame_rate, 30);
        assert!((config.animation_duration - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_canvas_rect_is_square_at_origin() {
        let rect = DemoConfig::default().canvas_rect();
        assert_eq!(rect, kurbo::Rect::new(0.0, 0.0, 300.0, 300.0));
    }

    #[test]
    fn test_frame_interval_guards_zero_rate() {
        let config = DemoConfig {
            frame_rate: 0,
            ..DemoConfig::default()
        };
        assert!((config.frame_interval() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            DemoConfig::load(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
