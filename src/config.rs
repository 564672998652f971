use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MarkupResult;
use crate::palette::{self, Palette};

/// Environment variable naming a JSON configuration file
pub const CONFIG_ENV_VAR: &str = "MARKUP_CONFIG";

/// Brush size limits. Radii are in image pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    pub min_radius: f32,
    pub max_radius: f32,
    pub default_radius: f32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            min_radius: 2.0,
            max_radius: 25.0,
            default_radius: 20.0,
        }
    }
}

impl BrushConfig {
    /// Clamp a radius into the configured range
    pub fn clamp(&self, radius: f32) -> f32 {
        radius.clamp(self.min_radius, self.max_radius)
    }
}

/// Application settings, loaded from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    pub brush: BrushConfig,
    /// Side of the square icon the brush cursor is drawn into
    pub cursor_icon_size: u32,
    /// Side of the polygon vertex markers, in image pixels
    pub vertex_marker_side: f32,
    /// Zoom multiplier per ctrl+wheel notch
    pub zoom_factor: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub background_opacity: f32,
    pub mask_opacity: f32,
    pub palette: Vec<String>,
    pub default_color: String,
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            brush: BrushConfig::default(),
            cursor_icon_size: 128,
            vertex_marker_side: 6.0,
            zoom_factor: 1.04,
            min_zoom: 0.05,
            max_zoom: 40.0,
            background_opacity: 0.8,
            mask_opacity: 0.5,
            palette: palette::DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
            default_color: palette::DEFAULT_COLOR.to_owned(),
            input_dir: None,
            output_dir: None,
        }
    }
}

impl MarkupConfig {
    /// Parse a configuration from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> MarkupResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> MarkupResult<Self> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise the file named by `MARKUP_CONFIG`, otherwise defaults.
    ///
    /// A file that fails to load is reported and replaced by defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match path {
            Some(path) => match Self::load(&path) {
                Ok(config) => config,
                Err(err) => {
                    log::error!("Failed to load config {}: {}", path.display(), err);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::from_hex(&self.palette, &self.default_color)
    }

    /// Repair values that would break the tools
    fn sanitized(mut self) -> Self {
        self.brush.min_radius = self.brush.min_radius.max(1.0);
        if self.brush.max_radius < self.brush.min_radius {
            log::warn!(
                "Brush max radius {} below min radius {}, raising it",
                self.brush.max_radius,
                self.brush.min_radius
            );
            self.brush.max_radius = self.brush.min_radius;
        }
        self.brush.default_radius = self.brush.clamp(self.brush.default_radius);
        self.cursor_icon_size = self.cursor_icon_size.max(1);
        if self.zoom_factor <= 1.0 {
            self.zoom_factor = Self::default().zoom_factor;
        }
        if self.min_zoom <= 0.0 || self.min_zoom > self.max_zoom {
            let defaults = Self::default();
            self.min_zoom = defaults.min_zoom;
            self.max_zoom = defaults.max_zoom;
        }
        self.background_opacity = self.background_opacity.clamp(0.0, 1.0);
        self.mask_opacity = self.mask_opacity.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MarkupConfig::default();
        assert_eq!(config.brush.min_radius, 2.0);
        assert_eq!(config.brush.max_radius, 25.0);
        assert_eq!(config.brush.default_radius, 20.0);
        assert_eq!(config.cursor_icon_size, 128);
        assert_eq!(config.palette.len(), 12);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = MarkupConfig::from_json(r#"{ "brush": { "max_radius": 63.0 } }"#).unwrap();
        assert_eq!(config.brush.max_radius, 63.0);
        assert_eq!(config.brush.min_radius, 2.0);
        assert_eq!(config.vertex_marker_side, 6.0);
    }

    #[test]
    fn test_sanitize_radius_range() {
        let config = MarkupConfig::from_json(
            r#"{ "brush": { "min_radius": 0.0, "max_radius": 10.0, "default_radius": 50.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.brush.min_radius, 1.0);
        assert_eq!(config.brush.default_radius, 10.0);
    }

    #[test]
    fn test_invalid_json() {
        assert!(MarkupConfig::from_json("{ not json").is_err());
    }
}
