//! Configuration for the renderer.
//!
//! YAML with precedence: CLI > file > defaults.
//!
//! ```yaml
//! version: 1
//! grid:
//!   width: 640
//!   height: 360
//! color: "#ff00ff"
//! scene:
//!   kind: radial
//!   angle_step: 15
//! output:
//!   format: png
//!   path: lines.png
//! ```

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::Grid;
use crate::scene::Scene;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raster size of one comparison cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    640
}
fn default_height() -> u32 {
    360
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { width: default_width(), height: default_height() }
    }
}

/// Where the rendered sheet goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// PNG file.
    #[default]
    Png,
    /// ASCII preview on stdout.
    Terminal,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
    /// File path for PNG output.
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

fn default_path() -> PathBuf {
    PathBuf::from("lines.png")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: OutputFormat::default(), path: default_path() }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Cell grid size.
    #[serde(default)]
    pub grid: GridConfig,

    /// Anti-aliased line color as `#rrggbb`.
    #[serde(default = "default_color")]
    pub color: String,

    /// Scene to draw.
    #[serde(default)]
    pub scene: Scene,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_version() -> u32 {
    1
}
fn default_color() -> String {
    "#ff00ff".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            grid: GridConfig::default(),
            color: default_color(),
            scene: Scene::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            tracing::debug!(%err, "using default configuration");
            Self::default()
        })
    }

    /// Validated cell grid.
    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.grid.width, self.grid.height)
    }

    /// Parsed line color.
    pub fn color(&self) -> Result<Rgb> {
        Rgb::parse(&self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::new();

        assert_eq!(config.version, 1);
        assert_eq!(config.grid, GridConfig { width: 640, height: 360 });
        assert_eq!(config.color().unwrap(), Rgb::MAGENTA);
        assert_eq!(config.scene, Scene::Radial { radius: None, angle_step: 15 });
        assert_eq!(config.output.format, OutputFormat::Png);
    }

    #[test]
    fn test_config_parse_minimal() {
        let config = Config::parse("version: 1").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r##"
version: 1
grid:
  width: 320
  height: 200
color: "#ffff00"
scene:
  kind: sine
  amplitude: 40
  phase: 1.5
output:
  format: terminal
"##;

        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.grid().unwrap().width(), 320);
        assert_eq!(config.color().unwrap(), Rgb::YELLOW);
        assert_eq!(
            config.scene,
            Scene::Sine { amplitude: Some(40.0), frequency: 0.01, phase: 1.5 }
        );
        assert_eq!(config.output.format, OutputFormat::Terminal);
        assert_eq!(config.output.path, PathBuf::from("lines.png"));
    }

    #[test]
    fn test_config_parse_segment() {
        let yaml = "scene:\n  kind: segment\n  x0: 0\n  y0: 0\n  x1: 10\n  y1: 5\n";
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.scene, Scene::Segment { x0: 0.0, y0: 0.0, x1: 10.0, y1: 5.0 });
    }

    #[test]
    fn test_config_parse_error_has_line() {
        let yaml = "version: 1\ngrid:\n  width: wide\n";
        match Config::parse(yaml) {
            Err(Error::ConfigParse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_config_zero_grid_rejected() {
        let config = Config::parse("grid:\n  width: 0\n").unwrap();
        assert!(config.grid().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/trueno-lines.yaml"),
            Err(Error::ConfigNotFound(_))
        ));
        assert_eq!(Config::load_or_default("/nonexistent/trueno-lines.yaml"), Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "color: \"#000000\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.color().unwrap(), Rgb::BLACK);
    }
}
