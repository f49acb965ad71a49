//! Run and chart settings.
//!
//! Sampling parameters are fixed constants; only the random seed and the
//! output image are configurable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default chart caption.
pub const DEFAULT_TITLE: &str =
    "Risk Matrix (5x5) with Risk Level Coloring and Risk Score Quintile Shading";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seed for reproducible runs; entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Chart output settings.
    pub render: RenderConfig,
}

/// Chart output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output image; `.svg` selects vector output, anything else PNG.
    pub output: PathBuf,
    /// Image width in pixels, legend panel included.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Chart caption.
    pub title: String,
    /// Marker radius in pixels.
    pub marker_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("risk_matrix.png"),
            width: 1000,
            height: 800,
            title: DEFAULT_TITLE.to_string(),
            marker_size: 5,
        }
    }
}

impl RenderConfig {
    /// Whether the output path asks for SVG.
    pub fn is_svg(&self) -> bool {
        self.output
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("svg"))
            .unwrap_or(false)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: AppConfig = toml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;

        Ok(())
    }
}

/// Load configuration from file, or defaults if it does not exist.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    if path.as_ref().exists() {
        AppConfig::from_file(path)
    } else {
        Ok(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.render.output, PathBuf::from("risk_matrix.png"));
        assert_eq!(config.render.title, DEFAULT_TITLE);
        assert!(!config.render.is_svg());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
seed = 42

[render]
output = "matrix.svg"
width = 1200
"#
        )
        .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.render.width, 1200);
        assert_eq!(config.render.height, 800);
        assert!(config.render.is_svg());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("risk_matrix.toml");

        let mut config = AppConfig::default();
        config.seed = Some(7);
        config.save_to_file(&path).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.seed, Some(7));
        assert_eq!(loaded.render, config.render);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = load_config("does/not/exist.toml").unwrap();
        assert_eq!(config.seed, None);
    }
}
