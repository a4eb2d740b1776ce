//! Configuration file support for inkboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/inkboard/config.toml`. Settings cover the initial brush and
//! how pointer cancellation and session conflicts are handled.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{CancelScope, ColorSpec, DuplicateSessionPolicy};
pub use types::{BrushConfig, InputConfig};

use crate::input::settings::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [brush]
/// default_color = "black"
/// default_size = 5.0
/// epsilon = 0.1
/// family = "marker"
///
/// [input]
/// cancel_scope = "pointer"
/// duplicate_session = "auto"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial brush (color, size, family, tessellation tolerance)
    #[serde(default)]
    pub brush: BrushConfig,

    /// Pointer input handling
    #[serde(default)]
    pub input: InputConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `brush.default_size`: 1.0 - 50.0
    /// - `brush.epsilon`: 0.01 - 10.0
    fn validate_and_clamp(&mut self) {
        // Size: slider range
        if !(MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).contains(&self.brush.default_size) {
            log::warn!(
                "Invalid default_size {:.1}, clamping to {:.1}-{:.1} range",
                self.brush.default_size,
                MIN_BRUSH_SIZE,
                MAX_BRUSH_SIZE
            );
            self.brush.default_size = if self.brush.default_size.is_nan() {
                MIN_BRUSH_SIZE
            } else {
                self.brush.default_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE)
            };
        }

        // Epsilon: 0.01 - 10.0
        if !(0.01..=10.0).contains(&self.brush.epsilon) {
            log::warn!(
                "Invalid epsilon {:.3}, clamping to 0.01-10.0 range",
                self.brush.epsilon
            );
            self.brush.epsilon = if self.brush.epsilon.is_nan() {
                0.1
            } else {
                self.brush.epsilon.clamp(0.01, 10.0)
            };
        }

        // Color names are resolved here so typos surface once at load time
        if let ColorSpec::Name(name) = &self.brush.default_color {
            if crate::util::parse_color(name).is_none() {
                log::warn!("Invalid default_color '{}', falling back to 'black'", name);
                self.brush.default_color = ColorSpec::Name("black".to_string());
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is missing.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Saves the configuration to `config_path`, creating the parent directory if needed.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Returns the JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::BrushFamily;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config.brush.default_size, 5.0);
        assert_eq!(config.brush.epsilon, 0.1);
        assert_eq!(config.input.cancel_scope, CancelScope::Pointer);
    }

    #[test]
    fn load_parses_and_clamps_values() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[brush]
default_color = "chartreuse"
default_size = 120.0
epsilon = 0.0
family = "highlighter"

[input]
cancel_scope = "gesture"
duplicate_session = "restart"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.brush.default_size, MAX_BRUSH_SIZE);
        assert_eq!(config.brush.epsilon, 0.01);
        assert_eq!(config.brush.default_color, ColorSpec::Name("black".into()));
        assert_eq!(config.brush.family, BrushFamily::Highlighter);
        assert_eq!(config.input.cancel_scope, CancelScope::Gesture);
        assert_eq!(
            config.input.duplicate_session,
            DuplicateSessionPolicy::Restart
        );
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[brush\ndefault_size = ").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn save_then_load_keeps_settings() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.brush.default_color = ColorSpec::Rgb([30, 136, 229]);
        config.brush.default_size = 12.0;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.brush.default_color, ColorSpec::Rgb([30, 136, 229]));
        assert_eq!(loaded.brush.default_size, 12.0);
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("brush"));
        assert!(schema.contains("cancel_scope"));
    }
}
