//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/skyline/skyline.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `SKYLINE_*` prefix, `__` between section and key
//!    (e.g. `SKYLINE_RENDER__ZOOM=10`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Scaling from skyline coordinates to screen coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Screen units per skyline unit
    pub zoom: f64,
    /// Horizontal shift applied after zooming
    pub x_offset: f64,
    /// Screen y of the ground line (screen y grows downward)
    pub y_offset: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            zoom: 20.0,
            x_offset: 20.0,
            y_offset: 140.0,
        }
    }
}

/// How numbers are printed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Decimal places; unset prints the shortest representation
    pub precision: Option<usize>,
}

/// Raw render config for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawRenderConfig {
    pub zoom: Option<f64>,
    pub x_offset: Option<f64>,
    pub y_offset: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawOutputConfig {
    pub precision: Option<usize>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub render: RawRenderConfig,
    pub output: RawOutputConfig,
}

/// Unified configuration for skyline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub render: RenderConfig,
    pub output: OutputConfig,
}

/// Get the XDG config directory for skyline.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "skyline").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("skyline.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay a raw layer: every value it specifies wins.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            render: RenderConfig {
                zoom: overlay.render.zoom.unwrap_or(self.render.zoom),
                x_offset: overlay.render.x_offset.unwrap_or(self.render.x_offset),
                y_offset: overlay.render.y_offset.unwrap_or(self.render.y_offset),
            },
            output: OutputConfig {
                precision: overlay.output.precision.or(self.output.precision),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/skyline/skyline.toml`
    /// 3. Explicit config file
    /// 4. Environment variables: `SKYLINE_*` prefix
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("loading config: {}", path.display());
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;

        Ok(current)
    }

    /// Apply SKYLINE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("SKYLINE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_float("render.zoom") {
            settings.render.zoom = val;
        }
        if let Ok(val) = config.get_float("render.x_offset") {
            settings.render.x_offset = val;
        }
        if let Ok(val) = config.get_float("render.y_offset") {
            settings.render.y_offset = val;
        }
        if let Ok(val) = config.get_int("output.precision") {
            settings.output.precision =
                Some(usize::try_from(val).map_err(|_| ApplicationError::Config {
                    message: format!("output.precision must not be negative: {val}"),
                })?);
        }

        Ok(settings)
    }

    /// Reject values that would make scaled output meaningless.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let render = &self.render;
        if !render.zoom.is_finite() || render.zoom <= 0.0 {
            return Err(ApplicationError::Config {
                message: format!("render.zoom must be a positive number: {}", render.zoom),
            });
        }
        if !render.x_offset.is_finite() || !render.y_offset.is_finite() {
            return Err(ApplicationError::Config {
                message: "render offsets must be finite".to_string(),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# skyline configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/skyline/skyline.toml
#   File:   skyline --config <FILE>
#   Env:    SKYLINE_* environment variables, e.g. SKYLINE_RENDER__ZOOM=10

[render]
# Screen units per skyline unit
# zoom = 20.0

# Horizontal shift after zooming
# x_offset = 20.0

# Screen y of the ground line (screen y grows downward)
# y_offset = 140.0

[output]
# Decimal places for printed numbers (unset: shortest form)
# precision = 2
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_matches_classic_frame() {
        let settings = Settings::default();

        assert_eq!(settings.render.zoom, 20.0);
        assert_eq!(settings.render.x_offset, 20.0);
        assert_eq!(settings.render.y_offset, 140.0);
        assert_eq!(settings.output.precision, None);
    }

    #[test]
    fn given_partial_overlay_when_merging_then_only_specified_values_change() {
        let base = Settings::default();
        let overlay = RawSettings {
            render: RawRenderConfig {
                zoom: Some(5.0),
                x_offset: None,
                y_offset: None,
            },
            output: RawOutputConfig { precision: Some(2) },
        };

        let result = base.merge_with(&overlay);

        assert_eq!(result.render.zoom, 5.0);
        assert_eq!(result.render.x_offset, 20.0);
        assert_eq!(result.render.y_offset, 140.0);
        assert_eq!(result.output.precision, Some(2));
    }

    #[test]
    fn given_empty_overlay_when_merging_then_base_kept() {
        let base = Settings {
            render: RenderConfig {
                zoom: 3.0,
                x_offset: 1.0,
                y_offset: 2.0,
            },
            output: OutputConfig { precision: Some(1) },
        };

        assert_eq!(base.merge_with(&RawSettings::default()), base);
    }

    #[test]
    fn given_non_positive_zoom_when_validating_then_config_error() {
        let mut settings = Settings::default();
        settings.render.zoom = 0.0;

        let err = settings.validate().unwrap_err();

        assert!(matches!(err, ApplicationError::Config { .. }));
        assert!(err.to_string().contains("render.zoom"));
    }

    #[test]
    fn given_infinite_offset_when_validating_then_config_error() {
        let mut settings = Settings::default();
        settings.render.y_offset = f64::INFINITY;

        assert!(settings.validate().is_err());
    }

    #[test]
    fn given_settings_when_to_toml_then_round_trips() {
        let mut settings = Settings::default();
        settings.output.precision = Some(3);

        let text = settings.to_toml().unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();

        assert_eq!(parsed, settings);
    }

    #[test]
    fn given_template_when_parsed_then_yields_defaults() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();

        assert_eq!(Settings::default().merge_with(&raw), Settings::default());
    }
}
