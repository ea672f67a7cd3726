// SPDX-License-Identifier: MPL-2.0
//! This module handles the overlay configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[overlay]` - Auto-fade timeout, seek policy and transport step
//! - `[gestures]` - Edge swipe zones and indicator debounce
//! - `[orientation]` - Video scale targets for landscape and portrait
//! - `[diagnostics]` - Diagnostic event buffer size
//!
//! Every field is optional in the file; missing values fall back to the
//! constants in [`defaults`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass an override directory to `load_with_override()`
//! 3. Set `PLAYBACK_OVERLAY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use playback_overlay::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.overlay.instant_seeking = Some(false);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PlaybackOverlay";

/// Environment variable overriding the configuration directory.
pub const ENV_CONFIG_DIR: &str = "PLAYBACK_OVERLAY_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Overlay visibility and transport settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayConfig {
    /// Auto-fade timeout in milliseconds.
    #[serde(
        default = "default_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_timeout_ms: Option<u64>,

    /// Apply intermediate seek-bar positions to the player while dragging.
    #[serde(
        default = "default_instant_seeking",
        skip_serializing_if = "Option::is_none"
    )]
    pub instant_seeking: Option<bool>,

    /// Rewind / fast-forward step in milliseconds.
    #[serde(default = "default_seek_step_ms", skip_serializing_if = "Option::is_none")]
    pub seek_step_ms: Option<i64>,

    /// Whether rewind / fast-forward buttons are shown.
    #[serde(
        default = "default_use_fast_forward",
        skip_serializing_if = "Option::is_none"
    )]
    pub use_fast_forward: Option<bool>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            default_timeout_ms: default_timeout_ms(),
            instant_seeking: default_instant_seeking(),
            seek_step_ms: default_seek_step_ms(),
            use_fast_forward: default_use_fast_forward(),
        }
    }
}

/// Edge-swipe gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Fraction of the screen width used by each edge zone.
    #[serde(
        default = "default_edge_zone_fraction",
        skip_serializing_if = "Option::is_none"
    )]
    pub edge_zone_fraction: Option<f32>,

    /// Debounce before the volume/brightness indicator hides (milliseconds).
    #[serde(
        default = "default_indicator_hide_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub indicator_hide_delay_ms: Option<u64>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            edge_zone_fraction: default_edge_zone_fraction(),
            indicator_hide_delay_ms: default_indicator_hide_delay_ms(),
        }
    }
}

/// Video scale targets per device orientation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrientationConfig {
    /// Width and height applied to the video in landscape.
    #[serde(
        default = "default_landscape_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub landscape_scale: Option<(u32, u32)>,

    /// Width and height applied to the video in portrait.
    #[serde(
        default = "default_portrait_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub portrait_scale: Option<(u32, u32)>,
}

impl Default for OrientationConfig {
    fn default() -> Self {
        Self {
            landscape_scale: default_landscape_scale(),
            portrait_scale: default_portrait_scale(),
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of events retained in memory.
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Overlay configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Overlay visibility and transport settings.
    #[serde(default)]
    pub overlay: OverlayConfig,

    /// Edge-swipe gesture settings.
    #[serde(default)]
    pub gestures: GestureConfig,

    /// Orientation scale targets.
    #[serde(default)]
    pub orientation: OrientationConfig,

    /// Diagnostics settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_timeout_ms() -> Option<u64> {
    Some(DEFAULT_OVERLAY_TIMEOUT_MS)
}

fn default_instant_seeking() -> Option<bool> {
    Some(DEFAULT_INSTANT_SEEKING)
}

fn default_seek_step_ms() -> Option<i64> {
    Some(DEFAULT_SEEK_STEP_MS)
}

fn default_use_fast_forward() -> Option<bool> {
    Some(DEFAULT_USE_FAST_FORWARD)
}

fn default_edge_zone_fraction() -> Option<f32> {
    Some(DEFAULT_EDGE_ZONE_FRACTION)
}

fn default_indicator_hide_delay_ms() -> Option<u64> {
    Some(DEFAULT_INDICATOR_HIDE_DELAY_MS)
}

fn default_landscape_scale() -> Option<(u32, u32)> {
    Some(DEFAULT_LANDSCAPE_SCALE)
}

fn default_portrait_scale() -> Option<(u32, u32)> {
    Some(DEFAULT_PORTRAIT_SCALE)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the configuration directory.
///
/// Resolution order: explicit override, then `PLAYBACK_OVERLAY_CONFIG_DIR`
/// (if set and non-empty), then the platform config directory.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("failed to load {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let mut config = Config::default();
        config.overlay.default_timeout_ms = Some(5_000);
        config.overlay.instant_seeking = Some(false);
        config.gestures.edge_zone_fraction = Some(0.25);
        config.orientation.portrait_scale = Some((720, 480));

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[overlay]\ninstant_seeking = false\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.overlay.instant_seeking, Some(false));
        assert_eq!(
            loaded.overlay.default_timeout_ms,
            Some(DEFAULT_OVERLAY_TIMEOUT_MS)
        );
        assert_eq!(
            loaded.gestures.indicator_hide_delay_ms,
            Some(DEFAULT_INDICATOR_HIDE_DELAY_MS)
        );
        assert_eq!(loaded.diagnostics, DiagnosticsConfig::default());
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_and_defaults_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[overlay\n")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_returns_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_into_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = Config::default();

        save_with_override(&config, Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn explicit_override_wins_over_platform_dir() {
        let dir = config_dir_with_override(Some(PathBuf::from("/tmp/overlay-test")));
        assert_eq!(dir, Some(PathBuf::from("/tmp/overlay-test")));
    }
}
