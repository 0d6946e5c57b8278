//! Configuration file support for airmouse.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/airmouse/config.toml`. Settings
//! cover the camera frame geometry, pointer filter tuning, gesture
//! thresholds, and HUD preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{CameraConfig, GestureConfig, PointerConfig, UiConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [camera]
/// width = 640
/// height = 480
///
/// [pointer]
/// inset_margin = 100.0
/// dead_zone = 3.0
/// max_step = 40.0
///
/// [gesture]
/// click_distance = 30.0
/// click_cooldown_ms = 250
///
/// [ui]
/// show_hud = true
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Camera frame geometry
    #[serde(default)]
    pub camera: CameraConfig,

    /// Pointer filter tuning
    #[serde(default)]
    pub pointer: PointerConfig,

    /// Gesture thresholds and debounce windows
    #[serde(default)]
    pub gesture: GestureConfig,

    /// HUD display preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't cause
    /// erratic cursor behavior. Invalid values are clamped to the nearest
    /// valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `camera.width` / `camera.height`: 160 - 4096
    /// - `pointer.inset_margin`: 0 - 200
    /// - `pointer.dead_zone`: 0 - 20
    /// - `pointer.*_radius`: 1 - 500 (fast >= slow)
    /// - `pointer.*_factor`: 1 - 30
    /// - `pointer.max_step`: 1 - 500
    /// - `gesture.*_distance`: 1 - 300
    /// - `gesture.click_cooldown_ms` / `loss_timeout_ms`: 50 - 2000
    /// - `gesture.scroll_gain`: 0.1 - 10.0
    /// - `gesture.scroll_min_delta`: 0 - 50
    fn validate_and_clamp(&mut self) {
        if !(160..=4096).contains(&self.camera.width) {
            log::warn!(
                "Invalid camera width {}, clamping to 160-4096 range",
                self.camera.width
            );
            self.camera.width = self.camera.width.clamp(160, 4096);
        }

        if !(160..=4096).contains(&self.camera.height) {
            log::warn!(
                "Invalid camera height {}, clamping to 160-4096 range",
                self.camera.height
            );
            self.camera.height = self.camera.height.clamp(160, 4096);
        }

        if !(0.0..=200.0).contains(&self.pointer.inset_margin) {
            log::warn!(
                "Invalid inset_margin {:.1}, clamping to 0-200 range",
                self.pointer.inset_margin
            );
            self.pointer.inset_margin = self.pointer.inset_margin.clamp(0.0, 200.0);
        }

        if !(0.0..=20.0).contains(&self.pointer.dead_zone) {
            log::warn!(
                "Invalid dead_zone {:.1}, clamping to 0-20 range",
                self.pointer.dead_zone
            );
            self.pointer.dead_zone = self.pointer.dead_zone.clamp(0.0, 20.0);
        }

        if !(1.0..=500.0).contains(&self.pointer.slow_radius) {
            log::warn!(
                "Invalid slow_radius {:.1}, clamping to 1-500 range",
                self.pointer.slow_radius
            );
            self.pointer.slow_radius = self.pointer.slow_radius.clamp(1.0, 500.0);
        }

        if !(1.0..=500.0).contains(&self.pointer.fast_radius) {
            log::warn!(
                "Invalid fast_radius {:.1}, clamping to 1-500 range",
                self.pointer.fast_radius
            );
            self.pointer.fast_radius = self.pointer.fast_radius.clamp(1.0, 500.0);
        }

        // The radii must stay ordered or the factor selection inverts.
        if self.pointer.fast_radius < self.pointer.slow_radius {
            log::warn!(
                "fast_radius {:.1} below slow_radius {:.1}, raising to match",
                self.pointer.fast_radius,
                self.pointer.slow_radius
            );
            self.pointer.fast_radius = self.pointer.slow_radius;
        }

        for (name, factor) in [
            ("slow_factor", &mut self.pointer.slow_factor),
            ("medium_factor", &mut self.pointer.medium_factor),
            ("fast_factor", &mut self.pointer.fast_factor),
        ] {
            if !(1.0..=30.0).contains(factor) {
                log::warn!("Invalid {} {:.1}, clamping to 1-30 range", name, factor);
                *factor = factor.clamp(1.0, 30.0);
            }
        }

        if !(1.0..=500.0).contains(&self.pointer.max_step) {
            log::warn!(
                "Invalid max_step {:.1}, clamping to 1-500 range",
                self.pointer.max_step
            );
            self.pointer.max_step = self.pointer.max_step.clamp(1.0, 500.0);
        }

        for (name, distance) in [
            ("click_distance", &mut self.gesture.click_distance),
            ("scroll_distance", &mut self.gesture.scroll_distance),
            ("drag_distance", &mut self.gesture.drag_distance),
        ] {
            if !(1.0..=300.0).contains(distance) {
                log::warn!("Invalid {} {:.1}, clamping to 1-300 range", name, distance);
                *distance = distance.clamp(1.0, 300.0);
            }
        }

        if !(50..=2000).contains(&self.gesture.click_cooldown_ms) {
            log::warn!(
                "Invalid click_cooldown_ms {}, clamping to 50-2000 range",
                self.gesture.click_cooldown_ms
            );
            self.gesture.click_cooldown_ms = self.gesture.click_cooldown_ms.clamp(50, 2000);
        }

        if !(50..=2000).contains(&self.gesture.loss_timeout_ms) {
            log::warn!(
                "Invalid loss_timeout_ms {}, clamping to 50-2000 range",
                self.gesture.loss_timeout_ms
            );
            self.gesture.loss_timeout_ms = self.gesture.loss_timeout_ms.clamp(50, 2000);
        }

        if !(0.1..=10.0).contains(&self.gesture.scroll_gain) {
            log::warn!(
                "Invalid scroll_gain {:.1}, clamping to 0.1-10.0 range",
                self.gesture.scroll_gain
            );
            self.gesture.scroll_gain = self.gesture.scroll_gain.clamp(0.1, 10.0);
        }

        if !(0..=50).contains(&self.gesture.scroll_min_delta) {
            log::warn!(
                "Invalid scroll_min_delta {}, clamping to 0-50 range",
                self.gesture.scroll_min_delta
            );
            self.gesture.scroll_min_delta = self.gesture.scroll_min_delta.clamp(0, 50);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/airmouse/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("airmouse");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at
    /// `~/.config/airmouse/config.toml`. If the file doesn't exist, returns
    /// a Config with default values. All loaded values are validated and
    /// clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's
    /// config directory (used by `airmouse --init-config`).
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }
}
