//! Application configuration.
//!
//! Every section deserializes with `#[serde(default)]`, so a config file only
//! needs to mention the values it overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PalmdeckError, PalmdeckResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Gesture classifier thresholds.
    pub gesture: GestureConfig,

    /// Mode controller settings.
    pub controller: ControllerConfig,

    /// Laser pointer filter settings.
    pub laser: LaserConfig,

    /// Target screen dimensions (overrides the display query).
    pub screen: ScreenConfig,

    /// Slide navigation backend selection.
    pub slides: SlideBackendConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Gesture classifier thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Number of wrist samples in the swipe window.
    pub history_size: usize,

    /// Horizontal travel (fraction of frame width) needed across the window.
    pub swipe_threshold: f64,

    /// Extended-finger ratio at or below which the hand is a fist.
    pub fist_threshold: f64,

    /// Extended-finger ratio at or above which the hand is an open palm.
    pub open_palm_threshold: f64,
}

/// Mode controller settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Minimum seconds between two accepted navigation commands.
    pub cooldown_seconds: f64,
}

/// Laser pointer filter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaserConfig {
    /// Exponential smoothing factor in (0, 1]. 1.0 disables smoothing.
    pub smoothing_alpha: f64,

    /// Inset kept between the pointer and each screen edge, as a fraction.
    pub clamp_margin: f64,
}

/// Optional screen size override, in pixels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Which slide navigation backend to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SlideBackendKind {
    /// Pick by platform detection at startup.
    #[default]
    Auto,
    /// Simulated key presses.
    KeyPress,
    /// Presentation application automation (AppleScript / COM).
    PlatformAutomation,
    /// Log actions without touching the desktop.
    DryRun,
}

/// Slide navigation backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideBackendConfig {
    pub backend: SlideBackendKind,

    /// Key name sent for "next slide" by the key-press backend.
    pub next_key: String,

    /// Key name sent for "previous slide" by the key-press backend.
    pub previous_key: String,

    /// Application driven by the automation backend. `None` picks the
    /// platform default (Keynote on macOS, PowerPoint on Windows).
    pub application: Option<String>,

    /// Upper bound on pointer moves sent per second in laser mode.
    pub pointer_rate_hz: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "palmdeck=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            history_size: 8,
            swipe_threshold: 0.2,
            fist_threshold: 0.2,
            open_palm_threshold: 0.6,
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            cooldown_seconds: 0.5,
        }
    }
}

impl Default for LaserConfig {
    fn default() -> Self {
        Self {
            smoothing_alpha: 0.35,
            clamp_margin: 0.02,
        }
    }
}

impl Default for SlideBackendConfig {
    fn default() -> Self {
        Self {
            backend: SlideBackendKind::Auto,
            next_key: "Right".to_string(),
            previous_key: "Left".to_string(),
            application: None,
            pointer_rate_hz: 60,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load and validate config from an explicit path.
    pub fn load_from(path: &Path) -> PalmdeckResult<Self> {
        if !path.exists() {
            return Err(PalmdeckError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<PathBuf, std::io::Error> {
        let config_path = config_file_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Reject values the classifier, controller, or laser filter cannot use.
    pub fn validate(&self) -> PalmdeckResult<()> {
        let g = &self.gesture;
        if g.history_size == 0 {
            return Err(PalmdeckError::config("gesture.history_size must be at least 1"));
        }
        for (name, value) in [
            ("gesture.swipe_threshold", g.swipe_threshold),
            ("gesture.fist_threshold", g.fist_threshold),
            ("gesture.open_palm_threshold", g.open_palm_threshold),
            ("controller.cooldown_seconds", self.controller.cooldown_seconds),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PalmdeckError::config(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        if g.fist_threshold > g.open_palm_threshold {
            return Err(PalmdeckError::config(format!(
                "gesture.fist_threshold ({}) exceeds gesture.open_palm_threshold ({})",
                g.fist_threshold, g.open_palm_threshold
            )));
        }

        let alpha = self.laser.smoothing_alpha;
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(PalmdeckError::config(format!(
                "laser.smoothing_alpha must be in (0, 1], got {alpha}"
            )));
        }
        let margin = self.laser.clamp_margin;
        if !(0.0..0.5).contains(&margin) {
            return Err(PalmdeckError::config(format!(
                "laser.clamp_margin must be in [0, 0.5), got {margin}"
            )));
        }

        if self.slides.pointer_rate_hz == 0 {
            return Err(PalmdeckError::config("slides.pointer_rate_hz must be at least 1"));
        }

        if self.screen.width == Some(0) || self.screen.height == Some(0) {
            return Err(PalmdeckError::config("screen dimensions must be non-zero"));
        }
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("palmdeck").join("config.json")
}
