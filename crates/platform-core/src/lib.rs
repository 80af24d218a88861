//! Palmdeck platform core.
//!
//! Cross-platform display queries: which display server is running and how
//! large the target screen is. The laser pointer needs the screen size to
//! turn normalized positions into pixels.

pub mod display;

use serde::{Deserialize, Serialize};

pub use display::*;

/// Information about a connected monitor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonitorInfo {
    /// Monitor name/identifier.
    pub name: String,
    /// Resolution in physical pixels.
    pub width: u32,
    pub height: u32,
    /// Position in the virtual desktop (pixels).
    pub x: i32,
    pub y: i32,
    /// Whether this monitor is primary.
    pub primary: bool,
}

impl MonitorInfo {
    /// The monitor assumed when nothing can be queried.
    pub fn fallback() -> Self {
        Self {
            name: "default".to_string(),
            width: 1920,
            height: 1080,
            x: 0,
            y: 0,
            primary: true,
        }
    }
}

/// Display server / platform family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayServer {
    Wayland,
    X11,
    Windows,
    MacOS,
    #[default]
    Unknown,
}

impl DisplayServer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wayland => "wayland",
            Self::X11 => "x11",
            Self::Windows => "windows",
            Self::MacOS => "macos",
            Self::Unknown => "unknown",
        }
    }
}

/// Pick the monitor the pointer should target: the primary one, else the
/// first listed, else the fallback.
pub fn primary_monitor(monitors: &[MonitorInfo]) -> MonitorInfo {
    monitors
        .iter()
        .find(|m| m.primary)
        .or_else(|| monitors.first())
        .cloned()
        .unwrap_or_else(MonitorInfo::fallback)
}

/// Resolve the target screen size, letting explicit overrides win over
/// the detected primary monitor.
pub fn resolve_screen_size(
    monitors: &[MonitorInfo],
    width_override: Option<u32>,
    height_override: Option<u32>,
) -> (u32, u32) {
    let primary = primary_monitor(monitors);
    (
        width_override.unwrap_or(primary.width),
        height_override.unwrap_or(primary.height),
    )
}
