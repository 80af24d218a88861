//! Frame clock and pacing utilities.
//!
//! The gesture controller compares timestamps in monotonic seconds. This
//! module provides:
//! - A clock anchored at session start that hands out those seconds
//! - A rate controller for capping how often pointer moves are sent

use std::time::Instant;

/// A session clock that provides monotonic timestamps (seconds, `f64`)
/// relative to a fixed epoch.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// The instant the session started.
    epoch: Instant,

    /// Wall-clock time at epoch (RFC 3339 string).
    epoch_wall: String,
}

impl FrameClock {
    /// Create a new clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
            epoch_wall: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Seconds elapsed since the epoch. Never decreases.
    pub fn now_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// Wall-clock time at session start.
    pub fn epoch_wall(&self) -> &str {
        &self.epoch_wall
    }

    /// The underlying epoch instant.
    pub fn epoch(&self) -> Instant {
        self.epoch
    }
}

/// Frame rate controller.
#[derive(Debug)]
pub struct RateController {
    target_interval_secs: f64,
    last_tick_secs: Option<f64>,
}

impl RateController {
    /// Create a controller targeting the given Hz rate.
    pub fn new(target_hz: u32) -> Self {
        Self {
            target_interval_secs: 1.0 / target_hz.max(1) as f64,
            last_tick_secs: None,
        }
    }

    /// Check if enough time has passed for the next tick.
    /// Returns true and updates internal state if ready.
    /// The first call always returns true.
    pub fn should_tick(&mut self, current_secs: f64) -> bool {
        match self.last_tick_secs {
            None => {
                self.last_tick_secs = Some(current_secs);
                true
            }
            Some(last) if current_secs >= last + self.target_interval_secs => {
                self.last_tick_secs = Some(current_secs);
                true
            }
            _ => false,
        }
    }

    /// Target interval in seconds.
    pub fn interval_secs(&self) -> f64 {
        self.target_interval_secs
    }
}
