//! Laser pointer smoothing.
//!
//! Turns the raw index fingertip position into a steady on-screen pointer.
//! Each axis is clamped into `[0, 1]`, inset by the clamp margin so the
//! pointer never reaches the literal screen edge, then run through an
//! exponential moving average:
//!
//! `smoothed = smoothed + (sample - smoothed) * alpha`
//!
//! The first sample seeds the filter directly. A NaN coordinate holds the
//! previous value on that axis.

use palmdeck_common::config::LaserConfig;

/// Stateful pointer filter. One instance per controller.
#[derive(Debug, Clone)]
pub struct LaserPointer {
    config: LaserConfig,
    screen_width: u32,
    screen_height: u32,
    last: Option<(f64, f64)>,
}

impl LaserPointer {
    pub fn new(config: LaserConfig, screen_width: u32, screen_height: u32) -> Self {
        Self {
            config,
            screen_width,
            screen_height,
            last: None,
        }
    }

    /// Feed a fingertip position (normalized frame coordinates) and return
    /// the pointer target in screen pixels.
    pub fn update(&mut self, x: f64, y: f64) -> (i32, i32) {
        let (hold_x, hold_y) = self.last.unwrap_or((0.5, 0.5));
        let x = self.inset(x).unwrap_or(hold_x);
        let y = self.inset(y).unwrap_or(hold_y);

        let alpha = self.config.smoothing_alpha;
        let smoothed = match self.last {
            None => (x, y),
            Some((lx, ly)) => (lx + (x - lx) * alpha, ly + (y - ly) * alpha),
        };
        self.last = Some(smoothed);

        self.to_pixels(smoothed)
    }

    /// Last smoothed position as screen fractions, if seeded.
    pub fn position(&self) -> Option<(f64, f64)> {
        self.last
    }

    pub fn screen_size(&self) -> (u32, u32) {
        (self.screen_width, self.screen_height)
    }

    fn inset(&self, value: f64) -> Option<f64> {
        if value.is_nan() {
            return None;
        }
        let margin = self.config.clamp_margin;
        Some(margin + value.clamp(0.0, 1.0) * (1.0 - 2.0 * margin))
    }

    /// Truncating conversion to pixels.
    fn to_pixels(&self, (x, y): (f64, f64)) -> (i32, i32) {
        (
            (x * self.screen_width as f64) as i32,
            (y * self.screen_height as f64) as i32,
        )
    }
}
