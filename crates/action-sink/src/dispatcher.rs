//! Routes controller actions to a backend.
//!
//! Sink failures are logged and counted; they never stop the frame loop.
//! Pointer moves are rate limited, navigation commands never are (the
//! controller's cooldown already gates them).

use palmdeck_common::clock::RateController;
use palmdeck_common::error::PalmdeckResult;
use palmdeck_hand_model::Action;

use crate::{ActionBackend, SlideDirection};

/// Counters for dispatched actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub navigations: u64,
    pub pointer_moves: u64,
    pub throttled_pointer_moves: u64,
    pub failures: u64,
}

pub struct ActionDispatcher {
    backend: Box<dyn ActionBackend>,
    pointer_rate: RateController,
    pointer_failure_reported: bool,
    stats: DispatchStats,
}

impl ActionDispatcher {
    pub fn new(backend: Box<dyn ActionBackend>, pointer_rate_hz: u32) -> Self {
        Self {
            backend,
            pointer_rate: RateController::new(pointer_rate_hz),
            pointer_failure_reported: false,
            stats: DispatchStats::default(),
        }
    }

    /// Perform `action`. `now` is the frame timestamp in seconds.
    ///
    /// Returns `true` if the backend accepted the action.
    pub fn dispatch(&mut self, action: Action, now: f64) -> bool {
        match action {
            Action::None => false,
            Action::NavigateNext => self.navigate(SlideDirection::Next),
            Action::NavigatePrevious => self.navigate(SlideDirection::Previous),
            Action::MovePointerTo { x, y } => {
                if !self.pointer_rate.should_tick(now) {
                    self.stats.throttled_pointer_moves += 1;
                    return false;
                }
                let result = self.backend.move_pointer_to(x, y);
                self.settle_pointer(result)
            }
        }
    }

    fn navigate(&mut self, direction: SlideDirection) -> bool {
        match self.backend.navigate(direction) {
            Ok(()) => {
                self.stats.navigations += 1;
                true
            }
            Err(e) => {
                self.stats.failures += 1;
                tracing::warn!(
                    backend = self.backend.name(),
                    direction = direction.as_str(),
                    error = %e,
                    "Slide navigation failed"
                );
                false
            }
        }
    }

    fn settle_pointer(&mut self, result: PalmdeckResult<()>) -> bool {
        match result {
            Ok(()) => {
                self.stats.pointer_moves += 1;
                true
            }
            Err(e) => {
                self.stats.failures += 1;
                // Warn once per session.
                if self.pointer_failure_reported {
                    tracing::debug!(error = %e, "Pointer move failed");
                } else {
                    self.pointer_failure_reported = true;
                    tracing::warn!(
                        backend = self.backend.name(),
                        error = %e,
                        "Pointer move failed"
                    );
                }
                false
            }
        }
    }

    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }
}
