//! Slide/laser mode state machine.
//!
//! Fist and open palm switch modes on the frame they are seen and are never
//! debounced. In slide mode, swipes become navigation commands subject to a
//! cooldown. In laser mode, every other frame with a tracked hand moves the
//! pointer.

use palmdeck_common::config::{ControllerConfig, LaserConfig};
use palmdeck_hand_model::{Action, ControllerMode, Gesture, HandObservation};

use crate::laser::LaserPointer;

/// Cooldown gate for navigation commands.
#[derive(Debug, Clone, Default)]
pub struct Cooldown {
    last_trigger: Option<f64>,
}

impl Cooldown {
    /// Whether a command may fire at `now` under the given cooldown.
    pub fn is_elapsed(&self, now: f64, cooldown_seconds: f64) -> bool {
        match self.last_trigger {
            None => true,
            Some(last) => now - last >= cooldown_seconds,
        }
    }

    pub fn mark(&mut self, now: f64) {
        self.last_trigger = Some(now);
    }

    pub fn last_trigger(&self) -> Option<f64> {
        self.last_trigger
    }
}

/// Mode controller. Starts in slide mode and runs for the life of the
/// session.
#[derive(Debug, Clone)]
pub struct ModeController {
    config: ControllerConfig,
    mode: ControllerMode,
    cooldown: Cooldown,
    laser: LaserPointer,
}

impl ModeController {
    pub fn new(config: ControllerConfig, laser: LaserPointer) -> Self {
        Self {
            config,
            mode: ControllerMode::Slide,
            cooldown: Cooldown::default(),
            laser,
        }
    }

    /// Build a controller with its own laser filter for the given screen.
    pub fn with_screen(
        config: ControllerConfig,
        laser_config: LaserConfig,
        screen_width: u32,
        screen_height: u32,
    ) -> Self {
        Self::new(
            config,
            LaserPointer::new(laser_config, screen_width, screen_height),
        )
    }

    /// Handle one classified frame. `now` is monotonic seconds and must not
    /// decrease between calls.
    pub fn handle(
        &mut self,
        gesture: Gesture,
        observation: Option<&HandObservation>,
        now: f64,
    ) -> Action {
        match gesture {
            Gesture::Fist => {
                self.switch_to(ControllerMode::Slide);
                return Action::None;
            }
            Gesture::OpenPalm => {
                self.switch_to(ControllerMode::Laser);
                return Action::None;
            }
            _ => {}
        }

        match self.mode {
            ControllerMode::Laser => match observation {
                Some(hand) => {
                    let (x, y) = self.laser.update(hand.index_tip_x, hand.index_tip_y);
                    Action::MovePointerTo { x, y }
                }
                None => Action::None,
            },
            ControllerMode::Slide => {
                let action = match gesture {
                    Gesture::SwipeRight => Action::NavigateNext,
                    Gesture::SwipeLeft => Action::NavigatePrevious,
                    _ => return Action::None,
                };
                if !self.cooldown.is_elapsed(now, self.config.cooldown_seconds) {
                    tracing::debug!(
                        gesture = gesture.as_str(),
                        now,
                        last_trigger = ?self.cooldown.last_trigger(),
                        "Swipe suppressed by cooldown"
                    );
                    return Action::None;
                }
                self.cooldown.mark(now);
                tracing::info!(%action, now, "Navigation triggered");
                action
            }
        }
    }

    fn switch_to(&mut self, mode: ControllerMode) {
        if self.mode != mode {
            tracing::debug!(from = self.mode.as_str(), to = mode.as_str(), "Mode switch");
            self.mode = mode;
        }
    }

    pub fn mode(&self) -> ControllerMode {
        self.mode
    }

    pub fn cooldown(&self) -> &Cooldown {
        &self.cooldown
    }

    pub fn laser(&self) -> &LaserPointer {
        &self.laser
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(cooldown_seconds: f64) -> ModeController {
        ModeController::with_screen(
            ControllerConfig { cooldown_seconds },
            LaserConfig::default(),
            1000,
            1000,
        )
    }

    fn pointing(x: f64, y: f64) -> HandObservation {
        HandObservation {
            wrist_x: x,
            wrist_y: 0.9,
            index_tip_x: x,
            index_tip_y: y,
            thumb_tip_y: 0.95,
            middle_tip_y: 0.95,
            ring_tip_y: 0.95,
            pinky_tip_y: 0.95,
        }
    }

    #[test]
    fn test_starts_in_slide_mode() {
        let c = controller(0.5);
        assert_eq!(c.mode(), ControllerMode::Slide);
        assert_eq!(c.cooldown().last_trigger(), None);
    }

    #[test]
    fn test_cooldown_scenario() {
        let mut c = controller(0.5);
        assert_eq!(
            c.handle(Gesture::SwipeLeft, None, 1.0),
            Action::NavigatePrevious
        );
        assert_eq!(c.cooldown().last_trigger(), Some(1.0));
        assert_eq!(c.handle(Gesture::SwipeLeft, None, 1.3), Action::None);
        assert_eq!(c.cooldown().last_trigger(), Some(1.0));
        assert_eq!(
            c.handle(Gesture::SwipeLeft, None, 1.6),
            Action::NavigatePrevious
        );
        assert_eq!(c.cooldown().last_trigger(), Some(1.6));
    }

    #[test]
    fn test_cooldown_boundary_is_inclusive() {
        let mut c = controller(0.5);
        assert_eq!(c.handle(Gesture::SwipeRight, None, 2.0), Action::NavigateNext);
        assert_eq!(c.handle(Gesture::SwipeRight, None, 2.5), Action::NavigateNext);
    }

    #[test]
    fn test_cooldown_epsilon_either_side() {
        let eps = 1e-6;
        let mut c = controller(0.5);
        assert_eq!(c.handle(Gesture::SwipeRight, None, 10.0), Action::NavigateNext);
        assert_eq!(c.handle(Gesture::SwipeRight, None, 10.5 - eps), Action::None);

        let mut c = controller(0.5);
        assert_eq!(c.handle(Gesture::SwipeRight, None, 10.0), Action::NavigateNext);
        assert_eq!(
            c.handle(Gesture::SwipeRight, None, 10.5 + eps),
            Action::NavigateNext
        );
    }

    #[test]
    fn test_mode_switches_ignore_cooldown() {
        let mut c = controller(0.5);
        c.handle(Gesture::SwipeRight, None, 1.0);
        assert_eq!(c.handle(Gesture::OpenPalm, None, 1.01), Action::None);
        assert_eq!(c.mode(), ControllerMode::Laser);
        assert_eq!(c.handle(Gesture::Fist, None, 1.02), Action::None);
        assert_eq!(c.mode(), ControllerMode::Slide);
    }

    #[test]
    fn test_laser_mode_moves_pointer_when_hand_present() {
        let mut c = controller(0.5);
        c.handle(Gesture::OpenPalm, None, 0.0);
        let hand = pointing(0.5, 0.25);
        assert_eq!(
            c.handle(Gesture::IndexPoint, Some(&hand), 0.1),
            Action::MovePointerTo { x: 500, y: 260 }
        );
        assert_eq!(c.handle(Gesture::None, None, 0.2), Action::None);
        assert_eq!(c.mode(), ControllerMode::Laser);
    }

    #[test]
    fn test_swipes_in_laser_mode_move_pointer_not_slides() {
        let mut c = controller(0.5);
        c.handle(Gesture::OpenPalm, None, 0.0);
        let hand = pointing(0.5, 0.5);
        let action = c.handle(Gesture::SwipeRight, Some(&hand), 0.1);
        assert!(matches!(action, Action::MovePointerTo { .. }));
        assert_eq!(c.cooldown().last_trigger(), None);
    }

    #[test]
    fn test_slide_mode_ignores_pointing() {
        let mut c = controller(0.5);
        let hand = pointing(0.5, 0.5);
        assert_eq!(c.handle(Gesture::IndexPoint, Some(&hand), 0.0), Action::None);
        assert_eq!(c.handle(Gesture::None, None, 0.1), Action::None);
        assert!(c.laser().position().is_none());
    }
}
