//! Per-frame pipeline: normalize, classify, control.

use palmdeck_common::config::AppConfig;
use palmdeck_hand_model::{
    Action, ControllerMode, FrameOutcome, FrameRecord, Gesture, HandObservation,
};

use crate::classifier::GestureClassifier;
use crate::controller::ModeController;

/// Classifier and controller wired in sequence.
///
/// Frames must be fed in capture order with non-decreasing timestamps.
#[derive(Debug, Clone)]
pub struct FramePipeline {
    classifier: GestureClassifier,
    controller: ModeController,
    frames_processed: u64,
}

impl FramePipeline {
    pub fn new(classifier: GestureClassifier, controller: ModeController) -> Self {
        Self {
            classifier,
            controller,
            frames_processed: 0,
        }
    }

    /// Build both stages from application config and a target screen size.
    pub fn from_config(config: &AppConfig, screen_width: u32, screen_height: u32) -> Self {
        Self::new(
            GestureClassifier::new(config.gesture.clone()),
            ModeController::with_screen(
                config.controller.clone(),
                config.laser.clone(),
                screen_width,
                screen_height,
            ),
        )
    }

    /// Process an already normalized observation.
    pub fn process(&mut self, observation: Option<&HandObservation>, now: f64) -> FrameOutcome {
        let gesture = self.classifier.classify(observation);
        let action = self.controller.handle(gesture, observation, now);
        self.frames_processed += 1;

        let outcome = FrameOutcome {
            t: now,
            gesture,
            mode: self.controller.mode(),
            action,
        };
        tracing::trace!(
            t = now,
            gesture = gesture.as_str(),
            mode = outcome.mode.as_str(),
            %action,
            "Frame processed"
        );
        outcome
    }

    /// Process a raw frame record, normalizing its landmarks first.
    pub fn process_frame(&mut self, frame: &FrameRecord) -> FrameOutcome {
        let observation = frame.observation();
        self.process(observation.as_ref(), frame.t)
    }

    pub fn mode(&self) -> ControllerMode {
        self.controller.mode()
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    pub fn controller(&self) -> &ModeController {
        &self.controller
    }
}

/// Running tally of pipeline outcomes, for status output and summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeStats {
    pub frames: u64,
    pub frames_with_hand: u64,
    pub swipes: u64,
    pub navigations: u64,
    pub pointer_moves: u64,
    pub mode_switches: u64,
    last_mode: Option<ControllerMode>,
}

impl OutcomeStats {
    pub fn record(&mut self, outcome: &FrameOutcome) {
        self.frames += 1;
        if outcome.gesture != Gesture::None {
            self.frames_with_hand += 1;
        }
        if outcome.gesture.is_swipe() {
            self.swipes += 1;
        }
        if outcome.action.is_navigation() {
            self.navigations += 1;
        }
        if matches!(outcome.action, Action::MovePointerTo { .. }) {
            self.pointer_moves += 1;
        }
        if let Some(last) = self.last_mode {
            if last != outcome.mode {
                self.mode_switches += 1;
            }
        }
        self.last_mode = Some(outcome.mode);
    }

    /// Swipes that were recognized but suppressed (cooldown or laser mode).
    pub fn suppressed_swipes(&self) -> u64 {
        self.swipes.saturating_sub(self.navigations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(wrist_x: f64, extended: usize) -> HandObservation {
        let tip = |i: usize| if i < extended { 0.2 } else { 0.95 };
        HandObservation {
            wrist_x,
            wrist_y: 0.8,
            index_tip_x: wrist_x,
            index_tip_y: tip(1),
            thumb_tip_y: tip(0),
            middle_tip_y: tip(2),
            ring_tip_y: tip(3),
            pinky_tip_y: tip(4),
        }
    }

    #[test]
    fn test_swipe_navigates_in_slide_mode() {
        let mut config = AppConfig::default();
        config.gesture.history_size = 4;
        let mut pipeline = FramePipeline::from_config(&config, 1920, 1080);

        let mut actions = Vec::new();
        for (i, x) in [0.1, 0.2, 0.25, 0.35].into_iter().enumerate() {
            let outcome = pipeline.process(Some(&hand(x, 2)), i as f64 * 0.033);
            actions.push(outcome.action);
        }
        assert_eq!(
            actions,
            vec![Action::None, Action::None, Action::None, Action::NavigateNext]
        );
        assert_eq!(pipeline.frames_processed(), 4);
    }

    #[test]
    fn test_open_palm_then_point_moves_pointer() {
        let mut pipeline = FramePipeline::from_config(&AppConfig::default(), 1000, 1000);
        let palm = pipeline.process(Some(&hand(0.5, 5)), 0.0);
        assert_eq!(palm.gesture, Gesture::OpenPalm);
        assert_eq!(palm.mode, ControllerMode::Laser);
        assert_eq!(palm.action, Action::None);

        let point = pipeline.process(Some(&hand(0.5, 2)), 0.033);
        assert_eq!(point.gesture, Gesture::IndexPoint);
        assert!(matches!(point.action, Action::MovePointerTo { x: 500, .. }));
    }

    #[test]
    fn test_stats_tally() {
        let mut stats = OutcomeStats::default();
        let outcomes = [
            FrameOutcome {
                t: 0.0,
                gesture: Gesture::None,
                mode: ControllerMode::Slide,
                action: Action::None,
            },
            FrameOutcome {
                t: 0.1,
                gesture: Gesture::SwipeRight,
                mode: ControllerMode::Slide,
                action: Action::NavigateNext,
            },
            FrameOutcome {
                t: 0.2,
                gesture: Gesture::SwipeRight,
                mode: ControllerMode::Slide,
                action: Action::None,
            },
            FrameOutcome {
                t: 0.3,
                gesture: Gesture::OpenPalm,
                mode: ControllerMode::Laser,
                action: Action::None,
            },
            FrameOutcome {
                t: 0.4,
                gesture: Gesture::IndexPoint,
                mode: ControllerMode::Laser,
                action: Action::MovePointerTo { x: 1, y: 2 },
            },
        ];
        for outcome in &outcomes {
            stats.record(outcome);
        }
        assert_eq!(stats.frames, 5);
        assert_eq!(stats.frames_with_hand, 4);
        assert_eq!(stats.swipes, 2);
        assert_eq!(stats.navigations, 1);
        assert_eq!(stats.suppressed_swipes(), 1);
        assert_eq!(stats.pointer_moves, 1);
        assert_eq!(stats.mode_switches, 1);
    }
}
