//! Per-frame gesture classification.
//!
//! Static hand shapes (fist, open palm) come from the share of fingertips
//! held above the wrist. Swipes come from a fixed-size window of recent
//! wrist x positions: once the window is full, the travel between its
//! oldest and newest sample is compared against the swipe threshold.
//!
//! Frames must be classified in capture order. The window is cleared when
//! tracking is lost and after every swipe, so a swipe never fires from
//! samples that straddle a gap or were already consumed.

use std::collections::VecDeque;

use palmdeck_common::config::GestureConfig;
use palmdeck_hand_model::{Gesture, HandObservation};

/// Bounded FIFO of recent wrist x coordinates.
#[derive(Debug, Clone)]
pub struct GestureHistory {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl GestureHistory {
    /// Create an empty window. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest once full.
    pub fn push(&mut self, x: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(x);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Newest minus oldest sample, once the window is full.
    pub fn travel(&self) -> Option<f64> {
        if !self.is_full() {
            return None;
        }
        Some(self.samples.back()? - self.samples.front()?)
    }
}

/// Stateful gesture classifier. One instance per tracked stream.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    config: GestureConfig,
    history: GestureHistory,
}

impl GestureClassifier {
    pub fn new(config: GestureConfig) -> Self {
        let history = GestureHistory::new(config.history_size);
        Self { config, history }
    }

    /// Classify one frame.
    ///
    /// Shape checks run before swipe detection, so a held fist or open palm
    /// is never reported as a swipe however far the wrist travels.
    pub fn classify(&mut self, observation: Option<&HandObservation>) -> Gesture {
        let Some(hand) = observation else {
            if !self.history.is_empty() {
                tracing::trace!("Hand lost, clearing swipe window");
            }
            self.history.clear();
            return Gesture::None;
        };

        self.history.push(hand.wrist_x);

        let finger_ratio = hand.finger_ratio();
        if finger_ratio <= self.config.fist_threshold {
            return Gesture::Fist;
        }
        if finger_ratio >= self.config.open_palm_threshold {
            return Gesture::OpenPalm;
        }

        if let Some(delta) = self.history.travel() {
            if delta >= self.config.swipe_threshold {
                tracing::trace!(delta, "Swipe right");
                self.history.clear();
                return Gesture::SwipeRight;
            }
            if delta <= -self.config.swipe_threshold {
                tracing::trace!(delta, "Swipe left");
                self.history.clear();
                return Gesture::SwipeLeft;
            }
        }

        Gesture::IndexPoint
    }

    /// Current swipe window.
    pub fn history(&self) -> &GestureHistory {
        &self.history
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Observation at wrist x with `extended` of five fingertips above the wrist.
    fn hand(wrist_x: f64, extended: usize) -> HandObservation {
        let tip = |i: usize| if i < extended { 0.3 } else { 0.9 };
        HandObservation {
            wrist_x,
            wrist_y: 0.7,
            index_tip_x: wrist_x,
            index_tip_y: tip(1),
            thumb_tip_y: tip(0),
            middle_tip_y: tip(2),
            ring_tip_y: tip(3),
            pinky_tip_y: tip(4),
        }
    }

    fn classifier(history_size: usize) -> GestureClassifier {
        GestureClassifier::new(GestureConfig {
            history_size,
            ..GestureConfig::default()
        })
    }

    #[test]
    fn test_no_hand_is_none() {
        let mut c = GestureClassifier::default();
        for _ in 0..20 {
            assert_eq!(c.classify(None), Gesture::None);
        }
        assert!(c.history().is_empty());
    }

    #[test]
    fn test_fist_and_open_palm_boundaries() {
        let mut c = GestureClassifier::default();
        // 0/5 and 1/5 are at or below the 0.2 fist threshold.
        assert_eq!(c.classify(Some(&hand(0.5, 0))), Gesture::Fist);
        assert_eq!(c.classify(Some(&hand(0.5, 1))), Gesture::Fist);
        // 3/5 sits exactly on the 0.6 open palm threshold.
        assert_eq!(c.classify(Some(&hand(0.5, 3))), Gesture::OpenPalm);
        assert_eq!(c.classify(Some(&hand(0.5, 5))), Gesture::OpenPalm);
        assert_eq!(c.classify(Some(&hand(0.5, 2))), Gesture::IndexPoint);
    }

    #[test]
    fn test_swipe_right_scenario() {
        let mut c = classifier(4);
        let xs = [0.1, 0.2, 0.25, 0.35];
        let gestures: Vec<Gesture> = xs.iter().map(|&x| c.classify(Some(&hand(x, 2)))).collect();
        assert_eq!(
            gestures,
            vec![
                Gesture::IndexPoint,
                Gesture::IndexPoint,
                Gesture::IndexPoint,
                Gesture::SwipeRight
            ]
        );
        assert!(c.history().is_empty());
        assert_eq!(c.classify(Some(&hand(0.1, 2))), Gesture::IndexPoint);
        assert_eq!(c.history().len(), 1);
    }

    #[test]
    fn test_swipe_left_on_exact_threshold() {
        let mut c = classifier(2);
        assert_eq!(c.classify(Some(&hand(0.5, 2))), Gesture::IndexPoint);
        // 0.3 - 0.5 is exactly -0.2 in f64.
        assert_eq!(c.classify(Some(&hand(0.3, 2))), Gesture::SwipeLeft);
    }

    #[test]
    fn test_swipe_needs_full_window() {
        let mut c = classifier(8);
        for x in [0.0, 0.3, 0.6, 0.9] {
            assert_eq!(c.classify(Some(&hand(x, 2))), Gesture::IndexPoint);
        }
    }

    #[test]
    fn test_window_slides_oldest_out() {
        let mut c = classifier(3);
        for x in [0.0, 0.1, 0.15, 0.25] {
            assert_eq!(c.classify(Some(&hand(x, 2))), Gesture::IndexPoint);
        }
        // 0.0 was evicted; the window compares 0.1 -> 0.25 only.
        assert_eq!(c.history().len(), 3);
        assert_eq!(c.classify(Some(&hand(0.29, 2))), Gesture::IndexPoint);
    }

    #[test]
    fn test_tracking_loss_clears_window() {
        let mut c = classifier(3);
        c.classify(Some(&hand(0.1, 2)));
        c.classify(Some(&hand(0.2, 2)));
        assert_eq!(c.classify(None), Gesture::None);
        assert!(c.history().is_empty());
        c.classify(Some(&hand(0.3, 2)));
        c.classify(Some(&hand(0.35, 2)));
        // Only two samples since the gap; no swipe yet.
        assert_eq!(c.history().len(), 2);
    }

    #[test]
    fn test_fist_beats_swipe_but_still_fills_window() {
        let mut c = classifier(2);
        assert_eq!(c.classify(Some(&hand(0.0, 0))), Gesture::Fist);
        assert_eq!(c.classify(Some(&hand(0.9, 0))), Gesture::Fist);
        assert!(c.history().is_full());
        // 0.0 is evicted, so the window compares 0.9 -> 0.95.
        assert_eq!(c.classify(Some(&hand(0.95, 2))), Gesture::IndexPoint);
    }

    #[test]
    fn test_nan_wrist_never_swipes() {
        let mut c = classifier(2);
        c.classify(Some(&hand(f64::NAN, 2)));
        assert_eq!(c.classify(Some(&hand(0.9, 2))), Gesture::IndexPoint);
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let history = GestureHistory::new(0);
        assert_eq!(history.capacity(), 1);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn frame() -> impl Strategy<Value = Option<(f64, usize)>> {
            prop::option::weighted(0.8, (0.0f64..1.0, 0usize..=5))
        }

        proptest! {
            #[test]
            fn history_never_exceeds_capacity(
                size in 1usize..12,
                frames in prop::collection::vec(frame(), 0..200),
            ) {
                let mut c = classifier(size);
                for f in frames {
                    c.classify(f.map(|(x, n)| hand(x, n)).as_ref());
                    prop_assert!(c.history().len() <= size);
                }
            }

            #[test]
            fn held_fist_is_always_fist(xs in prop::collection::vec(-1.0f64..2.0, 1..100)) {
                let mut c = classifier(4);
                for x in xs {
                    prop_assert_eq!(c.classify(Some(&hand(x, 0))), Gesture::Fist);
                }
            }

            #[test]
            fn held_open_palm_is_always_open_palm(xs in prop::collection::vec(-1.0f64..2.0, 1..100)) {
                let mut c = classifier(4);
                for x in xs {
                    prop_assert_eq!(c.classify(Some(&hand(x, 5))), Gesture::OpenPalm);
                }
            }

            #[test]
            fn absence_always_none_and_empty(
                prefix in prop::collection::vec(frame(), 0..50),
                gap in 1usize..20,
            ) {
                let mut c = classifier(5);
                for f in prefix {
                    c.classify(f.map(|(x, n)| hand(x, n)).as_ref());
                }
                for _ in 0..gap {
                    prop_assert_eq!(c.classify(None), Gesture::None);
                    prop_assert!(c.history().is_empty());
                }
            }

            #[test]
            fn no_swipe_immediately_after_swipe(
                xs in prop::collection::vec(0.0f64..1.0, 1..200),
            ) {
                let mut c = classifier(3);
                let mut previous = Gesture::None;
                for x in xs {
                    let g = c.classify(Some(&hand(x, 2)));
                    prop_assert!(!(previous.is_swipe() && g.is_swipe()));
                    previous = g;
                }
            }
        }
    }
}
