//! Compact per-frame hand summary consumed by the gesture classifier.

use serde::{Deserialize, Serialize};

use crate::landmarks::{
    HandLandmarks, Landmark, INDEX_TIP, LANDMARK_COUNT, MIDDLE_TIP, PINKY_TIP, RING_TIP,
    THUMB_TIP, WRIST,
};

/// Wrist and fingertip positions for one frame.
///
/// Absence of a hand is modelled as `Option<HandObservation>::None`, never
/// as a sentinel observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandObservation {
    pub wrist_x: f64,
    pub wrist_y: f64,
    pub index_tip_x: f64,
    pub index_tip_y: f64,
    pub thumb_tip_y: f64,
    pub middle_tip_y: f64,
    pub ring_tip_y: f64,
    pub pinky_tip_y: f64,
}

impl HandObservation {
    /// Summarize a raw landmark list.
    ///
    /// Returns `None` when the list is too short to contain every point we
    /// read, which downstream treats the same as "no hand this frame".
    pub fn from_landmarks(landmarks: &[Landmark]) -> Option<Self> {
        if landmarks.len() < LANDMARK_COUNT {
            return None;
        }
        let wrist = landmarks[WRIST];
        let index_tip = landmarks[INDEX_TIP];
        Some(Self {
            wrist_x: wrist.x,
            wrist_y: wrist.y,
            index_tip_x: index_tip.x,
            index_tip_y: index_tip.y,
            thumb_tip_y: landmarks[THUMB_TIP].y,
            middle_tip_y: landmarks[MIDDLE_TIP].y,
            ring_tip_y: landmarks[RING_TIP].y,
            pinky_tip_y: landmarks[PINKY_TIP].y,
        })
    }

    /// Fingertip y coordinates, thumb through pinky.
    pub fn fingertip_ys(&self) -> [f64; 5] {
        [
            self.thumb_tip_y,
            self.index_tip_y,
            self.middle_tip_y,
            self.ring_tip_y,
            self.pinky_tip_y,
        ]
    }

    /// Number of fingertips above the wrist in image space (smaller y).
    pub fn extended_fingers(&self) -> usize {
        self.fingertip_ys()
            .iter()
            .filter(|&&tip| tip < self.wrist_y)
            .count()
    }

    /// Fraction of fingertips above the wrist, in `[0.0, 1.0]`.
    pub fn finger_ratio(&self) -> f64 {
        self.extended_fingers() as f64 / 5.0
    }

    /// Index fingertip position.
    pub fn index_tip(&self) -> (f64, f64) {
        (self.index_tip_x, self.index_tip_y)
    }
}

impl HandLandmarks {
    /// Normalize into an observation; see [`HandObservation::from_landmarks`].
    pub fn observation(&self) -> Option<HandObservation> {
        HandObservation::from_landmarks(&self.landmarks)
    }
}
