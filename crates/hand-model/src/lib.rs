//! Palmdeck Hand Model
//!
//! Defines the data contracts shared by every Palmdeck crate:
//! - **Landmarks:** Raw per-frame hand skeleton from the external tracker
//! - **Observation:** The compact summary the classifier consumes
//! - **Gesture:** Per-frame labels, controller modes, and emitted actions
//! - **Frame:** Timestamped JSONL frame stream format
//!
//! All positions are normalized to `[0.0, 1.0]` relative to the camera
//! frame, with y growing downward.

pub mod frame;
pub mod gesture;
pub mod landmarks;
pub mod observation;

pub use frame::*;
pub use gesture::*;
pub use landmarks::*;
pub use observation::*;
