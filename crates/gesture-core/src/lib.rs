//! Palmdeck Gesture Core
//!
//! Turns per-frame hand observations into presentation commands:
//! - **Classifier:** Finger-extension and swipe-window gesture labelling
//! - **Controller:** Slide/laser mode state machine with navigation cooldown
//! - **Laser:** Exponential smoothing of the pointer position
//! - **Pipeline:** Classifier and controller wired together per frame
//!
//! This crate is pure computation with no I/O and no platform dependencies.
//! Every component is deterministic in (state, input, timestamp).

pub mod classifier;
pub mod controller;
pub mod laser;
pub mod pipeline;

pub use classifier::GestureClassifier;
pub use controller::ModeController;
pub use laser::LaserPointer;
pub use pipeline::{FramePipeline, OutcomeStats};
