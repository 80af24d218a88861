//! Gesture labels, controller modes, and the actions they produce.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One classification per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    /// No hand is tracked this frame.
    #[default]
    None,
    /// Closed hand: switch to slide mode.
    Fist,
    /// Open hand: switch to laser mode.
    OpenPalm,
    /// Wrist moved left across the swipe window.
    SwipeLeft,
    /// Wrist moved right across the swipe window.
    SwipeRight,
    /// Hand present with no stronger gesture. Drives the laser pointer.
    IndexPoint,
}

impl Gesture {
    /// Stable label used in logs and status output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Fist => "fist",
            Self::OpenPalm => "open_palm",
            Self::SwipeLeft => "swipe_left",
            Self::SwipeRight => "swipe_right",
            Self::IndexPoint => "index_point",
        }
    }

    pub fn is_swipe(&self) -> bool {
        matches!(self, Self::SwipeLeft | Self::SwipeRight)
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operating mode of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ControllerMode {
    /// Swipes navigate between slides.
    #[default]
    Slide,
    /// The index fingertip drives the on-screen pointer.
    Laser,
}

impl ControllerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slide => "slide",
            Self::Laser => "laser",
        }
    }
}

impl fmt::Display for ControllerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// External action emitted by the controller, at most one per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    #[default]
    None,
    NavigatePrevious,
    NavigateNext,
    /// Move the pointer to absolute screen pixels.
    MovePointerTo { x: i32, y: i32 },
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::NavigatePrevious | Self::NavigateNext)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::NavigatePrevious => f.write_str("navigate_previous"),
            Self::NavigateNext => f.write_str("navigate_next"),
            Self::MovePointerTo { x, y } => write!(f, "move_pointer_to({x}, {y})"),
        }
    }
}
