//! Palmdeck Action Sink
//!
//! Turns controller actions into effects on the desktop: slide navigation
//! in the presentation application and pointer moves for laser mode.
//!
//! Backends:
//! - **Key press:** Simulated keystrokes and pointer moves through `xdotool`
//! - **Platform automation:** Keynote via AppleScript, PowerPoint via COM
//! - **Recording:** In-memory log of actions, for dry runs and tests

pub mod backend;
pub mod dispatcher;

use palmdeck_common::error::PalmdeckResult;

pub use backend::{
    select_backend, KeyPressBackend, PlatformAutomationBackend, RecordingBackend, SlideDirection,
};
pub use dispatcher::{ActionDispatcher, DispatchStats};

/// Slide navigation capability.
pub trait SlideBackend: Send {
    fn next_slide(&mut self) -> PalmdeckResult<()>;

    fn previous_slide(&mut self) -> PalmdeckResult<()>;

    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Whether the backend's tooling is present on this system.
    fn is_available(&self) -> bool;

    fn navigate(&mut self, direction: SlideDirection) -> PalmdeckResult<()> {
        match direction {
            SlideDirection::Next => self.next_slide(),
            SlideDirection::Previous => self.previous_slide(),
        }
    }
}

/// Pointer placement capability, in absolute screen pixels.
pub trait PointerBackend: Send {
    fn move_pointer_to(&mut self, x: i32, y: i32) -> PalmdeckResult<()>;
}

/// A backend that can do both.
pub trait ActionBackend: SlideBackend + PointerBackend {}

impl<T: SlideBackend + PointerBackend> ActionBackend for T {}
