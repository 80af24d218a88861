//! In-memory backend that records actions instead of performing them.

use std::sync::{Arc, Mutex};

use palmdeck_common::error::{PalmdeckError, PalmdeckResult};
use palmdeck_hand_model::Action;

use crate::{PointerBackend, SlideBackend};

/// Shared log of recorded actions. Clones see the same log.
pub type ActionLog = Arc<Mutex<Vec<Action>>>;

/// Dry-run backend. Every action is logged at info level and appended to a
/// shared log; nothing touches the desktop.
#[derive(Default)]
pub struct RecordingBackend {
    log: ActionLog,
    fail: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose every call fails. Actions are still recorded.
    pub fn failing() -> Self {
        Self {
            log: ActionLog::default(),
            fail: true,
        }
    }

    /// Handle to the log, usable after the backend has been boxed.
    pub fn log(&self) -> ActionLog {
        self.log.clone()
    }

    pub fn recorded(&self) -> Vec<Action> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Action>> {
        self.log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, action: Action) -> PalmdeckResult<()> {
        self.lock().push(action);
        if self.fail {
            return Err(PalmdeckError::sink(format!("recording backend rejected {action}")));
        }
        if action.is_navigation() {
            tracing::info!(%action, "Dry run");
        } else {
            tracing::trace!(%action, "Dry run");
        }
        Ok(())
    }
}

impl SlideBackend for RecordingBackend {
    fn next_slide(&mut self) -> PalmdeckResult<()> {
        self.record(Action::NavigateNext)
    }

    fn previous_slide(&mut self) -> PalmdeckResult<()> {
        self.record(Action::NavigatePrevious)
    }

    fn name(&self) -> &str {
        "dry-run"
    }

    fn is_available(&self) -> bool {
        true
    }
}

impl PointerBackend for RecordingBackend {
    fn move_pointer_to(&mut self, x: i32, y: i32) -> PalmdeckResult<()> {
        self.record(Action::MovePointerTo { x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SlideDirection;

    #[test]
    fn test_records_in_order() {
        let mut backend = RecordingBackend::new();
        let log = backend.log();
        backend.next_slide().unwrap();
        backend.move_pointer_to(3, 4).unwrap();
        backend.navigate(SlideDirection::Previous).unwrap();

        let expected = vec![
            Action::NavigateNext,
            Action::MovePointerTo { x: 3, y: 4 },
            Action::NavigatePrevious,
        ];
        assert_eq!(backend.recorded(), expected);
        assert_eq!(*log.lock().unwrap(), expected);
    }

    #[test]
    fn test_failing_backend_still_records() {
        let mut backend = RecordingBackend::failing();
        assert!(backend.next_slide().is_err());
        assert_eq!(backend.recorded(), vec![Action::NavigateNext]);
    }
}
