//! Backend implementations and platform selection.

pub mod automation;
pub mod keypress;
pub mod recording;

use std::process::Command;

use palmdeck_common::config::{SlideBackendConfig, SlideBackendKind};
use palmdeck_common::error::{PalmdeckError, PalmdeckResult};

use crate::ActionBackend;

pub use automation::PlatformAutomationBackend;
pub use keypress::KeyPressBackend;
pub use recording::RecordingBackend;

/// Direction of a slide navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideDirection {
    Next,
    Previous,
}

impl SlideDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
        }
    }
}

/// Build the backend named by config, resolving `Auto` for this platform.
pub fn select_backend(config: &SlideBackendConfig) -> PalmdeckResult<Box<dyn ActionBackend>> {
    let kind = match config.backend {
        SlideBackendKind::Auto => auto_kind(),
        other => other,
    };

    let backend: Box<dyn ActionBackend> = match kind {
        SlideBackendKind::KeyPress => Box::new(KeyPressBackend::new(
            config.next_key.clone(),
            config.previous_key.clone(),
        )),
        SlideBackendKind::PlatformAutomation => Box::new(
            PlatformAutomationBackend::for_current_platform(config.application.clone())?,
        ),
        SlideBackendKind::DryRun => Box::new(RecordingBackend::new()),
        SlideBackendKind::Auto => {
            return Err(PalmdeckError::unsupported(
                "no slide backend for this platform",
            ))
        }
    };

    if backend.is_available() {
        tracing::info!(backend = backend.name(), "Slide backend selected");
    } else {
        tracing::warn!(
            backend = backend.name(),
            "Slide backend selected but its tooling was not found"
        );
    }
    Ok(backend)
}

fn auto_kind() -> SlideBackendKind {
    #[cfg(any(target_os = "macos", target_os = "windows"))]
    {
        SlideBackendKind::PlatformAutomation
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        SlideBackendKind::KeyPress
    }
}

/// Run an external helper, mapping spawn failures and non-zero exits to
/// sink errors.
pub(crate) fn run_command(command: &mut Command) -> PalmdeckResult<()> {
    let program = command.get_program().to_string_lossy().into_owned();
    let output = command
        .output()
        .map_err(|e| PalmdeckError::sink(format!("Failed to execute {program}: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PalmdeckError::sink(format!(
            "{program} exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}

/// Whether a binary is on `PATH`.
pub(crate) fn command_exists(binary: &str) -> bool {
    let lookup = if cfg!(target_os = "windows") {
        "where"
    } else {
        "which"
    };
    Command::new(lookup)
        .arg(binary)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
