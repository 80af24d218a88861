//! Presentation application automation.
//!
//! - **macOS:** AppleScript through `osascript`, default application Keynote
//! - **Windows:** PowerPoint COM through PowerShell, starting the slide show
//!   of the active presentation when none is running

use std::process::Command;

use palmdeck_common::error::{PalmdeckError, PalmdeckResult};

use super::{command_exists, run_command, SlideDirection};
use crate::{PointerBackend, SlideBackend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomationTarget {
    AppleScript,
    PowerShellCom,
}

impl AutomationTarget {
    fn program(&self) -> &'static str {
        match self {
            Self::AppleScript => "osascript",
            Self::PowerShellCom => "powershell",
        }
    }

    fn default_application(&self) -> &'static str {
        match self {
            Self::AppleScript => "Keynote",
            Self::PowerShellCom => "PowerPoint.Application",
        }
    }
}

pub struct PlatformAutomationBackend {
    target: AutomationTarget,
    application: String,
}

impl PlatformAutomationBackend {
    pub fn new(target: AutomationTarget, application: Option<String>) -> Self {
        let application =
            application.unwrap_or_else(|| target.default_application().to_string());
        Self {
            target,
            application,
        }
    }

    /// Backend for the platform this binary was built for.
    pub fn for_current_platform(application: Option<String>) -> PalmdeckResult<Self> {
        #[cfg(target_os = "macos")]
        {
            Ok(Self::new(AutomationTarget::AppleScript, application))
        }
        #[cfg(target_os = "windows")]
        {
            Ok(Self::new(AutomationTarget::PowerShellCom, application))
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            let _ = application;
            Err(PalmdeckError::unsupported(
                "presentation automation is only available on macOS and Windows",
            ))
        }
    }

    pub fn application(&self) -> &str {
        &self.application
    }

    pub fn target(&self) -> AutomationTarget {
        self.target
    }

    fn run(&self, script: String) -> PalmdeckResult<()> {
        let mut command = Command::new(self.target.program());
        match self.target {
            AutomationTarget::AppleScript => command.args(["-e", script.as_str()]),
            AutomationTarget::PowerShellCom => {
                command.args(["-NoProfile", "-NonInteractive", "-Command", script.as_str()])
            }
        };
        run_command(&mut command)
    }

    fn slide_script(&self, direction: SlideDirection) -> String {
        match self.target {
            AutomationTarget::AppleScript => apple_script(&self.application, direction),
            AutomationTarget::PowerShellCom => powershell_script(&self.application, direction),
        }
    }
}

fn apple_script(application: &str, direction: SlideDirection) -> String {
    format!(
        "tell application \"{application}\"\n    activate\n    if (count of documents) > 0 then\n        tell slideshow 1 to show {}\n    end if\nend tell",
        direction.as_str()
    )
}

fn powershell_script(prog_id: &str, direction: SlideDirection) -> String {
    let method = match direction {
        SlideDirection::Next => "Next",
        SlideDirection::Previous => "Previous",
    };
    format!(
        "$app = New-Object -ComObject '{prog_id}'; \
         if ($app.SlideShowWindows.Count -eq 0) {{ $app.ActivePresentation.SlideShowSettings.Run() | Out-Null }}; \
         $app.SlideShowWindows(1).View.{method}()"
    )
}

fn cursor_script(x: i32, y: i32) -> String {
    format!(
        "Add-Type -AssemblyName System.Windows.Forms; \
         [System.Windows.Forms.Cursor]::Position = New-Object System.Drawing.Point({x}, {y})"
    )
}

impl SlideBackend for PlatformAutomationBackend {
    fn next_slide(&mut self) -> PalmdeckResult<()> {
        self.run(self.slide_script(SlideDirection::Next))
    }

    fn previous_slide(&mut self) -> PalmdeckResult<()> {
        self.run(self.slide_script(SlideDirection::Previous))
    }

    fn name(&self) -> &str {
        match self.target {
            AutomationTarget::AppleScript => "applescript",
            AutomationTarget::PowerShellCom => "powerpoint-com",
        }
    }

    fn is_available(&self) -> bool {
        command_exists(self.target.program())
    }
}

impl PointerBackend for PlatformAutomationBackend {
    fn move_pointer_to(&mut self, x: i32, y: i32) -> PalmdeckResult<()> {
        match self.target {
            AutomationTarget::PowerShellCom => self.run(cursor_script(x, y)),
            AutomationTarget::AppleScript => Err(PalmdeckError::unsupported(
                "pointer moves are not available through AppleScript",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_applications() {
        let mac = PlatformAutomationBackend::new(AutomationTarget::AppleScript, None);
        assert_eq!(mac.application(), "Keynote");
        assert_eq!(mac.name(), "applescript");

        let win = PlatformAutomationBackend::new(AutomationTarget::PowerShellCom, None);
        assert_eq!(win.application(), "PowerPoint.Application");

        let custom = PlatformAutomationBackend::new(
            AutomationTarget::AppleScript,
            Some("Microsoft PowerPoint".to_string()),
        );
        assert_eq!(custom.application(), "Microsoft PowerPoint");
    }

    #[test]
    fn test_apple_script_commands() {
        let next = apple_script("Keynote", SlideDirection::Next);
        assert!(next.starts_with("tell application \"Keynote\""));
        assert!(next.contains("tell slideshow 1 to show next"));
        assert!(apple_script("Keynote", SlideDirection::Previous).contains("show previous"));
    }

    #[test]
    fn test_powershell_commands() {
        let next = powershell_script("PowerPoint.Application", SlideDirection::Next);
        assert!(next.contains("New-Object -ComObject 'PowerPoint.Application'"));
        assert!(next.ends_with("SlideShowWindows(1).View.Next()"));
        let prev = powershell_script("PowerPoint.Application", SlideDirection::Previous);
        assert!(prev.ends_with("View.Previous()"));
        assert!(cursor_script(10, 20).contains("Point(10, 20)"));
    }

    #[test]
    fn test_applescript_has_no_pointer() {
        let mut mac = PlatformAutomationBackend::new(AutomationTarget::AppleScript, None);
        assert!(matches!(
            mac.move_pointer_to(1, 1),
            Err(PalmdeckError::Unsupported { .. })
        ));
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    #[test]
    fn test_unsupported_elsewhere() {
        assert!(PlatformAutomationBackend::for_current_platform(None).is_err());
    }
}
