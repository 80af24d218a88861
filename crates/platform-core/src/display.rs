//! Display server and monitor detection.

use std::process::Command;

use palmdeck_common::error::{PalmdeckError, PalmdeckResult};

use crate::{DisplayServer, MonitorInfo};

/// Detect the current display server.
pub fn detect_display_server() -> DisplayServer {
    if cfg!(target_os = "windows") {
        DisplayServer::Windows
    } else if cfg!(target_os = "macos") {
        DisplayServer::MacOS
    } else if std::env::var("WAYLAND_DISPLAY").is_ok() {
        DisplayServer::Wayland
    } else if std::env::var("DISPLAY").is_ok() {
        DisplayServer::X11
    } else {
        DisplayServer::Unknown
    }
}

/// Detect connected monitors.
///
/// Queries `xrandr` where an X server (or XWayland) is reachable. Anything
/// else yields a single 1920x1080 primary monitor so the pointer path always
/// has a target.
pub fn detect_monitors() -> PalmdeckResult<Vec<MonitorInfo>> {
    tracing::debug!("Detecting monitors");

    match detect_display_server() {
        DisplayServer::X11 | DisplayServer::Wayland => match query_xrandr() {
            Ok(monitors) if !monitors.is_empty() => return Ok(monitors),
            Ok(_) => tracing::warn!("xrandr reported no connected monitors"),
            Err(e) => tracing::warn!(error = %e, "Monitor query failed, using default"),
        },
        other => {
            tracing::debug!(display_server = other.as_str(), "No monitor query for platform");
        }
    }
    Ok(vec![MonitorInfo::fallback()])
}

fn query_xrandr() -> PalmdeckResult<Vec<MonitorInfo>> {
    let output = Command::new("xrandr")
        .arg("--query")
        .output()
        .map_err(|e| PalmdeckError::platform(format!("Failed to execute xrandr: {e}")))?;
    if !output.status.success() {
        return Err(PalmdeckError::platform(format!(
            "xrandr exited with {}",
            output.status
        )));
    }
    Ok(parse_xrandr(&String::from_utf8_lossy(&output.stdout)))
}

/// Parse the `connected` lines of `xrandr --query` output.
///
/// Example line: `DP-1 connected primary 2560x1440+1920+0 (normal ...) 597mm x 336mm`.
/// Connected outputs without an active mode are skipped.
pub fn parse_xrandr(output: &str) -> Vec<MonitorInfo> {
    output
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            let name = tokens.next()?;
            if tokens.next()? != "connected" {
                return None;
            }
            let rest: Vec<&str> = tokens.collect();
            let primary = rest.first() == Some(&"primary");
            let geometry = rest.iter().find_map(|token| parse_geometry(token))?;
            Some(MonitorInfo {
                name: name.to_string(),
                width: geometry.0,
                height: geometry.1,
                x: geometry.2,
                y: geometry.3,
                primary,
            })
        })
        .collect()
}

/// Parse `WxH+X+Y`.
fn parse_geometry(token: &str) -> Option<(u32, u32, i32, i32)> {
    let (size, offsets) = token.split_once('+')?;
    let (w, h) = size.split_once('x')?;
    let (x, y) = offsets.split_once('+')?;
    Some((w.parse().ok()?, h.parse().ok()?, x.parse().ok()?, y.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Screen 0: minimum 8 x 8, current 4480 x 1440, maximum 32767 x 32767
eDP-1 connected 1920x1080+0+360 (normal left inverted right x axis y axis) 309mm x 174mm
   1920x1080     60.02*+
DP-1 connected primary 2560x1440+1920+0 (normal left inverted right x axis y axis) 597mm x 336mm
   2560x1440     59.95*+
HDMI-1 disconnected (normal left inverted right x axis y axis)
DP-2 connected (normal left inverted right x axis y axis)
";

    #[test]
    fn test_parse_xrandr_connected_outputs() {
        let monitors = parse_xrandr(SAMPLE);
        assert_eq!(monitors.len(), 2);

        assert_eq!(monitors[0].name, "eDP-1");
        assert_eq!((monitors[0].width, monitors[0].height), (1920, 1080));
        assert_eq!((monitors[0].x, monitors[0].y), (0, 360));
        assert!(!monitors[0].primary);

        assert_eq!(monitors[1].name, "DP-1");
        assert_eq!((monitors[1].width, monitors[1].height), (2560, 1440));
        assert_eq!(monitors[1].x, 1920);
        assert!(monitors[1].primary);
    }

    #[test]
    fn test_parse_geometry_rejects_garbage() {
        assert_eq!(parse_geometry("1920x1080+0+0"), Some((1920, 1080, 0, 0)));
        assert_eq!(parse_geometry("(normal"), None);
        assert_eq!(parse_geometry("axbxc+1+2"), None);
    }

    #[test]
    fn test_detect_monitors_never_empty() {
        let monitors = detect_monitors().unwrap();
        assert!(!monitors.is_empty());
    }
}
