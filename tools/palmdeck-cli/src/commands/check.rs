//! Check system capabilities.

use palmdeck_action_sink::select_backend;
use palmdeck_common::config::{config_file_path, AppConfig};
use palmdeck_platform_core::{detect_display_server, detect_monitors, DisplayServer};

pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    println!("Palmdeck System Check");
    println!("{}", "=".repeat(50));

    let path = config_file_path();
    if path.exists() {
        println!("[OK] Config: {}", path.display());
    } else {
        println!("[OK] Config: defaults ({} not found)", path.display());
    }

    let ds = detect_display_server();
    match ds {
        DisplayServer::Unknown => println!("[WARN] Display server: unknown"),
        other => println!("[OK] Display server: {}", other.as_str()),
    }

    let monitors = detect_monitors()?;
    println!("[OK] Monitors detected: {}", monitors.len());
    for m in &monitors {
        println!(
            "     {} {}x{}+{}+{} {}",
            m.name,
            m.width,
            m.height,
            m.x,
            m.y,
            if m.primary { "(primary)" } else { "" }
        );
    }
    let (width, height) = super::screen_size(config);
    println!("[OK] Laser pointer target: {width}x{height}");

    let ready = match select_backend(&config.slides) {
        Ok(backend) if backend.is_available() => {
            println!("[OK] Slide backend: {}", backend.name());
            true
        }
        Ok(backend) => {
            println!(
                "[FAIL] Slide backend: {} (required tool not found on PATH)",
                backend.name()
            );
            false
        }
        Err(e) => {
            println!("[FAIL] Slide backend: {e}");
            false
        }
    };

    println!();
    if ready {
        println!("Palmdeck is ready.");
    } else {
        println!("Slide control is unavailable. Use `palmdeck run --dry-run` to test gestures.");
    }

    Ok(())
}
