pub mod check;
pub mod config;
pub mod replay;
pub mod run;

use palmdeck_action_sink::DispatchStats;
use palmdeck_common::config::AppConfig;
use palmdeck_gesture_core::OutcomeStats;
use palmdeck_platform_core::{detect_monitors, resolve_screen_size};

/// Target screen size: config overrides first, then the primary monitor.
pub fn screen_size(config: &AppConfig) -> (u32, u32) {
    let monitors = match (config.screen.width, config.screen.height) {
        (Some(_), Some(_)) => Vec::new(),
        _ => detect_monitors().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Monitor detection failed, using fallback size");
            Vec::new()
        }),
    };
    resolve_screen_size(&monitors, config.screen.width, config.screen.height)
}

pub fn print_summary(stats: &OutcomeStats, dispatch: Option<&DispatchStats>) {
    println!();
    println!("Session summary");
    println!("{}", "-".repeat(40));
    println!("  Frames:            {}", stats.frames);
    println!("  Frames with hand:  {}", stats.frames_with_hand);
    println!("  Swipes:            {}", stats.swipes);
    println!("  Navigations:       {}", stats.navigations);
    println!("  Suppressed swipes: {}", stats.suppressed_swipes());
    println!("  Pointer moves:     {}", stats.pointer_moves);
    println!("  Mode switches:     {}", stats.mode_switches);
    if let Some(dispatch) = dispatch {
        println!(
            "  Sent to desktop:   {} navigations, {} pointer moves ({} throttled, {} failed)",
            dispatch.navigations,
            dispatch.pointer_moves,
            dispatch.throttled_pointer_moves,
            dispatch.failures
        );
    }
}
