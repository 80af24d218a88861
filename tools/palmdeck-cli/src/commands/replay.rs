//! Offline classification of a recorded frame stream.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use palmdeck_common::config::AppConfig;
use palmdeck_frame_source::{JsonlSource, ObservationSource};
use palmdeck_gesture_core::{FramePipeline, OutcomeStats};
use palmdeck_hand_model::{Action, FrameOutcome};
use palmdeck_platform_core::resolve_screen_size;

/// Replays frames through the pipeline and prints every outcome.
///
/// The screen size comes from config overrides or the 1920x1080 fallback,
/// never from the attached monitors, so replays are reproducible.
pub fn run(config: &AppConfig, path: PathBuf, json: bool) -> anyhow::Result<()> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open frame stream {}", path.display()))?;
    let mut source = JsonlSource::new(BufReader::new(file), path.display().to_string());

    let (width, height) = resolve_screen_size(&[], config.screen.width, config.screen.height);
    let mut pipeline = FramePipeline::from_config(config, width, height);
    let mut stats = OutcomeStats::default();

    if !json {
        println!("{:>9}  {:<12} {:<6} action", "t", "gesture", "mode");
    }

    while let Some(frame) = source.poll()? {
        let outcome = pipeline.process_frame(&frame);
        stats.record(&outcome);
        if json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            print_row(&outcome);
        }
    }

    if source.malformed_lines() > 0 {
        tracing::warn!(
            lines = source.malformed_lines(),
            "Malformed frame lines were replayed as frames without a hand"
        );
    }
    if !json {
        super::print_summary(&stats, None);
    }
    Ok(())
}

fn print_row(outcome: &FrameOutcome) {
    let action = match outcome.action {
        Action::None => String::new(),
        other => other.to_string(),
    };
    println!(
        "{:>9.3}  {:<12} {:<6} {action}",
        outcome.t,
        outcome.gesture.as_str(),
        outcome.mode.as_str()
    );
}
