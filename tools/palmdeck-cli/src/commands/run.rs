//! Live loop: frames in, slide commands and pointer moves out.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use palmdeck_action_sink::{select_backend, ActionDispatcher};
use palmdeck_common::clock::FrameClock;
use palmdeck_common::config::{AppConfig, SlideBackendKind};
use palmdeck_frame_source::{open_source, FrameFeeder, OutcomeWriter};
use palmdeck_gesture_core::{FramePipeline, OutcomeStats};
use palmdeck_hand_model::FrameStreamHeader;

/// Frames buffered between the tracker reader and the pipeline.
const FRAME_QUEUE_CAPACITY: usize = 64;

/// How long to wait for the frame reader after Ctrl+C.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

pub async fn run(
    config: AppConfig,
    input: PathBuf,
    dry_run: bool,
    restamp: bool,
    log_outcomes: Option<PathBuf>,
) -> anyhow::Result<()> {
    let (width, height) = super::screen_size(&config);

    let mut slides = config.slides.clone();
    if dry_run {
        slides.backend = SlideBackendKind::DryRun;
    }
    let backend = select_backend(&slides).context("Failed to set up slide backend")?;
    let mut dispatcher = ActionDispatcher::new(backend, slides.pointer_rate_hz);
    let mut pipeline = FramePipeline::from_config(&config, width, height);

    let source = open_source(&input)
        .with_context(|| format!("Failed to open frame stream {}", input.display()))?;
    let clock = FrameClock::start();

    let mut writer = match log_outcomes {
        Some(path) => {
            let mut header = FrameStreamHeader::new(clock.epoch_wall());
            header.source = Some("palmdeck run".to_string());
            Some(
                OutcomeWriter::new(path.clone(), header)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            )
        }
        None => None,
    };

    println!("Palmdeck running");
    println!("  Input: {}", input.display());
    println!("  Backend: {}", dispatcher.backend_name());
    println!("  Screen: {width}x{height}");
    if restamp {
        println!("  Timestamps: on arrival");
    }
    println!();
    println!("Press Ctrl+C to stop...");

    let mut feeder = FrameFeeder::spawn(source, FRAME_QUEUE_CAPACITY);
    let mut stats = OutcomeStats::default();
    let mut last_mode = pipeline.mode();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let interrupted = loop {
        tokio::select! {
            frame = feeder.recv() => {
                let Some(mut frame) = frame else {
                    break false;
                };
                if restamp {
                    frame.t = clock.now_secs();
                }

                let outcome = pipeline.process_frame(&frame);
                stats.record(&outcome);
                if outcome.mode != last_mode {
                    tracing::info!(mode = outcome.mode.as_str(), "Mode changed");
                    last_mode = outcome.mode;
                }
                dispatcher.dispatch(outcome.action, outcome.t);

                if let Some(writer) = writer.as_mut() {
                    writer.write_outcome(&outcome)?;
                }
            }
            _ = &mut ctrl_c => {
                println!();
                println!("Stopping...");
                break true;
            }
        }
    };

    feeder.stop();
    let reader_done = tokio::time::timeout(SHUTDOWN_GRACE, feeder.join()).await.is_ok();

    if let Some(mut writer) = writer.take() {
        writer.flush()?;
        println!(
            "Wrote {} outcomes to {}",
            writer.outcomes_written(),
            writer.path().display()
        );
    }
    super::print_summary(&stats, Some(&dispatcher.stats()));

    if interrupted && !reader_done {
        // The reader is parked in a blocking read on the input stream and
        // would hold up runtime shutdown.
        tracing::debug!("Frame reader still blocked, exiting");
        std::process::exit(0);
    }
    Ok(())
}
