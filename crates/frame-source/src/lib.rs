//! Palmdeck Frame Source
//!
//! Delivers hand-landmark frames from an external tracker to the gesture
//! pipeline, strictly in capture order. Uses a pluggable source
//! architecture:
//!
//! - **JSONL:** Frames piped from a tracker process or read from a recording
//! - **Stub:** Preloaded frames for tests and demos
//!
//! Tracker failures never reach the pipeline as errors: a frame that cannot
//! be read becomes a frame with no hand.

pub mod sources;
pub mod writer;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use palmdeck_common::error::PalmdeckResult;
use palmdeck_hand_model::FrameRecord;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub use sources::{open_source, JsonlSource, StubSource};
pub use writer::OutcomeWriter;

/// Trait for frame sources.
pub trait ObservationSource: Send {
    /// Block until the next frame is available. Returns `None` once the
    /// stream has ended.
    fn poll(&mut self) -> PalmdeckResult<Option<FrameRecord>>;

    /// Source name for logging.
    fn name(&self) -> &str;
}

/// Runs a source on a blocking task and hands its frames over a bounded
/// FIFO channel.
///
/// There is exactly one producer and one consumer, so frames arrive in the
/// order the source produced them. A full channel blocks the producer
/// rather than dropping frames.
pub struct FrameFeeder {
    rx: mpsc::Receiver<FrameRecord>,
    handle: JoinHandle<u64>,
    stop_flag: Arc<AtomicBool>,
}

impl FrameFeeder {
    /// Spawn the producer. Must be called from within a tokio runtime.
    pub fn spawn(mut source: Box<dyn ObservationSource>, capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let stop_flag = Arc::new(AtomicBool::new(false));
        let flag = stop_flag.clone();

        let handle = tokio::task::spawn_blocking(move || {
            tracing::info!(source = %source.name(), "Frame source started");
            let mut frames_sent = 0u64;

            while !flag.load(Ordering::Relaxed) {
                match source.poll() {
                    Ok(Some(frame)) => {
                        if tx.blocking_send(frame).is_err() {
                            tracing::debug!("Frame consumer went away");
                            break;
                        }
                        frames_sent += 1;
                    }
                    Ok(None) => break,
                    Err(e) => {
                        tracing::warn!(error = %e, "Frame source failed, ending stream");
                        break;
                    }
                }
            }

            tracing::info!(frames = frames_sent, "Frame source stopped");
            frames_sent
        });

        Self {
            rx,
            handle,
            stop_flag,
        }
    }

    /// Next frame in capture order, or `None` once the source has ended.
    pub async fn recv(&mut self) -> Option<FrameRecord> {
        self.rx.recv().await
    }

    /// Ask the producer to stop after its current poll.
    pub fn stop(&self) {
        self.stop_flag.store(true, Ordering::SeqCst);
    }

    /// Stop flag for external coordination.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    /// Wait for the producer to finish and return how many frames it sent.
    pub async fn join(self) -> u64 {
        let Self { rx, handle, .. } = self;
        // Unblock a producer waiting on a full channel.
        drop(rx);
        match handle.await {
            Ok(sent) => sent,
            Err(e) => {
                tracing::warn!(error = %e, "Frame source task failed");
                0
            }
        }
    }
}
