//! Timestamped frame stream format.
//!
//! Frames are exchanged as JSONL: an optional `# {header}` comment line,
//! then one JSON object per camera frame. A frame with `"hand": null` means
//! the tracker lost the hand (or failed) on that frame.

use serde::{Deserialize, Serialize};

use crate::gesture::{Action, ControllerMode, Gesture};
use crate::landmarks::HandLandmarks;
use crate::observation::HandObservation;

/// Monotonic timestamp in seconds.
pub type TimestampSecs = f64;

/// A single camera frame as reported by the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Monotonic seconds. Must not decrease along a stream.
    pub t: TimestampSecs,

    /// Tracked hand, absent when no hand was detected.
    #[serde(default)]
    pub hand: Option<HandLandmarks>,
}

impl FrameRecord {
    pub fn new(t: TimestampSecs, hand: Option<HandLandmarks>) -> Self {
        Self { t, hand }
    }

    /// A frame with no tracked hand.
    pub fn empty(t: TimestampSecs) -> Self {
        Self { t, hand: None }
    }

    /// Normalized observation for this frame, if a complete hand is present.
    pub fn observation(&self) -> Option<HandObservation> {
        self.hand.as_ref().and_then(HandLandmarks::observation)
    }
}

/// Stream-level metadata written as the first (comment) line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameStreamHeader {
    /// Schema version for forward compatibility.
    pub schema_version: String,

    /// Wall-clock time at stream start (RFC 3339).
    pub epoch_wall: String,

    /// Camera frame dimensions in pixels, if known.
    #[serde(default)]
    pub frame_width: Option<u32>,
    #[serde(default)]
    pub frame_height: Option<u32>,

    /// Nominal camera rate (Hz), if known.
    #[serde(default)]
    pub fps: Option<u32>,

    /// Free-form producer name (tracker or tool).
    #[serde(default)]
    pub source: Option<String>,
}

impl FrameStreamHeader {
    pub fn new(epoch_wall: impl Into<String>) -> Self {
        Self {
            schema_version: "1.0".to_string(),
            epoch_wall: epoch_wall.into(),
            frame_width: None,
            frame_height: None,
            fps: None,
            source: None,
        }
    }
}

/// What the pipeline decided for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameOutcome {
    pub t: TimestampSecs,
    pub gesture: Gesture,
    /// Mode after the frame was handled.
    pub mode: ControllerMode,
    pub action: Action,
}

/// Parse frames from JSONL content (one JSON object per line).
///
/// Blank lines and `#` comment lines (including the header) are skipped.
pub fn parse_frames(jsonl: &str) -> Result<Vec<FrameRecord>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Extract the header from a `# {json}` line, if the line is one.
pub fn parse_header_line(line: &str) -> Option<FrameStreamHeader> {
    let body = line.trim().strip_prefix('#')?;
    serde_json::from_str(body.trim()).ok()
}

/// Serialize frames to JSONL format.
pub fn serialize_frames(frames: &[FrameRecord]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for frame in frames {
        output.push_str(&serde_json::to_string(frame)?);
        output.push('\n');
    }
    Ok(output)
}
