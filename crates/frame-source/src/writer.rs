//! Append-only outcome writer for session logs.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use palmdeck_common::error::{PalmdeckError, PalmdeckResult};
use palmdeck_hand_model::{FrameOutcome, FrameStreamHeader};

/// Writes per-frame outcomes to a JSONL file.
pub struct OutcomeWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    outcomes_written: u64,
}

impl OutcomeWriter {
    /// Create a new outcome writer, writing the header as the first line.
    pub fn new(path: PathBuf, header: FrameStreamHeader) -> PalmdeckResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;

        let mut writer = BufWriter::new(file);

        let header_json = serde_json::to_string(&header)?;
        writeln!(writer, "# {header_json}")
            .map_err(|e| PalmdeckError::sink(format!("Failed to write header: {e}")))?;

        Ok(Self {
            writer,
            path,
            outcomes_written: 0,
        })
    }

    pub fn write_outcome(&mut self, outcome: &FrameOutcome) -> PalmdeckResult<()> {
        let json = serde_json::to_string(outcome)?;
        writeln!(self.writer, "{json}")
            .map_err(|e| PalmdeckError::sink(format!("Failed to write outcome: {e}")))?;
        self.outcomes_written += 1;

        if self.outcomes_written % 1000 == 0 {
            self.flush()?;
        }

        Ok(())
    }

    pub fn flush(&mut self) -> PalmdeckResult<()> {
        self.writer
            .flush()
            .map_err(|e| PalmdeckError::sink(format!("Failed to flush outcomes: {e}")))
    }

    pub fn outcomes_written(&self) -> u64 {
        self.outcomes_written
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Drop for OutcomeWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palmdeck_hand_model::{parse_header_line, Action, ControllerMode, Gesture};

    #[test]
    fn test_outcome_writer_roundtrip() {
        let dir = std::env::temp_dir().join("palmdeck_test_outcome_writer");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let path = dir.join("nested").join("outcomes.jsonl");
        let mut header = FrameStreamHeader::new("2026-01-01T00:00:00Z");
        header.source = Some("replay".to_string());

        let outcomes = [
            FrameOutcome {
                t: 0.0,
                gesture: Gesture::SwipeRight,
                mode: ControllerMode::Slide,
                action: Action::NavigateNext,
            },
            FrameOutcome {
                t: 0.033,
                gesture: Gesture::OpenPalm,
                mode: ControllerMode::Laser,
                action: Action::None,
            },
            FrameOutcome {
                t: 0.066,
                gesture: Gesture::IndexPoint,
                mode: ControllerMode::Laser,
                action: Action::MovePointerTo { x: 960, y: 540 },
            },
        ];

        {
            let mut writer = OutcomeWriter::new(path.clone(), header.clone()).unwrap();
            for outcome in &outcomes {
                writer.write_outcome(outcome).unwrap();
            }
            assert_eq!(writer.outcomes_written(), 3);
        }

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4); // 1 header + 3 outcomes
        assert_eq!(parse_header_line(lines[0]), Some(header));

        let parsed: Vec<FrameOutcome> = lines[1..]
            .iter()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(parsed, outcomes);

        std::fs::remove_dir_all(&dir).ok();
    }
}
