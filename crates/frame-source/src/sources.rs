//! Frame source implementations.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use palmdeck_common::error::{PalmdeckError, PalmdeckResult};
use palmdeck_hand_model::{parse_header_line, FrameRecord, FrameStreamHeader, TimestampSecs};

use crate::ObservationSource;

/// Reads JSONL frames from any buffered reader: a tracker's stdout, a pipe,
/// or a recorded session file.
///
/// A line that fails to parse becomes a no-hand frame stamped with the last
/// good timestamp, so a tracker hiccup reads as "hand lost" instead of
/// ending the session. Timestamps that go backwards are held at the last
/// good value.
pub struct JsonlSource<R> {
    reader: R,
    name: String,
    header: Option<FrameStreamHeader>,
    last_t: TimestampSecs,
    line: String,
    line_number: u64,
    malformed: u64,
}

impl<R: BufRead + Send> JsonlSource<R> {
    pub fn new(reader: R, name: impl Into<String>) -> Self {
        Self {
            reader,
            name: name.into(),
            header: None,
            last_t: 0.0,
            line: String::new(),
            line_number: 0,
            malformed: 0,
        }
    }

    /// Stream header, once the header line has been read.
    pub fn header(&self) -> Option<&FrameStreamHeader> {
        self.header.as_ref()
    }

    /// Number of lines that could not be parsed.
    pub fn malformed_lines(&self) -> u64 {
        self.malformed
    }

    fn parse_line(&mut self, line: &str) -> FrameRecord {
        match serde_json::from_str::<FrameRecord>(line) {
            Ok(mut frame) if frame.t.is_finite() => {
                if frame.t < self.last_t {
                    tracing::warn!(
                        line = self.line_number,
                        t = frame.t,
                        last_t = self.last_t,
                        "Frame timestamp went backwards, holding previous"
                    );
                    frame.t = self.last_t;
                }
                self.last_t = frame.t;
                frame
            }
            Ok(_) => {
                self.malformed += 1;
                tracing::warn!(line = self.line_number, "Frame has non-finite timestamp");
                FrameRecord::empty(self.last_t)
            }
            Err(e) => {
                self.malformed += 1;
                tracing::warn!(line = self.line_number, error = %e, "Malformed frame line");
                FrameRecord::empty(self.last_t)
            }
        }
    }
}

impl<R: BufRead + Send> ObservationSource for JsonlSource<R> {
    fn poll(&mut self) -> PalmdeckResult<Option<FrameRecord>> {
        loop {
            self.line.clear();
            let read = self
                .reader
                .read_line(&mut self.line)
                .map_err(|e| PalmdeckError::source(format!("Failed to read frame: {e}")))?;
            if read == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = self.line.trim().to_string();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('#') {
                if self.header.is_none() {
                    if let Some(header) = parse_header_line(&line) {
                        tracing::debug!(
                            schema_version = %header.schema_version,
                            source = ?header.source,
                            "Frame stream header"
                        );
                        self.header = Some(header);
                    }
                }
                continue;
            }

            return Ok(Some(self.parse_line(&line)));
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Open a JSONL source from a file path, or standard input for `-`.
pub fn open_source(path: &Path) -> PalmdeckResult<Box<dyn ObservationSource>> {
    if path.as_os_str() == "-" {
        let stdin = BufReader::new(std::io::stdin());
        return Ok(Box::new(JsonlSource::new(stdin, "stdin")));
    }

    if !path.exists() {
        return Err(PalmdeckError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    Ok(Box::new(JsonlSource::new(
        BufReader::new(file),
        path.display().to_string(),
    )))
}

/// Source that replays preloaded frames. Used for tests and demos.
pub struct StubSource {
    frames: VecDeque<FrameRecord>,
}

impl StubSource {
    pub fn new(frames: Vec<FrameRecord>) -> Self {
        Self {
            frames: frames.into(),
        }
    }
}

impl ObservationSource for StubSource {
    fn poll(&mut self) -> PalmdeckResult<Option<FrameRecord>> {
        Ok(self.frames.pop_front())
    }

    fn name(&self) -> &str {
        "stub"
    }
}
