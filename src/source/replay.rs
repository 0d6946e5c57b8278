//! JSON-lines landmark trace reader.
//!
//! One record per line:
//!
//! ```json
//! {"t": 0.033, "hand": {"index": [0.52, 0.41], "thumb": [0.48, 0.47],
//!                       "middle": [0.55, 0.38], "ring": [0.58, 0.44]}}
//! {"t": 0.066, "hand": null}
//! ```
//!
//! `t` is seconds since the start of the recording and must be
//! non-negative and non-decreasing; coordinates are normalized `[0, 1]`
//! detector output.
//! A missing or null `"hand"` means no detection that frame. Records are
//! read lazily, so a live detector process can stream them over a pipe
//! and the blocking read paces the session at the producer's frame rate.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::{Duration, Instant};

use serde::Deserialize;

use crate::gesture::{HandKeypoint, LandmarkFrame};

use super::{LandmarkSource, SourceError, TimedFrame};

#[derive(Debug, Deserialize)]
struct TraceRecord {
    t: f64,
    #[serde(default)]
    hand: Option<HandRecord>,
}

#[derive(Debug, Deserialize)]
struct HandRecord {
    index: [f64; 2],
    thumb: [f64; 2],
    middle: [f64; 2],
    ring: [f64; 2],
}

impl HandRecord {
    fn to_frame(&self, frame_width: u32, frame_height: u32) -> Option<LandmarkFrame> {
        LandmarkFrame::from_normalized(
            &[
                (HandKeypoint::IndexTip, self.index[0], self.index[1]),
                (HandKeypoint::ThumbTip, self.thumb[0], self.thumb[1]),
                (HandKeypoint::MiddleTip, self.middle[0], self.middle[1]),
                (HandKeypoint::RingTip, self.ring[0], self.ring[1]),
            ],
            frame_width,
            frame_height,
        )
    }
}

/// Replays a landmark trace as a `LandmarkSource`.
///
/// Record timestamps are rebased onto a monotonic `Instant` taken when
/// the source is created, preserving the recording's timing relationships
/// for the engine's debounce windows.
pub struct ReplaySource {
    reader: Box<dyn BufRead>,
    frame_width: u32,
    frame_height: u32,
    base: Instant,
    last_t: Option<f64>,
    line: usize,
}

impl ReplaySource {
    /// Opens a trace file, or standard input when `path` is `-`.
    pub fn open(path: &Path, frame_width: u32, frame_height: u32) -> Result<Self, SourceError> {
        let reader: Box<dyn BufRead> = if path.as_os_str() == "-" {
            Box::new(BufReader::new(io::stdin()))
        } else {
            Box::new(BufReader::new(File::open(path)?))
        };
        Ok(Self::from_reader(reader, frame_width, frame_height))
    }

    pub fn from_reader(
        reader: Box<dyn BufRead>,
        frame_width: u32,
        frame_height: u32,
    ) -> Self {
        Self {
            reader,
            frame_width,
            frame_height,
            base: Instant::now(),
            last_t: None,
            line: 0,
        }
    }
}

impl LandmarkSource for ReplaySource {
    fn next_frame(&mut self) -> Result<Option<TimedFrame>, SourceError> {
        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            // Blank lines separate recording segments; skip them.
            if line.trim().is_empty() {
                continue;
            }

            let record: TraceRecord =
                serde_json::from_str(&line).map_err(|source| SourceError::Malformed {
                    line: self.line,
                    source,
                })?;

            if !record.t.is_finite()
                || record.t < 0.0
                || self.last_t.is_some_and(|last| record.t < last)
            {
                return Err(SourceError::NonMonotonic { line: self.line });
            }
            self.last_t = Some(record.t);

            // A hand record that fails conversion (non-finite coordinates)
            // degrades to "no hand" for that frame, per the source contract.
            let hand = record
                .hand
                .as_ref()
                .and_then(|hand| hand.to_frame(self.frame_width, self.frame_height));

            return Ok(Some(TimedFrame {
                at: self.base + Duration::from_secs_f64(record.t),
                hand,
            }));
        }
    }
}

/// In-memory landmark source, for tests and for embedding the engine
/// without a trace file.
pub struct QueuedSource {
    frames: VecDeque<TimedFrame>,
}

impl QueuedSource {
    pub fn new(frames: impl IntoIterator<Item = TimedFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl LandmarkSource for QueuedSource {
    fn next_frame(&mut self) -> Result<Option<TimedFrame>, SourceError> {
        Ok(self.frames.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn source_from(trace: &str) -> ReplaySource {
        ReplaySource::from_reader(Box::new(Cursor::new(trace.to_string())), 640, 480)
    }

    const HAND_LINE: &str = r#"{"t": 0.0, "hand": {"index": [0.5, 0.5], "thumb": [0.1, 0.2], "middle": [0.6, 0.4], "ring": [0.7, 0.3]}}"#;

    #[test]
    fn reads_hand_and_no_hand_records() {
        let trace = format!("{HAND_LINE}\n{{\"t\": 0.033, \"hand\": null}}\n");
        let mut source = source_from(&trace);

        let first = source.next_frame().unwrap().unwrap();
        let frame = first.hand.expect("hand present");
        assert_eq!(frame.index.x, 320);
        assert_eq!(frame.index.y, 240);

        let second = source.next_frame().unwrap().unwrap();
        assert!(second.hand.is_none());

        assert!(source.next_frame().unwrap().is_none());
    }

    #[test]
    fn missing_hand_field_means_no_hand() {
        let mut source = source_from("{\"t\": 0.0}\n");
        let frame = source.next_frame().unwrap().unwrap();
        assert!(frame.hand.is_none());
    }

    #[test]
    fn timestamps_are_rebased_in_order() {
        let trace = format!("{HAND_LINE}\n{{\"t\": 0.5, \"hand\": null}}\n");
        let mut source = source_from(&trace);
        let first = source.next_frame().unwrap().unwrap();
        let second = source.next_frame().unwrap().unwrap();
        let gap = second.at.duration_since(first.at);
        assert_eq!(gap, Duration::from_millis(500));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let trace = format!("\n{HAND_LINE}\n\n");
        let mut source = source_from(&trace);
        assert!(source.next_frame().unwrap().is_some());
        assert!(source.next_frame().unwrap().is_none());
    }

    #[test]
    fn malformed_json_reports_line_number() {
        let trace = format!("{HAND_LINE}\nnot json\n");
        let mut source = source_from(&trace);
        source.next_frame().unwrap();
        match source.next_frame() {
            Err(SourceError::Malformed { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected malformed record error, got {other:?}"),
        }
    }

    #[test]
    fn backwards_timestamp_is_rejected() {
        let trace = format!("{HAND_LINE}\n{{\"t\": -1.0, \"hand\": null}}\n");
        let mut source = source_from(&trace);
        source.next_frame().unwrap();
        assert!(matches!(
            source.next_frame(),
            Err(SourceError::NonMonotonic { line: 2 })
        ));
    }

    #[test]
    fn queued_source_drains_in_order() {
        let base = Instant::now();
        let mut source = QueuedSource::new([
            TimedFrame {
                at: base,
                hand: None,
            },
            TimedFrame {
                at: base + Duration::from_millis(33),
                hand: None,
            },
        ]);
        assert_eq!(source.next_frame().unwrap().unwrap().at, base);
        assert!(source.next_frame().unwrap().is_some());
        assert!(source.next_frame().unwrap().is_none());
    }
}
