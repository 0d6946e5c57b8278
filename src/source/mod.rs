//! Landmark source seam.
//!
//! A landmark source delivers one timed observation per camera frame:
//! either the four fingertip positions or "no hand". Camera handling and
//! the detection model live behind this trait; the crate ships a
//! JSON-lines trace reader (`ReplaySource`) that can replay a recording
//! or consume a live detector process over a pipe.

pub mod replay;

pub use replay::ReplaySource;

use std::time::Instant;

use thiserror::Error;

use crate::gesture::LandmarkFrame;

/// One landmark observation stamped with the monotonic instant it was
/// produced. The engine's debounce windows are measured against `at`.
#[derive(Debug, Clone, Copy)]
pub struct TimedFrame {
    pub at: Instant,
    /// `None` when no hand was detected this frame.
    pub hand: Option<LandmarkFrame>,
}

/// Errors from a landmark source.
///
/// Per-frame detection misses are not errors; a source reports those as
/// `hand: None` and the next frame naturally retries. An `Err` from a
/// source means the device or stream itself failed and ends the session.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read landmark stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed trace record at line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("trace timestamps must be non-decreasing (line {line})")]
    NonMonotonic { line: usize },
}

/// Per-frame landmark delivery.
///
/// `Ok(None)` signals end of stream and ends the session cleanly.
pub trait LandmarkSource {
    fn next_frame(&mut self) -> Result<Option<TimedFrame>, SourceError>;
}
