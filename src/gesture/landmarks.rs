//! Hand landmark data contract.
//!
//! The landmark source reports per-frame keypoints in normalized `[0, 1]`
//! coordinates; this module converts them into the fixed set of fingertip
//! pixel positions the gesture engine consumes.

use crate::util::PixelPoint;

/// Fingertip keypoints consumed by the gesture engine.
///
/// The numbering matches the common 21-point hand landmark model, so a
/// detector backend can map its output without a translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandKeypoint {
    ThumbTip,
    IndexTip,
    MiddleTip,
    RingTip,
}

impl HandKeypoint {
    /// Index of this keypoint in the 21-point hand landmark model.
    pub fn model_index(self) -> usize {
        match self {
            HandKeypoint::ThumbTip => 4,
            HandKeypoint::IndexTip => 8,
            HandKeypoint::MiddleTip => 12,
            HandKeypoint::RingTip => 16,
        }
    }
}

/// One frame of fingertip positions in frame-pixel coordinates.
///
/// Immutable once built; the engine consumes it in a single `step` call.
/// A detection missing any of the four tips never produces a frame, so
/// every field is always populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandmarkFrame {
    pub thumb: PixelPoint,
    pub index: PixelPoint,
    pub middle: PixelPoint,
    pub ring: PixelPoint,
}

impl LandmarkFrame {
    /// Builds a frame from normalized detector output.
    ///
    /// Coordinates are scaled by the frame dimensions and truncated to
    /// pixels. Returns `None` if any of the four fingertips is missing or
    /// carries a non-finite coordinate; the caller treats that frame as
    /// "no hand" (malformed keypoint data is never an error).
    ///
    /// Duplicate keypoints keep the last occurrence.
    pub fn from_normalized(
        points: &[(HandKeypoint, f64, f64)],
        frame_width: u32,
        frame_height: u32,
    ) -> Option<Self> {
        let mut thumb = None;
        let mut index = None;
        let mut middle = None;
        let mut ring = None;

        for &(keypoint, x, y) in points {
            if !x.is_finite() || !y.is_finite() {
                return None;
            }
            let pixel = PixelPoint::new(
                (x * frame_width as f64) as i32,
                (y * frame_height as f64) as i32,
            );
            match keypoint {
                HandKeypoint::ThumbTip => thumb = Some(pixel),
                HandKeypoint::IndexTip => index = Some(pixel),
                HandKeypoint::MiddleTip => middle = Some(pixel),
                HandKeypoint::RingTip => ring = Some(pixel),
            }
        }

        Some(Self {
            thumb: thumb?,
            index: index?,
            middle: middle?,
            ring: ring?,
        })
    }
}
