//! Pointer smoothing filter.
//!
//! Maps a raw fingertip pixel position to a smoothed screen coordinate:
//! inset linear mapping, per-axis dead zone, motion-adaptive smoothing,
//! and a per-frame displacement clamp. A single fixed smoothing factor
//! trades lag against stability; adapting it by motion magnitude keeps
//! large deliberate moves responsive while fine positioning stays still
//! enough to click.

use crate::config::PointerConfig;
use crate::util::{PixelPoint, ScreenPoint, map_range};

/// Stateless pointer filter; the previous screen position is owned by the
/// caller and threaded through each call.
#[derive(Debug, Clone)]
pub struct PointerFilter {
    config: PointerConfig,
}

impl PointerFilter {
    pub fn new(config: PointerConfig) -> Self {
        Self { config }
    }

    /// Maps `raw` (frame pixels) to the next smoothed screen position.
    ///
    /// The fingertip is mapped from the inset region
    /// `[margin, dimension - margin]` of the frame onto the full screen
    /// axis, extrapolating past the inset so screen edges stay reachable.
    /// Per-axis deltas under the dead zone snap to zero; if both snap,
    /// the previous position is returned unchanged. The smoothing factor
    /// is chosen from the post-dead-zone delta magnitude, and the final
    /// displacement is clamped to `max_step` per axis.
    pub fn smooth(
        &self,
        raw: PixelPoint,
        frame_size: (u32, u32),
        screen_size: (u32, u32),
        prev: ScreenPoint,
    ) -> ScreenPoint {
        let margin = self.config.inset_margin;
        let target_x = map_range(
            raw.x as f64,
            margin,
            frame_size.0 as f64 - margin,
            0.0,
            screen_size.0 as f64,
        );
        let target_y = map_range(
            raw.y as f64,
            margin,
            frame_size.1 as f64 - margin,
            0.0,
            screen_size.1 as f64,
        );

        let mut dx = target_x - prev.x;
        let mut dy = target_y - prev.y;
        if dx.abs() < self.config.dead_zone {
            dx = 0.0;
        }
        if dy.abs() < self.config.dead_zone {
            dy = 0.0;
        }
        if dx == 0.0 && dy == 0.0 {
            return prev;
        }

        let distance = dx.hypot(dy);
        let factor = if distance < self.config.slow_radius {
            self.config.slow_factor
        } else if distance < self.config.fast_radius {
            self.config.medium_factor
        } else {
            self.config.fast_factor
        };
        let weight = 1.0 / factor;

        // Blend toward the dead-zoned target so a snapped axis does not creep.
        let step = self.config.max_step;
        ScreenPoint::new(
            prev.x + (dx * weight).clamp(-step, step),
            prev.y + (dy * weight).clamp(-step, step),
        )
    }
}
