//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Camera frame geometry.
///
/// The landmark source reports normalized coordinates; these dimensions
/// convert them to frame pixels, so they must match the capture resolution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Capture frame width in pixels (valid range: 160 - 4096)
    #[serde(default = "default_frame_width")]
    pub width: u32,

    /// Capture frame height in pixels (valid range: 160 - 4096)
    #[serde(default = "default_frame_height")]
    pub height: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: default_frame_width(),
            height: default_frame_height(),
        }
    }
}

/// Pointer filter tuning.
///
/// Controls how raw fingertip positions become smoothed cursor motion.
/// The defaults favor jitter-free fine positioning while keeping large
/// deliberate moves responsive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointerConfig {
    /// Frame border margin excluded from the fingertip-to-screen mapping,
    /// in pixels (valid range: 0 - 200). Detection is least reliable near
    /// the frame border, so the inner region maps to the full screen.
    #[serde(default = "default_inset_margin")]
    pub inset_margin: f64,

    /// Per-axis motion below this many screen units is treated as jitter
    /// and ignored (valid range: 0 - 20)
    #[serde(default = "default_dead_zone")]
    pub dead_zone: f64,

    /// Deltas shorter than this use the heaviest smoothing (valid range: 1 - 500)
    #[serde(default = "default_slow_radius")]
    pub slow_radius: f64,

    /// Deltas at or past this use the lightest smoothing (valid range: 1 - 500)
    #[serde(default = "default_fast_radius")]
    pub fast_radius: f64,

    /// Smoothing divisor for small motions; higher = steadier, laggier
    /// (valid range: 1 - 30)
    #[serde(default = "default_slow_factor")]
    pub slow_factor: f64,

    /// Smoothing divisor for medium motions (valid range: 1 - 30)
    #[serde(default = "default_medium_factor")]
    pub medium_factor: f64,

    /// Smoothing divisor for large motions (valid range: 1 - 30)
    #[serde(default = "default_fast_factor")]
    pub fast_factor: f64,

    /// Hard cap on cursor displacement per frame on each axis, in screen
    /// units (valid range: 1 - 500). Bounds the jump from a detection glitch.
    #[serde(default = "default_max_step")]
    pub max_step: f64,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            inset_margin: default_inset_margin(),
            dead_zone: default_dead_zone(),
            slow_radius: default_slow_radius(),
            fast_radius: default_fast_radius(),
            slow_factor: default_slow_factor(),
            medium_factor: default_medium_factor(),
            fast_factor: default_fast_factor(),
            max_step: default_max_step(),
        }
    }
}

/// Gesture detection thresholds and debounce windows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Index-to-thumb / middle-to-thumb pinch distance that registers a
    /// click, in frame pixels (valid range: 1 - 300)
    #[serde(default = "default_click_distance")]
    pub click_distance: f64,

    /// Index-to-middle distance that enters scroll mode, in frame pixels
    /// (valid range: 1 - 300)
    #[serde(default = "default_scroll_distance")]
    pub scroll_distance: f64,

    /// Ring-to-thumb pinch distance that holds the drag latch, in frame
    /// pixels (valid range: 1 - 300)
    #[serde(default = "default_drag_distance")]
    pub drag_distance: f64,

    /// Minimum time between repeated clicks of the same button, in
    /// milliseconds (valid range: 50 - 2000)
    #[serde(default = "default_click_cooldown_ms")]
    pub click_cooldown_ms: u64,

    /// How long the hand may be undetected before a held drag is released
    /// and scroll mode cleared, in milliseconds (valid range: 50 - 2000)
    #[serde(default = "default_loss_timeout_ms")]
    pub loss_timeout_ms: u64,

    /// Scroll amount per pixel of index-finger travel (valid range: 0.1 - 10.0)
    #[serde(default = "default_scroll_gain")]
    pub scroll_gain: f64,

    /// Index-finger travel below this many pixels emits no scroll
    /// (valid range: 0 - 50)
    #[serde(default = "default_scroll_min_delta")]
    pub scroll_min_delta: i32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            click_distance: default_click_distance(),
            scroll_distance: default_scroll_distance(),
            drag_distance: default_drag_distance(),
            click_cooldown_ms: default_click_cooldown_ms(),
            loss_timeout_ms: default_loss_timeout_ms(),
            scroll_gain: default_scroll_gain(),
            scroll_min_delta: default_scroll_min_delta(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UiConfig {
    /// Emit the HUD status text (ENABLED / SCROLL MODE / DRAGGING)
    #[serde(default = "default_show_hud")]
    pub show_hud: bool,

    /// Include the key-hint line in the HUD
    #[serde(default = "default_show_hints")]
    pub show_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_hud: default_show_hud(),
            show_hints: default_show_hints(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_frame_width() -> u32 {
    640
}

fn default_frame_height() -> u32 {
    480
}

fn default_inset_margin() -> f64 {
    100.0
}

fn default_dead_zone() -> f64 {
    3.0
}

fn default_slow_radius() -> f64 {
    20.0
}

fn default_fast_radius() -> f64 {
    60.0
}

fn default_slow_factor() -> f64 {
    8.0
}

fn default_medium_factor() -> f64 {
    5.0
}

fn default_fast_factor() -> f64 {
    3.0
}

fn default_max_step() -> f64 {
    40.0
}

fn default_click_distance() -> f64 {
    30.0
}

fn default_scroll_distance() -> f64 {
    20.0
}

fn default_drag_distance() -> f64 {
    30.0
}

fn default_click_cooldown_ms() -> u64 {
    250
}

fn default_loss_timeout_ms() -> u64 {
    250
}

fn default_scroll_gain() -> f64 {
    2.0
}

fn default_scroll_min_delta() -> i32 {
    2
}

fn default_show_hud() -> bool {
    true
}

fn default_show_hints() -> bool {
    true
}
