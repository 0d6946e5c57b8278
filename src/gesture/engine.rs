//! Gesture state machine.
//!
//! Consumes one landmark frame per camera tick and decides which
//! interaction modes are active: pointer movement, scroll, drag, and
//! clicks. Scroll and drag are independent axes (they use different
//! fingertip pairs); clicks are gated by the drag latch only. Discrete
//! actions are debounced against accidental repeats, and a held drag is
//! auto-released when hand tracking is lost.

use std::time::{Duration, Instant};

use crate::config::{GestureConfig, PointerConfig};
use crate::gesture::filter::PointerFilter;
use crate::gesture::intent::{Intent, MouseButton};
use crate::gesture::landmarks::LandmarkFrame;
use crate::util::ScreenPoint;

/// Which geometry the index fingertip currently drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMode {
    /// Index fingertip moves the cursor.
    Pointer,
    /// Index fingertip travel scrolls; cursor movement is suppressed.
    Scroll,
}

/// Persistent interaction state, mutated exactly once per processed frame.
#[derive(Debug, Clone)]
pub struct InteractionState {
    /// User toggle; when false no cursor motion or scrolling is emitted,
    /// but mode/drag tracking continues.
    pub enabled: bool,
    pub mode: PointerMode,
    /// Drag latch: the primary button is currently held down.
    pub dragging: bool,
    /// Last smoothed screen position, fed back into the pointer filter.
    pub prev_pointer: ScreenPoint,
    /// Index-finger y anchor for scroll deltas; `None` outside scroll mode.
    pub scroll_anchor_y: Option<i32>,
    pub last_left_click: Option<Instant>,
    pub last_right_click: Option<Instant>,
    pub last_hand_seen: Option<Instant>,
}

impl InteractionState {
    fn new() -> Self {
        Self {
            enabled: true,
            mode: PointerMode::Pointer,
            dragging: false,
            prev_pointer: ScreenPoint::origin(),
            scroll_anchor_y: None,
            last_left_click: None,
            last_right_click: None,
            last_hand_seen: None,
        }
    }
}

/// Read-only state snapshot for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSnapshot {
    pub enabled: bool,
    pub scroll_mode: bool,
    pub dragging: bool,
}

/// The gesture state machine plus its pointer filter.
///
/// The two form one unit: the filter's output feeds back through
/// `prev_pointer`, and whether it runs at all depends on the current mode.
pub struct GestureEngine {
    gesture: GestureConfig,
    filter: PointerFilter,
    frame_size: (u32, u32),
    screen_size: (u32, u32),
    state: InteractionState,
}

impl GestureEngine {
    pub fn new(
        gesture: GestureConfig,
        pointer: PointerConfig,
        frame_size: (u32, u32),
        screen_size: (u32, u32),
    ) -> Self {
        Self {
            gesture,
            filter: PointerFilter::new(pointer),
            frame_size,
            screen_size,
            state: InteractionState::new(),
        }
    }

    /// Processes one camera frame.
    ///
    /// `frame` is `None` when no hand is visible. `now` must be
    /// non-decreasing across calls. Returns the intents for this frame in
    /// dispatch order; total over the whole input domain (never fails).
    pub fn step(&mut self, frame: Option<&LandmarkFrame>, now: Instant) -> Vec<Intent> {
        match frame {
            Some(frame) => self.step_hand(frame, now),
            None => self.step_no_hand(now),
        }
    }

    fn step_no_hand(&mut self, now: Instant) -> Vec<Intent> {
        let Some(seen) = self.state.last_hand_seen else {
            return Vec::new();
        };
        if now.saturating_duration_since(seen) <= self.loss_timeout() {
            return Vec::new();
        }

        let mut intents = Vec::new();
        if self.state.dragging {
            // Auto-release so tracking loss cannot leave the button held.
            self.state.dragging = false;
            intents.push(Intent::DragEnd);
            log::debug!("drag released after tracking loss");
        }
        if self.state.mode == PointerMode::Scroll {
            // A latched scroll mode would block pointer movement when the
            // hand comes back.
            self.state.mode = PointerMode::Pointer;
            self.state.scroll_anchor_y = None;
            log::debug!("scroll mode cleared after tracking loss");
        }
        intents
    }

    fn step_hand(&mut self, frame: &LandmarkFrame, now: Instant) -> Vec<Intent> {
        self.state.last_hand_seen = Some(now);
        let mut intents = Vec::new();

        let dist_left = frame.index.distance_to(frame.thumb);
        let dist_right = frame.middle.distance_to(frame.thumb);
        let dist_scroll = frame.index.distance_to(frame.middle);
        let dist_drag = frame.ring.distance_to(frame.thumb);

        // Scroll: index and middle tips held together. Entering anchors the
        // index y; each enabled frame scrolls by the inverted, amplified
        // travel since the previous frame.
        if dist_scroll < self.gesture.scroll_distance {
            if self.state.mode != PointerMode::Scroll {
                self.state.mode = PointerMode::Scroll;
                self.state.scroll_anchor_y = Some(frame.index.y);
            }
            if self.state.enabled {
                if let Some(anchor) = self.state.scroll_anchor_y {
                    let dy = frame.index.y - anchor;
                    if dy.abs() > self.gesture.scroll_min_delta {
                        intents.push(Intent::Scroll((-dy as f64 * self.gesture.scroll_gain) as i32));
                    }
                }
                self.state.scroll_anchor_y = Some(frame.index.y);
            }
        } else {
            self.state.mode = PointerMode::Pointer;
            self.state.scroll_anchor_y = None;
        }

        // Pointer movement: suppressed entirely while scrolling.
        if self.state.enabled && self.state.mode == PointerMode::Pointer {
            let next = self.filter.smooth(
                frame.index,
                self.frame_size,
                self.screen_size,
                self.state.prev_pointer,
            );
            self.state.prev_pointer = next;
            intents.push(Intent::MoveCursor {
                x: next.x,
                y: next.y,
            });
        }

        // Drag latch: ring and thumb tips held together. Edge-triggered,
        // one transition per frame maximum.
        let ring_thumb_close = dist_drag < self.gesture.drag_distance;
        if ring_thumb_close && !self.state.dragging {
            self.state.dragging = true;
            intents.push(Intent::DragStart);
        } else if self.state.dragging && !ring_thumb_close {
            self.state.dragging = false;
            intents.push(Intent::DragEnd);
        }

        // Clicks are suppressed while the drag latch is held. Left and
        // right use independent cooldowns and may fire in the same frame.
        if !self.state.dragging {
            if dist_left < self.gesture.click_distance
                && self.cooldown_elapsed(self.state.last_left_click, now)
            {
                self.state.last_left_click = Some(now);
                intents.push(Intent::Click(MouseButton::Left));
            }
            if dist_right < self.gesture.click_distance
                && self.cooldown_elapsed(self.state.last_right_click, now)
            {
                self.state.last_right_click = Some(now);
                intents.push(Intent::Click(MouseButton::Right));
            }
        }

        intents
    }

    /// Flips the user enable toggle and hard-resets interaction state:
    /// drag released, scroll mode cleared. Not gated on hand presence.
    ///
    /// When a drag was in progress the returned intents contain `DragEnd`,
    /// so the OS button is never left physically down by a toggle.
    pub fn toggle_enabled(&mut self) -> Vec<Intent> {
        self.state.enabled = !self.state.enabled;
        let mut intents = Vec::new();
        if self.state.dragging {
            self.state.dragging = false;
            intents.push(Intent::DragEnd);
        }
        self.state.mode = PointerMode::Pointer;
        self.state.scroll_anchor_y = None;
        log::info!(
            "gesture control {}",
            if self.state.enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
        intents
    }

    /// Read-only snapshot for the presentation layer.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            enabled: self.state.enabled,
            scroll_mode: self.state.mode == PointerMode::Scroll,
            dragging: self.state.dragging,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &InteractionState {
        &self.state
    }

    fn cooldown_elapsed(&self, last: Option<Instant>, now: Instant) -> bool {
        match last {
            None => true,
            Some(last) => {
                now.saturating_duration_since(last)
                    > Duration::from_millis(self.gesture.click_cooldown_ms)
            }
        }
    }

    fn loss_timeout(&self) -> Duration {
        Duration::from_millis(self.gesture.loss_timeout_ms)
    }
}
