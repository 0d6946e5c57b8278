//! Action sink seam: where intents become OS input events.
//!
//! The gesture engine emits `Intent`s; a sink executes them. All calls
//! are fire-and-forget — the engine never consumes a result, so a sink
//! that drops events (or just logs them, like `DryRunSink`) is a valid
//! implementation.

pub mod enigo;

pub use self::enigo::EnigoSink;

use crate::gesture::{Intent, MouseButton};

/// Executes mouse actions on behalf of the gesture engine.
pub trait ActionSink {
    /// Screen dimensions the pointer filter maps onto.
    fn screen_size(&self) -> (u32, u32);

    /// Move the cursor to an absolute screen position.
    fn move_cursor(&mut self, x: f64, y: f64);

    /// Press and release a button at the current position.
    fn click(&mut self, button: MouseButton);

    /// Press and hold the primary button (drag start).
    fn button_down(&mut self);

    /// Release the held primary button (drag end).
    fn button_up(&mut self);

    /// Scroll vertically; positive scrolls up.
    fn scroll(&mut self, amount: i32);
}

/// Sends one frame's intents to the sink in order.
pub fn dispatch(sink: &mut dyn ActionSink, intents: &[Intent]) {
    for intent in intents {
        match *intent {
            Intent::MoveCursor { x, y } => sink.move_cursor(x, y),
            Intent::Click(button) => sink.click(button),
            Intent::DragStart => sink.button_down(),
            Intent::DragEnd => sink.button_up(),
            Intent::Scroll(amount) => sink.scroll(amount),
        }
    }
}

/// Logs intents instead of injecting them.
///
/// Useful for inspecting a trace without touching the real cursor, and
/// for running where no display is available. Cursor motion is logged at
/// debug level to keep per-frame noise out of the default output.
pub struct DryRunSink {
    screen: (u32, u32),
}

impl DryRunSink {
    pub fn new(screen: (u32, u32)) -> Self {
        Self { screen }
    }
}

impl ActionSink for DryRunSink {
    fn screen_size(&self) -> (u32, u32) {
        self.screen
    }

    fn move_cursor(&mut self, x: f64, y: f64) {
        log::debug!("move cursor to ({x:.1}, {y:.1})");
    }

    fn click(&mut self, button: MouseButton) {
        log::info!("click {button:?}");
    }

    fn button_down(&mut self) {
        log::info!("button down (drag start)");
    }

    fn button_up(&mut self) {
        log::info!("button up (drag end)");
    }

    fn scroll(&mut self, amount: i32) {
        log::info!("scroll {amount}");
    }
}
