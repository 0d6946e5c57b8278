//! enigo-backed OS mouse sink.

use ::enigo::{Enigo, MouseButton as EnigoButton, MouseControllable};

use crate::gesture::MouseButton;

use super::ActionSink;

/// Injects real mouse events through the `enigo` cross-platform layer.
pub struct EnigoSink {
    enigo: Enigo,
}

impl EnigoSink {
    pub fn new() -> Self {
        Self {
            enigo: Enigo::new(),
        }
    }
}

impl Default for EnigoSink {
    fn default() -> Self {
        Self::new()
    }
}

fn map_button(button: MouseButton) -> EnigoButton {
    match button {
        MouseButton::Left => EnigoButton::Left,
        MouseButton::Right => EnigoButton::Right,
    }
}

impl ActionSink for EnigoSink {
    fn screen_size(&self) -> (u32, u32) {
        let (width, height) = self.enigo.main_display_size();
        (width as u32, height as u32)
    }

    fn move_cursor(&mut self, x: f64, y: f64) {
        self.enigo.mouse_move_to(x as i32, y as i32);
    }

    fn click(&mut self, button: MouseButton) {
        self.enigo.mouse_click(map_button(button));
    }

    fn button_down(&mut self) {
        self.enigo.mouse_down(EnigoButton::Left);
    }

    fn button_up(&mut self) {
        self.enigo.mouse_up(EnigoButton::Left);
    }

    fn scroll(&mut self, amount: i32) {
        // Intent scroll is positive-up; enigo's y axis scrolls down.
        self.enigo.mouse_scroll_y(-amount);
    }
}
