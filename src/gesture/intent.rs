//! Intent vocabulary emitted by the gesture engine.

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (index+thumb pinch)
    Left,
    /// Right mouse button (middle+thumb pinch)
    Right,
}

/// A discrete action request for the action sink to execute.
///
/// Intents are transient: the engine emits zero or more per frame, in
/// order, and the sink consumes them immediately. `DragStart`/`DragEnd`
/// bracket a button-down/button-up pair; the engine guarantees they
/// alternate and that a session never ends with the button held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Move the cursor to an absolute screen position.
    MoveCursor { x: f64, y: f64 },
    /// Press and release a button at the current position.
    Click(MouseButton),
    /// Press and hold the primary button.
    DragStart,
    /// Release the held primary button.
    DragEnd,
    /// Scroll vertically; positive scrolls up.
    Scroll(i32),
}
