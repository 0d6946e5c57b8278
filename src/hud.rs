//! HUD status text composition.
//!
//! Builds the on-screen status lines from an engine snapshot. Rendering
//! is the presentation layer's job; this module only decides what the
//! text says, so it stays testable without a display.

use crate::gesture::EngineSnapshot;

/// Composes the HUD lines for the current engine state.
///
/// The first line always reports the enable toggle; SCROLL MODE and
/// DRAGGING lines appear only while active, and the key-hint line is
/// appended when `show_hints` is set.
pub fn status_lines(snapshot: &EngineSnapshot, show_hints: bool) -> Vec<String> {
    let status = if snapshot.enabled {
        "ENABLED"
    } else {
        "DISABLED"
    };
    let mut lines = vec![format!("Mouse: {status}")];

    if snapshot.scroll_mode {
        lines.push("SCROLL MODE".to_string());
    }
    if snapshot.dragging {
        lines.push("DRAGGING".to_string());
    }
    if show_hints {
        lines.push("Press 'e' to toggle, 'q' to quit".to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(enabled: bool, scroll_mode: bool, dragging: bool) -> EngineSnapshot {
        EngineSnapshot {
            enabled,
            scroll_mode,
            dragging,
        }
    }

    #[test]
    fn idle_enabled_state_shows_status_and_hints() {
        let lines = status_lines(&snapshot(true, false, false), true);
        assert_eq!(
            lines,
            vec![
                "Mouse: ENABLED".to_string(),
                "Press 'e' to toggle, 'q' to quit".to_string()
            ]
        );
    }

    #[test]
    fn disabled_state_is_reported() {
        let lines = status_lines(&snapshot(false, false, false), false);
        assert_eq!(lines, vec!["Mouse: DISABLED".to_string()]);
    }

    #[test]
    fn active_modes_add_their_lines_in_order() {
        let lines = status_lines(&snapshot(true, true, true), false);
        assert_eq!(
            lines,
            vec![
                "Mouse: ENABLED".to_string(),
                "SCROLL MODE".to_string(),
                "DRAGGING".to_string()
            ]
        );
    }
}
