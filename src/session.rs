//! Frame-driven session loop.
//!
//! One tick = pull a timed frame from the landmark source, run the
//! gesture engine, dispatch the resulting intents to the action sink,
//! update the HUD, then poll for a user command. Everything is
//! synchronous and single-threaded; the loop is paced by frame delivery
//! and exits cooperatively on a quit command or end of stream.

use device_query::{DeviceQuery, DeviceState, Keycode};

use crate::config::UiConfig;
use crate::gesture::GestureEngine;
use crate::hud;
use crate::sink::{self, ActionSink};
use crate::source::{LandmarkSource, SourceError};

/// Discrete user commands, polled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flip the gesture-control enable toggle.
    ToggleEnabled,
    /// End the session.
    Quit,
}

/// Bounded once-per-tick command poll.
pub trait CommandPoll {
    fn poll(&mut self) -> Option<Command>;
}

/// Command source for headless runs: never reports a command.
pub struct NoCommands;

impl CommandPoll for NoCommands {
    fn poll(&mut self) -> Option<Command> {
        None
    }
}

/// Polls the keyboard state for the toggle ('e') and quit ('q') keys.
///
/// Key-down edges are detected against the previous poll, so holding a
/// key across ticks fires its command once.
pub struct KeyboardPoll {
    device: DeviceState,
    previous: Vec<Keycode>,
}

impl KeyboardPoll {
    pub fn new() -> Self {
        Self {
            device: DeviceState::new(),
            previous: Vec::new(),
        }
    }

    fn newly_pressed(&self, keys: &[Keycode], key: Keycode) -> bool {
        keys.contains(&key) && !self.previous.contains(&key)
    }
}

impl Default for KeyboardPoll {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandPoll for KeyboardPoll {
    fn poll(&mut self) -> Option<Command> {
        let keys = self.device.get_keys();
        // Quit wins if both arrive in the same poll.
        let command = if self.newly_pressed(&keys, Keycode::Q) {
            Some(Command::Quit)
        } else if self.newly_pressed(&keys, Keycode::E) {
            Some(Command::ToggleEnabled)
        } else {
            None
        };
        self.previous = keys;
        command
    }
}

/// Owns the engine and drives it from a landmark source until the stream
/// ends or the user quits.
pub struct Session<'a> {
    engine: GestureEngine,
    sink: &'a mut dyn ActionSink,
    commands: &'a mut dyn CommandPoll,
    ui: UiConfig,
    last_hud: Vec<String>,
    frames: u64,
}

impl<'a> Session<'a> {
    pub fn new(
        engine: GestureEngine,
        sink: &'a mut dyn ActionSink,
        commands: &'a mut dyn CommandPoll,
        ui: UiConfig,
    ) -> Self {
        Self {
            engine,
            sink,
            commands,
            ui,
            last_hud: Vec::new(),
            frames: 0,
        }
    }

    /// Runs the session to completion.
    ///
    /// Returns when the source reports end of stream or a quit command
    /// arrives. A source error means the capture device or stream failed
    /// and is fatal; per-frame detection misses never surface here.
    pub fn run(&mut self, source: &mut dyn LandmarkSource) -> Result<(), SourceError> {
        log::info!("session started");
        self.emit_hud();

        while let Some(frame) = source.next_frame()? {
            self.frames += 1;

            let intents = self.engine.step(frame.hand.as_ref(), frame.at);
            sink::dispatch(self.sink, &intents);
            self.emit_hud();

            match self.commands.poll() {
                Some(Command::Quit) => {
                    log::info!("quit requested");
                    break;
                }
                Some(Command::ToggleEnabled) => {
                    let intents = self.engine.toggle_enabled();
                    sink::dispatch(self.sink, &intents);
                    self.emit_hud();
                }
                None => {}
            }
        }

        log::info!("session ended after {} frames", self.frames);
        Ok(())
    }

    /// Number of frames processed so far.
    pub fn frames_processed(&self) -> u64 {
        self.frames
    }

    /// The engine, for state inspection after a run.
    pub fn engine(&self) -> &GestureEngine {
        &self.engine
    }

    fn emit_hud(&mut self) {
        if !self.ui.show_hud {
            return;
        }
        let lines = hud::status_lines(&self.engine.snapshot(), self.ui.show_hints);
        if lines != self.last_hud {
            for line in &lines {
                log::info!("[hud] {line}");
            }
            self.last_hud = lines;
        }
    }
}
