//! Headless driver
//!
//! Stands in for the browser: frames only fire when [`HeadlessSession::pump`]
//! is called, and key events are delivered only while the listener is
//! registered.

use crate::game_loop::{FrameToken, GameLoop, RunState, Teardown, Transition};
use crate::renderer::CommandRecorder;
use crate::settings::Settings;

/// A mounted game without a display
pub struct HeadlessSession {
    game: GameLoop,
    surface: CommandRecorder,
    /// Frame the "display" will fire next
    scheduled: Option<FrameToken>,
    listener: bool,
}

impl HeadlessSession {
    pub fn mount(settings: &Settings) -> Self {
        log::info!("Headless session mounted");
        Self {
            game: GameLoop::new(settings),
            surface: CommandRecorder::new(),
            scheduled: None,
            listener: false,
        }
    }

    pub fn game(&self) -> &GameLoop {
        &self.game
    }

    pub fn surface(&self) -> &CommandRecorder {
        &self.surface
    }

    pub fn run_state(&self) -> RunState {
        self.game.run_state()
    }

    pub fn button_label(&self) -> &'static str {
        self.game.button_label()
    }

    /// Whether a key listener is currently registered
    pub fn has_listener(&self) -> bool {
        self.listener
    }

    /// Whether a frame is waiting to fire
    pub fn has_scheduled_frame(&self) -> bool {
        self.scheduled.is_some()
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Started {
                frame,
                attach_listener,
            } => {
                if attach_listener {
                    self.listener = true;
                }
                self.scheduled = Some(frame);
            }
            Transition::Stopped { cancel } => {
                if cancel.is_some() && cancel == self.scheduled {
                    self.scheduled = None;
                }
            }
            Transition::Unchanged => {}
        }
    }

    /// Press the start/stop button
    pub fn toggle(&mut self) -> RunState {
        let transition = self.game.toggle();
        self.apply(transition);
        self.game.run_state()
    }

    /// Deliver a key-down event
    pub fn key_down(&mut self, key: &str) -> bool {
        if !self.listener {
            return false;
        }
        self.game.handle_key(key)
    }

    /// Fire the scheduled frame, if any
    pub fn pump(&mut self) -> bool {
        let Some(frame) = self.scheduled.take() else {
            return false;
        };
        self.scheduled = self.game.run_frame(frame, &mut self.surface);
        true
    }

    /// Fire up to `n` frames; returns how many ran
    pub fn pump_frames(&mut self, n: u32) -> u32 {
        let mut fired = 0;
        while fired < n && self.pump() {
            fired += 1;
        }
        fired
    }

    /// Cancel the pending frame and drop the key listener
    pub fn unmount(&mut self) -> Teardown {
        let teardown = self.game.teardown();
        if teardown.cancel.is_some() {
            self.scheduled = None;
        }
        if teardown.detach_listener {
            self.listener = false;
        }
        teardown
    }
}

impl Drop for HeadlessSession {
    fn drop(&mut self) {
        self.unmount();
    }
}
