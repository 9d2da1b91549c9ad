//! Game loop lifecycle
//!
//! The loop is either `Stopped` or `Running`. While running, every frame
//! callback draws the current state, advances the simulation one tick and asks
//! for the next frame, in that order. Each scheduled frame carries a
//! [`FrameToken`]; a callback whose token is no longer the pending one does
//! nothing, so stopping just forgets the pending token.
//!
//! The key listener is attached on the first start and stays attached across
//! stop/start until [`GameLoop::teardown`].

use serde::{Deserialize, Serialize};

use crate::input::InputController;
use crate::renderer::{self, Surface};
use crate::settings::{Palette, Settings};
use crate::sim::GameState;

/// Whether frames are being scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Stopped,
    Running,
}

/// Handle for one scheduled frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

/// What the platform must do after a start/stop request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Schedule `frame`; attach the key listener if asked to
    Started {
        frame: FrameToken,
        attach_listener: bool,
    },
    /// Cancel the pending frame, if there is one
    Stopped { cancel: Option<FrameToken> },
    /// Already in the requested state, or torn down
    Unchanged,
}

/// Resources the platform must release on unmount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Teardown {
    pub cancel: Option<FrameToken>,
    pub detach_listener: bool,
}

/// Owns the geometry and drives input, physics and rendering
#[derive(Debug, Clone)]
pub struct GameLoop {
    state: GameState,
    input: InputController,
    palette: Palette,
    run_state: RunState,
    listener_attached: bool,
    pending: Option<FrameToken>,
    next_token: u64,
    frames: u64,
    torn_down: bool,
}

impl GameLoop {
    /// Mount a new session: geometry centered, loop stopped, nothing scheduled
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: GameState::new(),
            input: InputController::new(settings.keys.clone()),
            palette: settings.palette.clone(),
            run_state: RunState::Stopped,
            listener_attached: false,
            pending: None,
            next_token: 0,
            frames: 0,
            torn_down: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn listener_attached(&self) -> bool {
        self.listener_attached
    }

    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Frames run so far this session
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Label for the start/stop control
    pub fn button_label(&self) -> &'static str {
        match self.run_state {
            RunState::Running => "Stop Game",
            RunState::Stopped => "Start Game",
        }
    }

    fn issue_token(&mut self) -> FrameToken {
        self.next_token += 1;
        let token = FrameToken(self.next_token);
        self.pending = Some(token);
        token
    }

    /// STOPPED -> RUNNING. Geometry is left as it was.
    pub fn start(&mut self) -> Transition {
        if self.torn_down || self.run_state == RunState::Running {
            return Transition::Unchanged;
        }

        self.run_state = RunState::Running;
        let attach_listener = !self.listener_attached;
        self.listener_attached = true;
        let frame = self.issue_token();

        log::info!(
            "Game started (frame {}, attach listener: {})",
            self.frames,
            attach_listener
        );
        Transition::Started {
            frame,
            attach_listener,
        }
    }

    /// RUNNING -> STOPPED. The key listener stays attached.
    pub fn stop(&mut self) -> Transition {
        if self.run_state == RunState::Stopped {
            return Transition::Unchanged;
        }

        self.run_state = RunState::Stopped;
        let cancel = self.pending.take();

        log::info!("Game stopped after {} frames", self.frames);
        Transition::Stopped { cancel }
    }

    /// Back out of a start the platform could not carry out.
    ///
    /// `listener_attached` says whether the key listener really got
    /// registered; if not, the next start asks for it again.
    pub fn abort_start(&mut self, listener_attached: bool) -> Transition {
        if self.torn_down {
            return Transition::Unchanged;
        }
        self.listener_attached = listener_attached;
        log::warn!("Start aborted (listener attached: {})", listener_attached);
        self.stop()
    }

    /// Flip between running and stopped
    pub fn toggle(&mut self) -> Transition {
        match self.run_state {
            RunState::Running => self.stop(),
            RunState::Stopped => self.start(),
        }
    }

    /// Run the frame scheduled as `token`: draw, then step, then reschedule.
    ///
    /// Returns the token of the next frame to schedule, or `None` if `token`
    /// was stale or the loop is stopped.
    pub fn run_frame<S: Surface + ?Sized>(
        &mut self,
        token: FrameToken,
        surface: &mut S,
    ) -> Option<FrameToken> {
        if self.pending != Some(token) {
            log::debug!("Ignoring stale frame {:?}", token);
            return None;
        }
        self.pending = None;

        if self.run_state != RunState::Running {
            return None;
        }

        renderer::render(surface, &self.state, &self.palette);
        self.state.step_ball();
        self.frames += 1;

        Some(self.issue_token())
    }

    /// Key-down handler; returns whether a paddle moved
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.listener_attached {
            return false;
        }
        self.input.handle_key_down(&mut self.state, key)
    }

    /// Unmount: stop scheduling and release the listener. Terminal.
    pub fn teardown(&mut self) -> Teardown {
        if self.torn_down {
            return Teardown {
                cancel: None,
                detach_listener: false,
            };
        }

        self.torn_down = true;
        self.run_state = RunState::Stopped;
        let teardown = Teardown {
            cancel: self.pending.take(),
            detach_listener: std::mem::take(&mut self.listener_attached),
        };

        log::info!("Game torn down ({:?})", teardown);
        teardown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::CommandRecorder;
    use glam::Vec2;

    fn started_frame(transition: Transition) -> FrameToken {
        match transition {
            Transition::Started { frame, .. } => frame,
            other => panic!("expected start, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_state() {
        let game = GameLoop::new(&Settings::default());
        assert_eq!(game.run_state(), RunState::Stopped);
        assert_eq!(game.pending_frame(), None);
        assert!(!game.listener_attached());
        assert_eq!(game.button_label(), "Start Game");
    }

    #[test]
    fn test_start_attaches_listener_once() {
        let mut game = GameLoop::new(&Settings::default());
        assert!(matches!(
            game.start(),
            Transition::Started {
                attach_listener: true,
                ..
            }
        ));
        assert_eq!(game.button_label(), "Stop Game");
        assert_eq!(game.start(), Transition::Unchanged);

        let pending = game.pending_frame();
        assert_eq!(game.stop(), Transition::Stopped { cancel: pending });
        assert!(game.listener_attached());

        assert!(matches!(
            game.start(),
            Transition::Started {
                attach_listener: false,
                ..
            }
        ));
    }

    #[test]
    fn test_frame_draws_before_update() {
        let mut game = GameLoop::new(&Settings::default());
        let mut surface = CommandRecorder::new();
        let token = started_frame(game.start());

        let next = game.run_frame(token, &mut surface);
        assert!(next.is_some());
        assert_eq!(game.frames(), 1);
        // Drawn at the pre-step position, state has already moved on
        assert_eq!(surface.ball_position(), Some((395.0, 195.0)));
        assert_eq!(game.state().ball.pos, Vec2::new(399.0, 199.0));
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let mut game = GameLoop::new(&Settings::default());
        let mut surface = CommandRecorder::new();
        let first = started_frame(game.start());
        game.stop();

        assert_eq!(game.run_frame(first, &mut surface), None);
        assert_eq!(surface.frames(), 0);
        assert_eq!(game.frames(), 0);

        let second = started_frame(game.start());
        assert_ne!(first, second);
        assert_eq!(game.run_frame(first, &mut surface), None);
        assert!(game.run_frame(second, &mut surface).is_some());
        assert_eq!(game.frames(), 1);
    }

    #[test]
    fn test_keys_ignored_before_first_start() {
        let mut game = GameLoop::new(&Settings::default());
        assert!(!game.handle_key("w"));
        assert_eq!(game.state().left.y, 150.0);

        game.start();
        game.stop();
        // Listener survives the stop
        assert!(game.handle_key("w"));
        assert_eq!(game.state().left.y, 144.0);
    }

    #[test]
    fn test_restart_keeps_geometry() {
        let mut game = GameLoop::new(&Settings::default());
        let mut surface = CommandRecorder::new();
        let mut token = started_frame(game.start());
        for _ in 0..10 {
            token = game.run_frame(token, &mut surface).unwrap();
        }
        game.handle_key("ArrowDown");
        game.stop();
        let snapshot = game.state().clone();

        game.start();
        assert_eq!(game.state(), &snapshot);
    }

    #[test]
    fn test_teardown_is_terminal() {
        let mut game = GameLoop::new(&Settings::default());
        let token = started_frame(game.start());

        assert_eq!(
            game.teardown(),
            Teardown {
                cancel: Some(token),
                detach_listener: true,
            }
        );
        assert_eq!(game.run_state(), RunState::Stopped);
        assert!(!game.handle_key("w"));
        assert_eq!(game.start(), Transition::Unchanged);
        assert_eq!(
            game.teardown(),
            Teardown {
                cancel: None,
                detach_listener: false,
            }
        );
    }

    #[test]
    fn test_abort_start_rolls_back() {
        let mut game = GameLoop::new(&Settings::default());
        let mut surface = CommandRecorder::new();
        let token = started_frame(game.start());

        assert_eq!(
            game.abort_start(false),
            Transition::Stopped {
                cancel: Some(token)
            }
        );
        assert_eq!(game.run_state(), RunState::Stopped);
        assert_eq!(game.button_label(), "Start Game");
        assert!(!game.listener_attached());
        assert_eq!(game.run_frame(token, &mut surface), None);

        // Listener is requested again on the next start
        assert!(matches!(
            game.start(),
            Transition::Started {
                attach_listener: true,
                ..
            }
        ));
    }

    #[test]
    fn test_abort_start_keeps_registered_listener() {
        let mut game = GameLoop::new(&Settings::default());
        game.start();
        game.abort_start(true);
        assert!(game.listener_attached());
        assert!(game.handle_key("w"));
        assert!(matches!(
            game.start(),
            Transition::Started {
                attach_listener: false,
                ..
            }
        ));
    }

    #[test]
    fn test_teardown_after_stop_detaches_listener() {
        let mut game = GameLoop::new(&Settings::default());
        let mut surface = CommandRecorder::new();
        let token = started_frame(game.start());
        game.run_frame(token, &mut surface);
        game.stop();

        assert_eq!(
            game.teardown(),
            Teardown {
                cancel: None,
                detach_listener: true,
            }
        );
        assert!(!game.listener_attached());
        assert!(!game.handle_key("s"));
    }

    #[test]
    fn test_teardown_before_start_releases_nothing() {
        let mut game = GameLoop::new(&Settings::default());
        assert_eq!(
            game.teardown(),
            Teardown {
                cancel: None,
                detach_listener: false,
            }
        );
    }
}
