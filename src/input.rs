//! Keyboard input handling
//!
//! Key presses move paddles immediately. Nothing is queued or coalesced: two
//! presses inside one frame are two moves.

use crate::consts::PADDLE_STEP;
use crate::settings::KeyBindings;
use crate::sim::{GameState, Side};

/// A single paddle move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleCommand {
    pub side: Side,
    /// Signed y offset (negative is up)
    pub delta: f32,
}

impl PaddleCommand {
    pub fn up(side: Side) -> Self {
        Self {
            side,
            delta: -PADDLE_STEP,
        }
    }

    pub fn down(side: Side) -> Self {
        Self {
            side,
            delta: PADDLE_STEP,
        }
    }

    pub fn apply(&self, state: &mut GameState) {
        state.move_paddle(self.side, self.delta);
    }
}

/// Maps key names to paddle moves
#[derive(Debug, Clone, Default)]
pub struct InputController {
    keys: KeyBindings,
}

impl InputController {
    pub fn new(keys: KeyBindings) -> Self {
        Self { keys }
    }

    /// Command bound to `key`, if any
    pub fn command_for(&self, key: &str) -> Option<PaddleCommand> {
        let keys = &self.keys;
        if key == keys.left_up {
            Some(PaddleCommand::up(Side::Left))
        } else if key == keys.left_down {
            Some(PaddleCommand::down(Side::Left))
        } else if key == keys.right_up {
            Some(PaddleCommand::up(Side::Right))
        } else if key == keys.right_down {
            Some(PaddleCommand::down(Side::Right))
        } else {
            None
        }
    }

    /// Handle key down event; returns whether a paddle moved
    pub fn handle_key_down(&self, state: &mut GameState, key: &str) -> bool {
        match self.command_for(key) {
            Some(command) => {
                command.apply(state);
                true
            }
            None => false,
        }
    }
}
