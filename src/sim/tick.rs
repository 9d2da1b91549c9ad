//! Fixed-step physics
//!
//! One call advances the ball by its velocity and resolves contacts. There is
//! no scoring and no respawn: a ball that slips past a paddle keeps going
//! until a wall check turns it around.

use serde::{Deserialize, Serialize};

use super::collision::{
    Contact, left_wall_contact, paddle_contact, right_wall_contact, vertical_wall_contact,
};
use super::state::GameState;

/// Contacts resolved during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contacts {
    /// Top or bottom wall (inverts vy)
    pub vertical: Option<Contact>,
    /// Wall or paddle that inverted vx
    pub horizontal: Option<Contact>,
}

impl Contacts {
    pub fn is_empty(&self) -> bool {
        self.vertical.is_none() && self.horizontal.is_none()
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) -> Contacts {
    state.time_ticks += 1;

    let ball = &mut state.ball;
    ball.pos += ball.vel;

    let mut contacts = Contacts::default();

    if let Some(wall) = vertical_wall_contact(ball) {
        ball.vel.y = -ball.vel.y;
        contacts.vertical = Some(wall);
    }

    // Paddle contacts are reported ahead of the wall behind them. However many
    // conditions hold, vx flips once.
    let horizontal = if paddle_contact(ball, &state.left) {
        Some(Contact::LeftPaddle)
    } else if paddle_contact(ball, &state.right) {
        Some(Contact::RightPaddle)
    } else if right_wall_contact(ball) {
        Some(Contact::RightWall)
    } else if left_wall_contact(ball) {
        Some(Contact::LeftWall)
    } else {
        None
    };

    if let Some(contact) = horizontal {
        ball.vel.x = -ball.vel.x;
        contacts.horizontal = Some(contact);
    }

    if !contacts.is_empty() {
        log::trace!(
            "tick {}: {:?} at ({:.1}, {:.1})",
            state.time_ticks,
            contacts,
            ball.pos.x,
            ball.pos.y
        );
    }

    contacts
}
