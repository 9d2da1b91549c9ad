//! Contact detection between the ball, the arena walls and the paddles
//!
//! All checks work on the ball's center plus or minus its radius, so the ball
//! can sink up to one radius into a wall before the contact registers.

use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle, Side};
use crate::consts::*;

/// Something the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    TopWall,
    BottomWall,
    LeftWall,
    RightWall,
    LeftPaddle,
    RightPaddle,
}

/// Top/bottom wall check
pub fn vertical_wall_contact(ball: &Ball) -> Option<Contact> {
    if ball.bottom() > ARENA_HEIGHT {
        Some(Contact::BottomWall)
    } else if ball.top() < 0.0 {
        Some(Contact::TopWall)
    } else {
        None
    }
}

pub fn right_wall_contact(ball: &Ball) -> bool {
    ball.right() > ARENA_WIDTH
}

pub fn left_wall_contact(ball: &Ball) -> bool {
    ball.left() < 0.0
}

/// Ball overlaps the paddle's face and its center is strictly within the
/// paddle's vertical span
pub fn paddle_contact(ball: &Ball, paddle: &Paddle) -> bool {
    let reaches_face = match paddle.side {
        Side::Left => ball.left() < PADDLE_WIDTH,
        Side::Right => ball.right() > ARENA_WIDTH - PADDLE_WIDTH,
    };
    reaches_face && ball.pos.y > paddle.y && ball.pos.y < paddle.bottom()
}
