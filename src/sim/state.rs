//! Game state and core simulation types
//!
//! Everything the frame callback and the key handler share lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which player a paddle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position (origin top-left, y grows downward)
    pub pos: Vec2,
    /// Velocity in units per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at the mount position, heading down-right
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(
                ARENA_WIDTH / 2.0 - BALL_RADIUS / 2.0,
                ARENA_HEIGHT / 2.0 - BALL_RADIUS / 2.0,
            ),
            vel: Vec2::splat(BALL_SPEED),
            radius: BALL_RADIUS,
        }
    }

    /// Leftmost extent of the ball
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// A player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top edge
    pub y: f32,
}

impl Paddle {
    /// Paddle vertically centered in the arena
    pub fn centered(side: Side) -> Self {
        Self {
            side,
            y: ARENA_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0,
        }
    }

    /// Fixed x position of the paddle's left edge
    pub fn x(&self) -> f32 {
        match self.side {
            Side::Left => 0.0,
            Side::Right => ARENA_WIDTH - PADDLE_WIDTH,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        PADDLE_WIDTH
    }

    #[inline]
    pub fn height(&self) -> f32 {
        PADDLE_HEIGHT
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + PADDLE_HEIGHT
    }

    /// Move by `delta`, keeping the paddle fully inside the arena
    pub fn move_by(&mut self, delta: f32) {
        debug_assert!(delta.is_finite(), "paddle delta must be finite, got {delta}");
        self.y = (self.y + delta).clamp(0.0, max_paddle_y());
    }
}

/// Largest legal top edge for a paddle
#[inline]
pub fn max_paddle_y() -> f32 {
    ARENA_HEIGHT - PADDLE_HEIGHT
}

/// Complete geometry of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create the mount-time state: ball and both paddles centered
    pub fn new() -> Self {
        Self {
            ball: Ball::new(),
            left: Paddle::centered(Side::Left),
            right: Paddle::centered(Side::Right),
            time_ticks: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Move one paddle, clamped to `[0, ARENA_HEIGHT - PADDLE_HEIGHT]`
    pub fn move_paddle(&mut self, side: Side, delta: f32) {
        self.paddle_mut(side).move_by(delta);
    }

    /// Advance the ball by one tick and resolve its contacts
    pub fn step_ball(&mut self) -> super::Contacts {
        super::tick(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
