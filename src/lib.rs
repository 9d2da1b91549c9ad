//! Vaporwave Pong - A two-player paddle-and-ball game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, physics step)
//! - `input`: Keyboard bindings to paddle moves
//! - `renderer`: Display list generation and drawing surfaces
//! - `game_loop`: Start/stop lifecycle and frame scheduling tokens
//! - `platform`: Browser/headless drivers

pub mod game_loop;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game_loop::{FrameToken, GameLoop, RunState};
pub use settings::{KeyBindings, Palette, Settings};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (logical canvas pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    /// Paddle defaults - left paddle hugs x = 0, right paddle hugs the far wall
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Distance a paddle travels per key press
    pub const PADDLE_STEP: f32 = 6.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-axis ball speed (units per tick); only the sign ever changes
    pub const BALL_SPEED: f32 = 4.0;

    /// Center net dashes
    pub const NET_SPACING: f32 = 15.0;
    pub const NET_DASH_LENGTH: f32 = 10.0;
    pub const NET_WIDTH: f32 = 2.0;
}
