//! Display list generation for 2D primitives

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::Palette;
use crate::sim::{GameState, Paddle};

/// One filled primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: String,
    },
    Circle {
        x: f32,
        y: f32,
        r: f32,
        color: String,
    },
}

fn rect(x: f32, y: f32, w: f32, h: f32, color: &str) -> DrawCommand {
    DrawCommand::Rect {
        x,
        y,
        w,
        h,
        color: color.to_string(),
    }
}

/// Dashed vertical line down the middle of the arena
pub fn net(color: &str) -> Vec<DrawCommand> {
    let x = ARENA_WIDTH / 2.0 - NET_WIDTH / 2.0;
    let dashes = (ARENA_HEIGHT / NET_SPACING).ceil() as usize;
    (0..dashes)
        .map(|i| rect(x, i as f32 * NET_SPACING, NET_WIDTH, NET_DASH_LENGTH, color))
        .collect()
}

pub fn paddle(paddle: &Paddle, color: &str) -> DrawCommand {
    rect(paddle.x(), paddle.y, paddle.width(), paddle.height(), color)
}

/// Full frame, back to front: background, net, left paddle, right paddle, ball
pub fn frame(state: &GameState, palette: &Palette) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(32);
    commands.push(rect(0.0, 0.0, ARENA_WIDTH, ARENA_HEIGHT, &palette.background));
    commands.extend(net(&palette.net));
    commands.push(paddle(&state.left, &palette.left));
    commands.push(paddle(&state.right, &palette.right));
    commands.push(DrawCommand::Circle {
        x: state.ball.pos.x,
        y: state.ball.pos.y,
        r: state.ball.radius,
        color: palette.left.clone(),
    });
    commands
}
