//! Rendering module
//!
//! Every frame is rebuilt from scratch as a display list and replayed onto a
//! [`Surface`]. The renderer holds no state of its own.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use shapes::DrawCommand;

use crate::settings::Palette;
use crate::sim::GameState;

/// Something that can fill rectangles and circles
pub trait Surface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &str);

    /// Replay a display list in order
    fn draw(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            match command {
                DrawCommand::Rect { x, y, w, h, color } => self.fill_rect(*x, *y, *w, *h, color),
                DrawCommand::Circle { x, y, r, color } => self.fill_circle(*x, *y, *r, color),
            }
        }
    }
}

/// Draw the full arena for `state`
pub fn render<S: Surface + ?Sized>(surface: &mut S, state: &GameState, palette: &Palette) {
    surface.draw(&shapes::frame(state, palette));
}

/// Surface that keeps what was drawn on the most recent frame
///
/// A background fill covering the whole arena starts a new frame.
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands drawn since the last full clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of full-arena clears seen
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Last circle drawn, as (x, y)
    pub fn ball_position(&self) -> Option<(f32, f32)> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Circle { x, y, .. } => Some((*x, *y)),
            _ => None,
        })
    }
}

impl Surface for CommandRecorder {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

        if x == 0.0 && y == 0.0 && w >= ARENA_WIDTH && h >= ARENA_HEIGHT {
            self.commands.clear();
            self.frames += 1;
        }
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            r,
            color: color.to_string(),
        });
    }
}
