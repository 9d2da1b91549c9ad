//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - No randomness
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Contact, paddle_contact};
pub use state::{Ball, GameState, Paddle, Side, max_paddle_y};
pub use tick::{Contacts, tick};
