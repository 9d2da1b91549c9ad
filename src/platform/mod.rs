//! Platform abstraction layer
//!
//! Turns [`crate::game_loop::Transition`]s and [`crate::game_loop::Teardown`]s
//! into real frame requests and listener registrations:
//! - `web`: `requestAnimationFrame` and DOM `keydown` on wasm32
//! - `headless`: a manual frame pump for native runs and tests

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::HeadlessSession;
