//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Movement,
//! rotation, hard drop and reset fire once per press; soft drop is a held
//! modifier, so [`InputHandler`] turns press/repeat/release into a
//! `SoftDropOn`/`SoftDropOff` pair, with a timeout for terminals that never
//! report key releases.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, is_soft_drop_key, should_quit};
