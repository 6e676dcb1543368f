//! Terminal rendering layer.
//!
//! A small, game-oriented renderer: [`GameView`] maps a read-only
//! `GameSnapshot` into a framebuffer of styled character cells, and
//! [`TerminalRenderer`] flushes that framebuffer to the terminal. The view
//! never touches game state, it only reads the snapshot.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
