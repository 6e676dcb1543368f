//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the falling-block game. It has no
//! dependencies on terminals, rendering or I/O:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Synchronous**: every tick or action finishes its locking, clearing and
//!   spawning before it returns
//! - **Allocation-free** on the tick and action paths
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, row-full detection, row clearing and compaction
//! - [`pieces`]: canonical shapes and per-kind rotation rules
//! - [`piece`]: the falling piece as a value type
//! - [`placement`]: legality checks shared by every command
//! - [`rng`]: 7-bag queue with one bag of lookahead
//! - [`game_state`]: the state machine driving it all
//! - [`snapshot`]: read-only view for renderers
//!
//! # Rules
//!
//! - Pieces spawn with their anchor at column 4, row 1.
//! - Gravity moves the piece one row every 250ms, or every 100ms while soft
//!   drop is held.
//! - A piece locks as soon as a gravity step or hard drop cannot move it down.
//! - Each cleared row scores 100 points.
//! - The game ends when a new piece overlaps the stack; only a reset restarts it.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.piece_id(), 2);
//! assert!(!game.game_over());
//! ```
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds.

pub mod board;
pub mod config;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod placement;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use game_state::{GamePhase, GameState};
pub use piece::{Extent, Tetromino};
pub use pieces::{rotate_shape, rotation_rule, spawn_shape, PieceShape, RotationRule};
pub use placement::is_legal;
pub use rng::PieceQueue;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
