//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole game-state engine: the grid, the falling
//! piece, collision rules, rotation, locking and row clearing. It has **no
//! dependencies** on terminals, clocks or I/O, which keeps it:
//!
//! - **Deterministic**: pieces come from an injected [`PieceSource`]; the same seed replays the same game
//! - **Testable**: every rule is a plain method call on plain data
//! - **Portable**: the terminal driver is only one possible front end
//!
//! # Module Structure
//!
//! - [`board`]: the playfield grid, placement validity, locking and row clearing
//! - [`game_state`]: the engine - falling piece, gravity tick, intents, game over
//! - [`piece`]: the falling tetromino and its unchecked transforms
//! - [`shape`]: bounding-box matrices of the seven shapes and their rotation
//! - [`source`]: injectable randomness for new pieces
//! - [`snapshot`]: read-only state handed to renderers
//!
//! # Game Rules
//!
//! - New pieces appear at `(width / 2 - 1, 0)` with a uniformly random shape and color
//! - A move or rotation is applied only if the result fits; otherwise nothing happens
//! - Rotation is 90° clockwise about the bounding box, with no wall kicks
//! - On each tick the piece falls one row; if it cannot, it locks, full rows
//!   clear, and the next piece spawns
//! - The game ends when a freshly spawned piece does not fit
//!
//! # Example
//!
//! ```
//! use falling_blocks_core::{GameState, TickOutcome};
//! use falling_blocks_core::types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! assert_eq!(game.tick(), TickOutcome::Fell);
//!
//! let snap = game.snapshot();
//! assert!(!snap.game_over);
//! ```
//!
//! # Timing
//!
//! The engine has no notion of time. The driver decides when a fall interval
//! has elapsed and calls [`GameState::tick`](game_state::GameState::tick).

pub mod board;
pub mod game_state;
pub mod piece;
pub mod shape;
pub mod snapshot;
pub mod source;

pub use falling_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, LockEvent, TickOutcome};
pub use piece::Piece;
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot, PieceCells};
pub use source::{PieceSource, RandomSource, ScriptedSource};
