//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Each key
//! press produces at most one intent; auto-repeat and release events are
//! dropped, so holding a key never repeats a move.

pub mod map;

pub use falling_blocks_types as types;

pub use map::{action_for_event, handle_key_event, should_quit};
