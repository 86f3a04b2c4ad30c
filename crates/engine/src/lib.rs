//! Driver-side plumbing for the falling-block engine.
//!
//! The engine in `falling_blocks_core` knows nothing about time. This crate
//! supplies what a front end needs to run it: validated configuration, a fall
//! timer that turns elapsed wall-clock time into ticks, a frame pacer, and a
//! [`Session`] bundling state and timer. Nothing here performs I/O.

pub mod clock;
pub mod config;
pub mod session;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use clock::{FallTimer, FramePacer};
pub use config::{ConfigError, GameConfig};
pub use session::Session;
