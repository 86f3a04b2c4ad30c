//! Terminal rendering for the falling-blocks game.
//!
//! Rendering is split in two: [`game_view`] turns a [`core::GameSnapshot`] into
//! a plain [`FrameBuffer`] with no I/O, and [`renderer`] flushes framebuffers
//! to the terminal, re-sending only the cells that changed.
//!
//! Board cells default to two terminal columns wide so the grid looks square
//! in most fonts.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport, MAX_CELL_WIDTH};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
