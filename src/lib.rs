//! Falling blocks (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so integration tests, benches
//! and the binary can address everything as `falling_blocks::{core,engine,input,term,types}`.

pub use falling_blocks_core as core;
pub use falling_blocks_engine as engine;
pub use falling_blocks_input as input;
pub use falling_blocks_term as term;
pub use falling_blocks_types as types;
