//! Shared types and constants for the falling-block game.
//!
//! Everything here is plain data with no dependencies so that the engine, the
//! input mapping and the terminal renderer can all agree on the same vocabulary.
//!
//! # Playfield
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: `(GRID_WIDTH / 2 - 1, 0)`, i.e. `(4, 0)` on the default grid
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_INTERVAL_MS` | 500 | Simulated time between automatic one-row descents |
//! | `FRAME_RATE` | 60 | Upper bound on rendered frames per second |
//! | `GAME_OVER_PAUSE_MS` | 2000 | How long the game-over banner stays up before exit |
//!
//! # Examples
//!
//! ```
//! use falling_blocks_types::{Color, ShapeKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//!
//! assert_eq!(ShapeKind::ALL.len(), 7);
//! assert_eq!(Color::Orange.rgb(), (255, 165, 0));
//! ```

/// Default playfield width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Default playfield height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Default fall interval in milliseconds (0.5s per row)
pub const FALL_INTERVAL_MS: u32 = 500;

/// Default frame-rate cap for the driver loop
pub const FRAME_RATE: u32 = 60;

/// Time the game-over banner is shown before the driver exits
pub const GAME_OVER_PAUSE_MS: u32 = 2000;

/// Largest bounding box any shape can occupy (4x4 covers every rotation of the I piece)
pub const MAX_SHAPE_DIM: usize = 4;

/// Narrowest accepted playfield: the spawn anchor `(w / 2 - 1)` must leave room
/// for the four columns of a horizontal I
pub const MIN_GRID_WIDTH: u8 = 5;

/// Shortest accepted playfield
pub const MIN_GRID_HEIGHT: u8 = 4;

/// Largest accepted playfield dimension
pub const MAX_GRID_DIM: u8 = 64;


/// The seven canonical tetromino shapes.
///
/// Matrices (row 0 first, `#` filled):
/// - **I**: `####`
/// - **O**: `##` / `##`
/// - **T**: `###` / `.#.`
/// - **L**: `###` / `#..`
/// - **J**: `###` / `..#`
/// - **Z**: `##.` / `.##`
/// - **S**: `.##` / `##.`
///
/// A shape kind says nothing about color: colors are drawn independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    L,
    J,
    Z,
    S,
}

impl ShapeKind {
    /// Every shape kind, in a fixed order used for uniform selection
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::Z,
        ShapeKind::S,
    ];
}

/// Fill color of a piece or a locked cell.
///
/// The engine only ever asks whether a cell is empty; the palette and its RGB
/// values exist for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Magenta,
    Red,
    Green,
    Blue,
    Orange,
}

impl Color {
    /// The fixed palette pieces are colored from
    pub const PALETTE: [Color; 7] = [
        Color::Cyan,
        Color::Yellow,
        Color::Magenta,
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Orange,
    ];

    /// 24-bit RGB value used when drawing
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Cyan => (0, 255, 255),
            Color::Yellow => (255, 255, 0),
            Color::Magenta => (255, 0, 255),
            Color::Red => (255, 0, 0),
            Color::Green => (0, 255, 0),
            Color::Blue => (0, 0, 255),
            Color::Orange => (255, 165, 0),
        }
    }
}

/// A cell on the playfield
///
/// - `None`: empty
/// - `Some(Color)`: occupied by a locked block of that color
pub type Cell = Option<Color>;

/// Player intents accepted by the engine
///
/// Each one is produced by a single discrete key press; held keys do not repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one row down
    SoftDrop,
    /// Rotate piece 90° clockwise around its bounding box
    Rotate,
    /// Start a fresh game (only honored after game over)
    Restart,
}

impl GameAction {
    pub const ALL: [GameAction; 5] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
        GameAction::Restart,
    ];
}
