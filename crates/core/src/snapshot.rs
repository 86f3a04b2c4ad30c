//! Snapshot module - read-only game state for renderers
//!
//! A snapshot copies the locked grid and the falling piece's absolute cells
//! out of `GameState`, so a renderer never borrows the engine. `snapshot_into`
//! refills an existing snapshot without reallocating.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::shape::Shape;
use crate::types::{Cell, Color, GRID_HEIGHT, GRID_WIDTH, MAX_SHAPE_DIM};

/// Absolute grid cells of a shape; a 4x4 box is the most any shape can fill
pub type PieceCells = ArrayVec<(i16, i16), { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub x: i16,
    pub y: i16,
    pub shape: Shape,
    pub color: Color,
    pub cells: PieceCells,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            x: value.x,
            y: value.y,
            shape: value.shape,
            color: value.color,
            cells: value.cells().collect(),
        }
    }
}

/// Read-only view of the game handed to renderers.
///
/// `grid` holds locked cells only, row-major; the falling piece is reported
/// separately in `active`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    pub grid: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Empty snapshot with the given dimensions
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            grid: vec![None; width as usize * height as usize],
            active: None,
            game_over: false,
        }
    }

    /// Locked cell at (x, y), `None` when empty or out of bounds
    pub fn cell(&self, x: i16, y: i16) -> Cell {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        self.grid[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Color at (x, y) as it should be drawn: the falling piece wins over the grid
    pub fn visible_cell(&self, x: i16, y: i16) -> Cell {
        if let Some(active) = &self.active {
            if active.cells.contains(&(x, y)) {
                return Some(active.color);
            }
        }
        self.cell(x, y)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}
