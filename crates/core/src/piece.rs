//! Piece module - the falling tetromino
//!
//! A piece is plain data: a shape, a color and the grid position of its
//! bounding box's top-left corner. Every transform returns a new piece and
//! none of them look at the board; validation is the engine's job.

use crate::shape::Shape;
use crate::source::PieceSource;
use crate::types::{Color, ShapeKind};

/// The currently falling tetromino
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub x: i16,
    pub y: i16,
    pub shape: Shape,
    pub color: Color,
}

impl Piece {
    pub fn new(shape: Shape, color: Color, x: i16, y: i16) -> Self {
        Self { x, y, shape, color }
    }

    /// Spawn position for a grid of the given width: `(width / 2 - 1, 0)`
    pub fn spawn_position(grid_width: u8) -> (i16, i16) {
        (grid_width as i16 / 2 - 1, 0)
    }

    /// Canonical shape of `kind` placed at the spawn position
    pub fn at_spawn(kind: ShapeKind, color: Color, grid_width: u8) -> Self {
        let (x, y) = Self::spawn_position(grid_width);
        Self::new(Shape::canonical(kind), color, x, y)
    }

    /// Draw a shape and a color from `source` and place the piece at the spawn position.
    ///
    /// The spawn position is not checked against the board.
    pub fn spawn<S: PieceSource + ?Sized>(source: &mut S, grid_width: u8) -> Self {
        let (kind, color) = source.draw();
        Self::at_spawn(kind, color, grid_width)
    }

    /// Same piece moved by `(dx, dy)`
    pub fn translate(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece with its shape rotated 90° clockwise, anchored at the same corner
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotate(),
            ..*self
        }
    }

    /// Absolute grid coordinates `(x, y)` of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.shape
            .filled()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}
