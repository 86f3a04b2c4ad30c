//! Shape module - tetromino bounding-box matrices and rotation
//!
//! A shape is an explicit boolean matrix of at most 4x4 cells. Rotation is a
//! pure bounding-box transform: reverse the row order, then transpose. There is
//! no rotation state, no pivot and no kick table; a W x H shape simply becomes
//! an H x W shape anchored at the same top-left corner.

use crate::types::{ShapeKind, MAX_SHAPE_DIM};

type Bits = [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];

/// Fixed-capacity 2D boolean matrix describing which cells of a bounding box are filled.
///
/// Cells outside `rows x cols` are always `false`, so derived equality compares
/// only the meaningful part of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: Bits,
}

const fn matrix<const R: usize, const C: usize>(m: [[u8; C]; R]) -> Shape {
    let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
    let mut r = 0;
    while r < R {
        let mut c = 0;
        while c < C {
            bits[r][c] = m[r][c] != 0;
            c += 1;
        }
        r += 1;
    }
    Shape {
        rows: R as u8,
        cols: C as u8,
        bits,
    }
}

const I_SHAPE: Shape = matrix([[1, 1, 1, 1]]);
const O_SHAPE: Shape = matrix([[1, 1], [1, 1]]);
const T_SHAPE: Shape = matrix([[1, 1, 1], [0, 1, 0]]);
const L_SHAPE: Shape = matrix([[1, 1, 1], [1, 0, 0]]);
const J_SHAPE: Shape = matrix([[1, 1, 1], [0, 0, 1]]);
const Z_SHAPE: Shape = matrix([[1, 1, 0], [0, 1, 1]]);
const S_SHAPE: Shape = matrix([[0, 1, 1], [1, 1, 0]]);

impl Shape {
    /// Spawn orientation of a canonical shape
    pub const fn canonical(kind: ShapeKind) -> Shape {
        match kind {
            ShapeKind::I => I_SHAPE,
            ShapeKind::O => O_SHAPE,
            ShapeKind::T => T_SHAPE,
            ShapeKind::L => L_SHAPE,
            ShapeKind::J => J_SHAPE,
            ShapeKind::Z => Z_SHAPE,
            ShapeKind::S => S_SHAPE,
        }
    }

    /// Build a shape from rows of 0/1 values.
    ///
    /// Returns `None` for an empty matrix, ragged rows, or anything larger than 4x4.
    ///
    /// ```
    /// use falling_blocks_core::Shape;
    /// use falling_blocks_core::types::ShapeKind;
    ///
    /// let t = Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]).unwrap();
    /// assert_eq!(t, Shape::canonical(ShapeKind::T));
    /// assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Option<Shape> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height == 0 || width == 0 || height > MAX_SHAPE_DIM || width > MAX_SHAPE_DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                bits[r][c] = v != 0;
            }
        }
        Some(Shape {
            rows: height as u8,
            cols: width as u8,
            bits,
        })
    }

    /// Number of rows in the bounding box
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// Number of columns in the bounding box
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the cell at (`row`, `col`) is filled. Out-of-box cells are empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.bits[row][col]
    }

    /// Offsets `(dx, dy)` of every filled cell relative to the top-left corner,
    /// in row-major order.
    pub fn filled(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        (0..self.rows()).flat_map(move |r| {
            (0..self.cols())
                .filter(move |&c| self.bits[r][c])
                .map(move |c| (c as i16, r as i16))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }

    /// Rotate 90° clockwise: reverse the row order, then transpose.
    ///
    /// The result has `cols` rows and `rows` columns. Applying this four times
    /// yields the original shape exactly.
    pub fn rotate(&self) -> Shape {
        let (h, w) = (self.rows(), self.cols());
        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, out_row) in bits.iter_mut().enumerate().take(w) {
            for (c, out) in out_row.iter_mut().enumerate().take(h) {
                *out = self.bits[h - 1 - c][r];
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }
}
