//! Board module - manages the playfield grid
//!
//! The board is a `height x width` grid (20x10 by default) where each cell is
//! either empty or holds the color of a locked block. Storage is a flat,
//! row-major buffer allocated once at construction and never resized.
//! Coordinates: (x, y) where x grows to the right and y grows downward; row 0 is the top.

use crate::piece::Piece;
use crate::types::{Cell, GRID_HEIGHT, GRID_WIDTH};

/// The playfield - locked cells only, the falling piece lives in `GameState`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether `piece`, shifted by `(dx, dy)`, fits on the board.
    ///
    /// A filled cell is rejected when it lands left of column 0, right of the
    /// last column, below the last row, or on an occupied cell. Cells above the
    /// top edge (`y < 0`) only have to respect the side walls.
    pub fn is_valid_position(&self, piece: &Piece, dx: i16, dy: i16) -> bool {
        piece.cells().all(|(x, y)| {
            let (x, y) = (x + dx, y + dy);
            if x < 0 || x >= self.width as i16 || y >= self.height as i16 {
                return false;
            }
            y < 0 || !self.is_occupied(x, y)
        })
    }

    /// Write every filled cell of `piece` into the grid with the piece's color.
    ///
    /// The caller is responsible for the position being valid. Cells that fall
    /// outside the grid are skipped. Returns the number of cells written.
    pub fn lock(&mut self, piece: &Piece) -> usize {
        let color = Some(piece.color);
        let mut written = 0;
        for (x, y) in piece.cells() {
            if self.set(x, y, color) {
                written += 1;
            }
        }
        written
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Cells of row `y`
    ///
    /// # Panics
    ///
    /// Panics if `y` is not a valid row index.
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Remove every complete row and drop the rows above into the gap.
    ///
    /// Remaining rows keep their relative order and move down by the number of
    /// complete rows that were below them; the same number of empty rows appear
    /// at the top. Returns how many rows were cleared.
    pub fn clear_completed_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_y = height;
        let mut cleared = 0;

        // Scan from bottom to top, compacting incomplete rows downward
        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Number of occupied cells on the whole board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}
