//! Discrete coordinate space of the play field.

use rand::Rng;

/// A cell on the grid. Row 0 is the top of the window.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// Returns the cell offset by `(dx, dy)`, without wrapping.
    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Grid dimensions in cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Grid {
    pub cols: i32,
    pub rows: i32,
}

impl Grid {
    /// Derives the grid covering a `width` x `height` pixel area.
    pub const fn from_screen(width: u32, height: u32, cell_size: u32) -> Self {
        Grid {
            cols: (width / cell_size) as i32,
            rows: (height / cell_size) as i32,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.cols).contains(&cell.x) && (0..self.rows).contains(&cell.y)
    }

    /// Brings a cell that stepped off one edge back in at the opposite edge.
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell {
            x: cell.x.rem_euclid(self.cols),
            y: cell.y.rem_euclid(self.rows),
        }
    }

    /// Draws a cell uniformly from the whole grid.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell {
            x: rng.random_range(0..self.cols),
            y: rng.random_range(0..self.rows),
        }
    }
}
