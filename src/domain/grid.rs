use std::fmt;

use log::debug;
use rand::Rng;

use super::{Cell, Coord, GridError};

/// Grid owns the bounded 2D array of cell states.
/// Edges do not wrap: positions outside `[0, width) x [0, height)` do not exist.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        let addressable = i32::try_from(width).is_ok() && i32::try_from(height).is_ok();
        let len = width
            .checked_mul(height)
            .filter(|_| addressable)
            .ok_or(GridError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Build a grid of the same shape from a row-major cell buffer
    pub(crate) fn with_cells(&self, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Whether the coordinate names a cell of this grid
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert 2D coordinates to the row-major index
    fn index_of(&self, x: i32, y: i32) -> Result<usize, GridError> {
        if !self.contains(Coord::new(x, y)) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width + x as usize)
    }

    /// State of the cell at `(x, y)`
    pub fn status(&self, x: i32, y: i32) -> Result<Cell, GridError> {
        self.index_of(x, y).map(|idx| self.cells[idx])
    }

    /// Overwrite the state of the cell at `(x, y)`
    pub fn set_status(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), GridError> {
        let idx = self.index_of(x, y)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip the cell at `(x, y)` and return its new state
    pub fn toggle(&mut self, x: i32, y: i32) -> Result<Cell, GridError> {
        let idx = self.index_of(x, y)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(self.cells[idx])
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(idx, &cell)| {
            let coord = Coord::new((idx % width) as i32, (idx / width) as i32);
            (coord, cell)
        })
    }

    /// Visit every cell as `visitor(x, y, state)`, `y` ascending then `x` ascending
    pub fn for_each_cell<F>(&self, mut visitor: F)
    where
        F: FnMut(i32, i32, Cell),
    {
        self.iter_cells()
            .for_each(|(coord, cell)| visitor(coord.x, coord.y, cell));
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Set every cell to dead
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
        debug!("cleared {}x{} grid", self.width, self.height);
    }

    /// Independently make each cell alive with probability `alive_probability`.
    /// Values at or below 0 leave everything dead, values at or above 1 fill the grid.
    pub fn randomize<R>(&mut self, rng: &mut R, alive_probability: f64)
    where
        R: Rng + ?Sized,
    {
        self.cells.iter_mut().for_each(|cell| {
            *cell = Cell::from(rng.random::<f64>() < alive_probability);
        });
        debug!(
            "randomized grid with p={alive_probability}, population {}",
            self.population()
        );
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                f.write_str(if cell.is_alive() { "O" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
