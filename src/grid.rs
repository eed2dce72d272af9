//! Cell storage for the cleaning area.

use serde::{Deserialize, Serialize};

/// Glyph drawn over the cell the robot currently occupies.
pub const ROBOT_GLYPH: char = 'R';

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Free floor with nothing to clean.
    #[default]
    Empty,
    /// Floor that still needs cleaning.
    Dirt,
    /// Impassable cell. The robot can never stand here.
    Obstacle,
    /// Floor that held dirt and has been cleaned.
    Cleaned,
}

impl Cell {
    /// Returns the legend glyph used when rendering this cell.
    pub fn legend(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Dirt => '*',
            Self::Obstacle => '#',
            Self::Cleaned => '~',
        }
    }
}

/// Tally of cells by state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCounts {
    /// Free floor cells.
    pub empty: usize,
    /// Cells still holding dirt.
    pub dirt: usize,
    /// Impassable cells.
    pub obstacle: usize,
    /// Cells cleaned so far.
    pub cleaned: usize,
}

impl CellCounts {
    /// Total number of cells counted.
    pub fn total(&self) -> usize {
        self.empty + self.dirt + self.obstacle + self.cleaned
    }
}

/// A fixed-size rectangular grid of [`Cell`]s.
///
/// Cells are stored densely in row-major order (`y * width + x`). All accessors
/// take signed coordinates; anything outside `[0, width) x [0, height)` reads as
/// "nothing there" and writes are dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Largest supported width or height. Coordinates are `i32`, so every cell
    /// must stay addressable by one.
    pub const MAX_DIMENSION: usize = i32::MAX as usize;

    /// Returns `true` if a `width x height` grid can be addressed and allocated.
    pub fn supports_size(width: usize, height: usize) -> bool {
        width <= Self::MAX_DIMENSION
            && height <= Self::MAX_DIMENSION
            && width
                .checked_mul(height)
                .is_some_and(|n| n <= isize::MAX as usize)
    }

    /// Creates a grid where every cell is [`Cell::Empty`], or `None` if the
    /// size is not supported (see [`supports_size`](Self::supports_size)).
    pub fn try_new(width: usize, height: usize) -> Option<Self> {
        if !Self::supports_size(width, height) {
            return None;
        }
        Some(Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    /// Creates a grid where every cell is [`Cell::Empty`].
    ///
    /// # Panics
    ///
    /// Panics if either dimension exceeds [`MAX_DIMENSION`](Self::MAX_DIMENSION)
    /// or the cell count overflows. Use [`try_new`](Self::try_new) for sizes
    /// that come from untrusted input.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Some(grid) => grid,
            None => panic!("unsupported grid size {width}x{height}"),
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` iff `(x, y)` lies inside the grid.
    #[inline]
    pub fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_in_bounds(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    /// Returns the cell at `(x, y)`, or `None` when out of bounds.
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns `true` if `(x, y)` is in bounds and holds dirt.
    pub fn is_dirt(&self, x: i32, y: i32) -> bool {
        self.cell(x, y) == Some(Cell::Dirt)
    }

    /// Returns `true` if `(x, y)` is in bounds and holds an obstacle.
    pub fn is_obstacle(&self, x: i32, y: i32) -> bool {
        self.cell(x, y) == Some(Cell::Obstacle)
    }

    fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Places an obstacle at `(x, y)`, discarding whatever was there.
    pub fn add_obstacle(&mut self, x: i32, y: i32) {
        self.set(x, y, Cell::Obstacle);
    }

    /// Places dirt at `(x, y)`, discarding whatever was there.
    pub fn add_dirt(&mut self, x: i32, y: i32) {
        self.set(x, y, Cell::Dirt);
    }

    /// Marks `(x, y)` as cleaned.
    ///
    /// This does not check that the cell held dirt; [`Robot::clean_current_spot`]
    /// is the caller that applies that gate.
    ///
    /// [`Robot::clean_current_spot`]: crate::robot::Robot::clean_current_spot
    pub fn clean(&mut self, x: i32, y: i32) {
        self.set(x, y, Cell::Cleaned);
    }

    /// Tallies every cell by state.
    pub fn counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for cell in &self.cells {
            match cell {
                Cell::Empty => counts.empty += 1,
                Cell::Dirt => counts.dirt += 1,
                Cell::Obstacle => counts.obstacle += 1,
                Cell::Cleaned => counts.cleaned += 1,
            }
        }
        counts
    }

    /// Number of cells still holding dirt.
    pub fn remaining_dirt(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Dirt).count()
    }

    /// Returns `true` once no dirt is left anywhere.
    pub fn is_clean(&self) -> bool {
        self.remaining_dirt() == 0
    }
}
