pub mod cell;

pub use cell::{Cell, Direction, Link};

use crate::error::{MazeError, Result};

/// Every search starts in the top-left cell.
pub const START_CELL: usize = 0;

/// A `rows` x `cols` grid graph. Cells are stored in a flat array indexed by
/// `row * cols + col`, and neighbors refer to each other by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Box<[Cell]>,
    rows: usize,
    cols: usize,
}

impl Maze {
    /// Creates a grid graph with every link closed.
    /// Neighbor indices are derived from the grid geometry only.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let cells = (0..rows * cols)
            .map(|idx| Cell::at(idx, rows, cols))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Ok(Maze { cells, rows, cols })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, a maze has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Index of the top-left cell where every search starts.
    pub fn start(&self) -> usize {
        START_CELL
    }

    /// Index of the bottom-right cell every search is looking for.
    pub fn goal(&self) -> usize {
        self.cells.len() - 1
    }

    /// Converts a linear index into `(row, col)`.
    pub fn coords(&self, idx: usize) -> (usize, usize) {
        (idx / self.cols, idx % self.cols)
    }

    pub fn cell(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the neighbor of `idx` in `direction`, open or not.
    pub fn neighbor(&self, idx: usize, direction: Direction) -> Option<usize> {
        self.cells[idx].link(direction).neighbor
    }

    /// Checks whether a passage leads out of `idx` in `direction`.
    pub fn is_open(&self, idx: usize, direction: Direction) -> bool {
        self.cells[idx].link(direction).passable().is_some()
    }

    /// Neighbors reachable from `idx` through open links, in the given order.
    pub fn open_neighbors(
        &self,
        idx: usize,
        order: [Direction; 4],
    ) -> impl Iterator<Item = usize> + '_ {
        let cell = &self.cells[idx];
        order
            .into_iter()
            .filter_map(move |direction| cell.link(direction).passable())
    }

    /// Manhattan distance from `idx` to the goal cell.
    pub fn manhattan_to_goal(&self, idx: usize) -> usize {
        let (row, col) = self.coords(idx);
        (self.rows - 1 - row) + (self.cols - 1 - col)
    }

    /// Counts carved passages, each undirected passage once.
    pub fn open_link_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| cell.right.open as usize + cell.bottom.open as usize)
            .sum()
    }

    /// Carves a passage between two adjacent cells, in both directions.
    ///
    /// # Panics
    /// * If `a` or `b` is out of bounds
    /// * If `a` and `b` are not geometric neighbors
    pub(crate) fn open_link(&mut self, a: usize, b: usize) {
        let direction = Direction::ALL
            .into_iter()
            .find(|&d| self.cells[a].link(d).neighbor == Some(b))
            .unwrap_or_else(|| panic!("Cells {a} and {b} are not adjacent"));
        self.cells[a].link_mut(direction).open = true;
        self.cells[b].link_mut(direction.opposite()).open = true;
    }
}
