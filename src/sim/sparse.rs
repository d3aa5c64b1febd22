//! Sparse coordinate-set grid for the variable-size text-driven path.

use std::collections::HashSet;

use super::grid::{CellView, GridError, live_neighbors, next_state};

/// Toroidal grid stored as a set of live coordinates.
///
/// Used when the grid arrives as plain-text (row, col) pairs and the
/// extent is inferred rather than configured. The step rule is identical
/// to the dense [`Grid`](super::Grid); only the storage differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseGrid {
    rows: usize,
    cols: usize,
    alive: HashSet<(usize, usize)>,
}

impl SparseGrid {
    /// Build from live coordinates with an explicit extent.
    pub fn with_extent(
        rows: usize,
        cols: usize,
        cells: &[(usize, usize)],
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let mut alive = HashSet::with_capacity(cells.len());
        for &(row, col) in cells {
            if row >= rows || col >= cols {
                return Err(GridError::OutOfBounds {
                    row,
                    col,
                    rows,
                    cols,
                });
            }
            alive.insert((row, col));
        }
        Ok(Self { rows, cols, alive })
    }

    /// Build from live coordinates, inferring the extent as the maximum
    /// coordinate plus one in each axis.
    pub fn from_coords(cells: &[(usize, usize)]) -> Result<Self, GridError> {
        let rows = cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let cols = cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        Self::with_extent(rows, cols, cells)
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.alive.len()
    }

    /// Live coordinates in row-major order.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = self.alive.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    /// Compute the next generation over the fixed extent.
    pub fn step(&self) -> SparseGrid {
        let mut alive = HashSet::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let count = live_neighbors(self, row, col);
                if next_state(self.alive.contains(&(row, col)), count) {
                    alive.insert((row, col));
                }
            }
        }
        SparseGrid {
            rows: self.rows,
            cols: self.cols,
            alive,
        }
    }
}

impl CellView for SparseGrid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn alive(&self, row: usize, col: usize) -> bool {
        self.alive.contains(&(row, col))
    }
}
