//! Dense toroidal grid and the Game of Life step rule.

/// Read-only view of a rectangular field of cells.
///
/// Both the dense [`Grid`] and the sparse coordinate-set representation
/// implement this, so neighbor counting and presentation helpers work on
/// either.
pub trait CellView {
    /// Number of rows (vertical extent).
    fn rows(&self) -> usize;
    /// Number of columns (horizontal extent).
    fn cols(&self) -> usize;
    /// Whether the cell at (row, col) is alive.
    fn alive(&self, row: usize, col: usize) -> bool;
}

/// Relative offsets of the 8 neighbors, clockwise from the upper-left.
const NEIGHBOR_DELTAS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Count live neighbors of (row, col) on a toroidal topology.
///
/// An index of -1 wraps to extent-1 and an index equal to the extent wraps
/// to 0; offsets are all in {-1, 0, 1} so no other case can occur. On
/// degenerate extents (1x1, 1xN) the same modular rule applies unchanged,
/// so a cell may count the same neighbor more than once.
pub fn live_neighbors<V: CellView + ?Sized>(view: &V, row: usize, col: usize) -> u8 {
    let rows = view.rows() as isize;
    let cols = view.cols() as isize;
    let mut total = 0;

    for (dr, dc) in NEIGHBOR_DELTAS {
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;

        if r == -1 {
            r = rows - 1;
        } else if r == rows {
            r = 0;
        }
        if c == -1 {
            c = cols - 1;
        } else if c == cols {
            c = 0;
        }

        if view.alive(r as usize, c as usize) {
            total += 1;
        }
    }

    total
}

/// B3/S23 transition for a single cell.
#[inline]
pub(crate) fn next_state(alive: bool, neighbors: u8) -> bool {
    if alive {
        neighbors == 2 || neighbors == 3
    } else {
        neighbors == 3
    }
}

/// Grid construction errors.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions must be non-zero (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Dense fixed-size toroidal grid.
///
/// Cells are stored row-major in a flat boolean vector. Dimensions are
/// fixed at construction; stepping produces a fresh snapshot and never
/// mutates in place, so successive generations can coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid. Zero extent in either axis is rejected:
    /// no neighbor topology exists for it.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell state at (row, col). Panics on out-of-range coordinates.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.idx(row, col)]
    }

    /// Set the cell at (row, col).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.idx(row, col);
        self.cells[idx] = alive;
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Compute the next generation.
    ///
    /// The rule is applied synchronously: every cell of the result is
    /// computed from this grid alone, never from partially-updated values.
    pub fn step(&self) -> Grid {
        let mut next = Grid {
            rows: self.rows,
            cols: self.cols,
            cells: vec![false; self.rows * self.cols],
        };

        for row in 0..self.rows {
            for col in 0..self.cols {
                let count = live_neighbors(self, row, col);
                let idx = next.idx(row, col);
                next.cells[idx] = next_state(self.get(row, col), count);
            }
        }

        next
    }
}

impl CellView for Grid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid_from_rows(rows: &[&[u8]]) -> Grid {
        let mut grid = Grid::new(rows.len(), rows[0].len()).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                grid.set(r, c, v != 0);
            }
        }
        grid
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Grid::new(0, 10),
            Err(GridError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Grid::new(10, 0),
            Err(GridError::InvalidDimensions { .. })
        ));
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_step_preserves_dimensions() {
        let grid = Grid::new(7, 11).unwrap();
        let next = grid.step();
        assert_eq!(next.rows(), 7);
        assert_eq!(next.cols(), 11);
    }

    #[test]
    fn test_all_dead_is_stable() {
        let grid = Grid::new(8, 8).unwrap();
        let next = grid.step();
        assert_eq!(next.live_count(), 0);
        assert_eq!(next, grid);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.set(2, 2, true);
        grid.set(2, 3, true);
        grid.set(3, 2, true);
        grid.set(3, 3, true);

        let next = grid.step();
        assert_eq!(next, grid);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let horizontal = grid_from_rows(&[
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
        ]);
        let vertical = grid_from_rows(&[
            &[0, 0, 0, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 0, 0, 0],
        ]);

        let one = horizontal.step();
        assert_eq!(one, vertical);
        assert_eq!(one.step(), horizontal);
    }

    #[test]
    fn test_neighbors_wrap_around_edges() {
        // Single live cell in a corner; the opposite corner sees it
        // through the wraparound.
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(0, 0, true);

        assert_eq!(live_neighbors(&grid, 2, 2), 1);
        assert_eq!(live_neighbors(&grid, 0, 1), 1);
        assert_eq!(live_neighbors(&grid, 2, 0), 1);
        assert_eq!(live_neighbors(&grid, 1, 1), 1);
        // The live cell itself is not its own neighbor on a 3x3 torus.
        assert_eq!(live_neighbors(&grid, 0, 0), 0);
    }

    #[test]
    fn test_degenerate_one_by_one_grid() {
        // All 8 offsets wrap back to the single cell.
        let mut grid = Grid::new(1, 1).unwrap();
        grid.set(0, 0, true);

        assert_eq!(live_neighbors(&grid, 0, 0), 8);
        assert_eq!(grid.step().live_count(), 0);
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..16, 1usize..16).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(any::<bool>(), rows * cols).prop_map(move |cells| {
                let mut grid = Grid::new(rows, cols).unwrap();
                for (i, &alive) in cells.iter().enumerate() {
                    grid.set(i / cols, i % cols, alive);
                }
                grid
            })
        })
    }

    proptest! {
        #[test]
        fn prop_step_preserves_dimensions(grid in arb_grid()) {
            let next = grid.step();
            prop_assert_eq!(next.rows(), grid.rows());
            prop_assert_eq!(next.cols(), grid.cols());
        }

        #[test]
        fn prop_neighbor_counts_bounded(grid in arb_grid()) {
            for row in 0..grid.rows() {
                for col in 0..grid.cols() {
                    prop_assert!(live_neighbors(&grid, row, col) <= 8);
                }
            }
        }
    }
}
