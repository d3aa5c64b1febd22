//! Seed patterns and their placement into the fixed simulation grid.

use serde::{Deserialize, Serialize};

use super::SimulationConfig;
use crate::sim::{Grid, GridError};

/// Seed pattern for the initial generation.
///
/// A pattern is a small rectangular 0/1 stamp that gets centered inside
/// the configured grid; everything outside the stamp starts dead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Rectangular 0/1 array; any non-zero entry is alive.
    Cells { rows: Vec<Vec<u8>> },
    /// Live-coordinate list. The stamp extent is the maximum coordinate
    /// plus one in each axis.
    Coords { cells: Vec<(usize, usize)> },
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern::century()
    }
}

impl Pattern {
    /// Period-2 oscillator, three cells in a row.
    pub fn blinker() -> Self {
        Pattern::Cells {
            rows: vec![vec![1, 1, 1]],
        }
    }

    /// 2x2 still life.
    pub fn block() -> Self {
        Pattern::Cells {
            rows: vec![vec![1, 1], vec![1, 1]],
        }
    }

    /// The smallest spaceship.
    pub fn glider() -> Self {
        Pattern::Cells {
            rows: vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 1, 1]],
        }
    }

    /// Century methuselah; evolves for roughly a hundred generations
    /// before settling.
    pub fn century() -> Self {
        Pattern::Cells {
            rows: vec![vec![0, 0, 1, 1], vec![1, 1, 1, 0], vec![0, 1, 0, 0]],
        }
    }

    /// Normalize to a rectangular bitmap: (rows, cols, row-major cells).
    fn bitmap(&self) -> Result<(usize, usize, Vec<bool>), PatternError> {
        match self {
            Pattern::Cells { rows } => {
                let p_rows = rows.len();
                let p_cols = rows.first().map(|r| r.len()).unwrap_or(0);
                if p_rows == 0 || p_cols == 0 {
                    return Err(PatternError::Empty);
                }
                if rows.iter().any(|r| r.len() != p_cols) {
                    return Err(PatternError::Ragged);
                }
                let cells = rows.iter().flatten().map(|&v| v != 0).collect();
                Ok((p_rows, p_cols, cells))
            }
            Pattern::Coords { cells } => {
                let p_rows = cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
                let p_cols = cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
                if p_rows == 0 || p_cols == 0 {
                    return Err(PatternError::Empty);
                }
                let mut bitmap = vec![false; p_rows * p_cols];
                for &(r, c) in cells {
                    bitmap[r * p_cols + c] = true;
                }
                Ok((p_rows, p_cols, bitmap))
            }
        }
    }

    /// Stamp extent as (rows, cols).
    pub fn extent(&self) -> Result<(usize, usize), PatternError> {
        let (p_rows, p_cols, _) = self.bitmap()?;
        Ok((p_rows, p_cols))
    }

    /// Center this pattern in the configured grid.
    ///
    /// The stamp's top-left lands at (⌊(rows-pRows)/2⌋, ⌊(cols-pCols)/2⌋),
    /// so an odd leftover row or column of padding goes to the
    /// bottom/right margin. Fails if the pattern exceeds the grid.
    pub fn centered(&self, config: &SimulationConfig) -> Result<Grid, PatternError> {
        self.centered_in(config.rows, config.cols)
    }

    /// Center this pattern in a rows x cols grid.
    pub fn centered_in(&self, rows: usize, cols: usize) -> Result<Grid, PatternError> {
        let (p_rows, p_cols, bitmap) = self.bitmap()?;
        if p_rows > rows || p_cols > cols {
            return Err(PatternError::TooLarge {
                p_rows,
                p_cols,
                rows,
                cols,
            });
        }

        let top = (rows - p_rows) / 2;
        let left = (cols - p_cols) / 2;

        let mut grid = Grid::new(rows, cols)?;
        for r in 0..p_rows {
            for c in 0..p_cols {
                if bitmap[r * p_cols + c] {
                    grid.set(top + r, left + c, true);
                }
            }
        }
        Ok(grid)
    }
}

/// Pattern placement errors.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("pattern must have at least one row and one column")]
    Empty,
    #[error("pattern rows must all have the same length")]
    Ragged,
    #[error("pattern ({p_rows}x{p_cols}) does not fit in the {rows}x{cols} grid")]
    TooLarge {
        p_rows: usize,
        p_cols: usize,
        rows: usize,
        cols: usize,
    },
    #[error(transparent)]
    Grid(#[from] GridError),
}
