//! Rasterization of a grid into an indexed-color pixel buffer.
//!
//! Axis convention: rows map to the Y axis (top to bottom) and columns to
//! the X axis (left to right), so a grid of R rows and C columns becomes
//! an image of C*F x R*F pixels at magnification F.

use crate::sim::CellView;

/// Global GIF palette: index 0 = dead (white), index 1 = alive (black).
pub const PALETTE: [u8; 6] = [0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00];

/// Palette index for dead cells.
pub const DEAD: u8 = 0;

/// Palette index for live cells.
pub const ALIVE: u8 = 1;

/// Rasterize a grid at the given magnification factor.
///
/// Each cell (r, c) fills the F x F block spanning x in [c*F, (c+1)*F)
/// and y in [r*F, (r+1)*F) with a single palette index; the blocks tile
/// the image exactly. Returns one byte per pixel, row-major.
pub fn rasterize<V: CellView + ?Sized>(view: &V, factor: usize) -> Vec<u8> {
    let width = view.cols() * factor;
    let height = view.rows() * factor;
    let mut pixels = vec![DEAD; width * height];

    for row in 0..view.rows() {
        for col in 0..view.cols() {
            if !view.alive(row, col) {
                continue;
            }
            for y in row * factor..(row + 1) * factor {
                let base = y * width + col * factor;
                pixels[base..base + factor].fill(ALIVE);
            }
        }
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Grid;

    #[test]
    fn test_single_live_cell_fills_whole_frame() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.set(0, 0, true);

        let pixels = rasterize(&grid, 10);
        assert_eq!(pixels.len(), 100);
        assert!(pixels.iter().all(|&p| p == ALIVE));
    }

    #[test]
    fn test_blocks_tile_without_gaps() {
        // 1x2 grid, left cell alive, factor 2: each image row is 1 1 0 0.
        let mut grid = Grid::new(1, 2).unwrap();
        grid.set(0, 0, true);

        let pixels = rasterize(&grid, 2);
        assert_eq!(pixels, vec![1, 1, 0, 0, 1, 1, 0, 0]);
    }

    #[test]
    fn test_row_maps_to_y_axis() {
        // 2x1 grid, top cell alive, factor 2: top half alive, bottom dead.
        let mut grid = Grid::new(2, 1).unwrap();
        grid.set(0, 0, true);

        let pixels = rasterize(&grid, 2);
        assert_eq!(pixels, vec![1, 1, 1, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_all_dead_grid_is_background() {
        let grid = Grid::new(3, 4).unwrap();
        let pixels = rasterize(&grid, 3);
        assert_eq!(pixels.len(), 9 * 12);
        assert!(pixels.iter().all(|&p| p == DEAD));
    }
}
