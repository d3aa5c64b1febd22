//! Plain-text presentation of a grid: ASCII art and coordinate listings.

use super::grid::CellView;

/// Render a grid as ASCII art: `[X]` for alive, `[ ]` for dead, one line
/// per row.
pub fn ascii_grid<V: CellView + ?Sized>(view: &V) -> String {
    let mut out = String::with_capacity(view.rows() * (view.cols() * 3 + 1));
    for row in 0..view.rows() {
        for col in 0..view.cols() {
            out.push_str(if view.alive(row, col) { "[X]" } else { "[ ]" });
        }
        out.push('\n');
    }
    out
}

/// Live coordinates of a grid in row-major order.
pub fn live_cells<V: CellView + ?Sized>(view: &V) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for row in 0..view.rows() {
        for col in 0..view.cols() {
            if view.alive(row, col) {
                cells.push((row, col));
            }
        }
    }
    cells
}

/// Live coordinates as whitespace-separated text pairs, one per line.
pub fn coordinate_pairs<V: CellView + ?Sized>(view: &V) -> String {
    let mut out = String::new();
    for (row, col) in live_cells(view) {
        out.push_str(&format!("{} {}\n", row, col));
    }
    out
}
