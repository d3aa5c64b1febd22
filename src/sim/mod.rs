//! Simulation engine - toroidal Game of Life stepping.

mod grid;
mod sparse;
mod text;

pub use grid::*;
pub use sparse::*;
pub use text::*;
