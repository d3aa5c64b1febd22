//! Conway's Game of Life on a fixed-size toroidal grid, rendered as an
//! animated GIF.
//!
//! # Architecture
//!
//! The crate is split into three modules:
//!
//! - `schema`: Run configuration and seed patterns
//! - `sim`: The stepping engine (dense and sparse toroidal grids)
//! - `animation`: Rasterization and GIF serialization
//!
//! # Example
//!
//! ```rust,no_run
//! use torus_life::{Pattern, SimulationConfig, encode_gif};
//!
//! let config = SimulationConfig::default();
//! let grid = Pattern::glider().centered(&config)?;
//! let stats = encode_gif(grid, &config, "glider.gif")?;
//!
//! println!("wrote {}", stats);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod animation;
pub mod schema;
pub mod sim;

// Re-export commonly used types
pub use animation::{EncodeError, GifStats, encode_gif, rasterize};
pub use schema::{Pattern, PatternError, SimulationConfig};
pub use sim::{CellView, Grid, SparseGrid, live_neighbors};
