//! Animated GIF encoding of a generation sequence.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use gif::{Encoder, Frame, Repeat};
use log::{debug, info};

use super::raster::{PALETTE, rasterize};
use crate::schema::{ConfigError, SimulationConfig};
use crate::sim::Grid;

/// Encoding errors.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("initial grid is {grid_rows}x{grid_cols} but configuration expects {rows}x{cols}")]
    DimensionMismatch {
        grid_rows: usize,
        grid_cols: usize,
        rows: usize,
        cols: usize,
    },
    #[error("could not write animation file: {0}")]
    Io(#[from] std::io::Error),
    #[error("GIF encoding failed: {0}")]
    Gif(#[from] gif::EncodingError),
}

/// Summary of an encoding run.
#[derive(Debug, Clone)]
pub struct GifStats {
    /// Frames written (one per generation).
    pub frame_count: u32,
    /// Frame width in pixels.
    pub width: u16,
    /// Frame height in pixels.
    pub height: u16,
}

impl std::fmt::Display for GifStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} frames at {}x{}",
            self.frame_count, self.width, self.height
        )
    }
}

/// Run the simulation for `config.generations` steps and write the frame
/// sequence to `path` as a looping animated GIF.
///
/// Frame 0 is the initial grid; frame i is the grid after i steps. Each
/// frame carries the configured per-frame delay and the animation loops
/// forever. The output file is created (or overwritten) up front and the
/// handle is released when encoding finishes, successfully or not.
pub fn encode_gif<P: AsRef<Path>>(
    initial: Grid,
    config: &SimulationConfig,
    path: P,
) -> Result<GifStats, EncodeError> {
    config.validate()?;
    if initial.rows() != config.rows || initial.cols() != config.cols {
        return Err(EncodeError::DimensionMismatch {
            grid_rows: initial.rows(),
            grid_cols: initial.cols(),
            rows: config.rows,
            cols: config.cols,
        });
    }

    let width = config.frame_width() as u16;
    let height = config.frame_height() as u16;

    let file = File::create(path.as_ref())?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height, &PALETTE)?;
    encoder.set_repeat(Repeat::Infinite)?;

    let mut current = initial;
    for i in 0..config.generations {
        let pixels = rasterize(&current, config.magnification);

        let mut frame = Frame::default();
        frame.width = width;
        frame.height = height;
        frame.delay = config.delay_cs;
        frame.buffer = pixels.into();
        encoder.write_frame(&frame)?;

        debug!(
            "frame {}/{}: {} live cells",
            i + 1,
            config.generations,
            current.live_count()
        );
        current = current.step();
    }

    let stats = GifStats {
        frame_count: config.generations,
        width,
        height,
    };
    info!("wrote {} to {}", stats, path.as_ref().display());
    Ok(stats)
}
