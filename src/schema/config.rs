//! Configuration for the simulation and GIF encoding run.

use serde::{Deserialize, Serialize};

/// Top-level run configuration.
///
/// Grid dimensions are fixed for the lifetime of a run. Defaults: 60x60
/// grid, 150 generations, 10x magnification, 20 cs per frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid rows (vertical extent).
    pub rows: usize,
    /// Grid columns (horizontal extent).
    pub cols: usize,
    /// Number of generations to encode, one frame each.
    pub generations: u32,
    /// Side length in pixels of the square block drawn per cell.
    pub magnification: usize,
    /// Display delay per frame, in centiseconds.
    pub delay_cs: u16,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 60,
            cols: 60,
            generations: 150,
            magnification: 10,
            delay_cs: 20,
        }
    }
}

impl SimulationConfig {
    /// Output frame width in pixels (columns map to the X axis).
    #[inline]
    pub fn frame_width(&self) -> usize {
        self.cols * self.magnification
    }

    /// Output frame height in pixels (rows map to the Y axis).
    #[inline]
    pub fn frame_height(&self) -> usize {
        self.rows * self.magnification
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.magnification == 0 {
            return Err(ConfigError::InvalidMagnification);
        }
        if self.generations == 0 {
            return Err(ConfigError::InvalidGenerations);
        }
        // GIF frames address pixels with u16 coordinates.
        if self.frame_width() > u16::MAX as usize || self.frame_height() > u16::MAX as usize {
            return Err(ConfigError::FrameTooLarge {
                width: self.frame_width(),
                height: self.frame_height(),
            });
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (rows, cols) must be non-zero")]
    InvalidDimensions,
    #[error("Magnification factor must be non-zero")]
    InvalidMagnification,
    #[error("Generation count must be non-zero")]
    InvalidGenerations,
    #[error("Frame {width}x{height} exceeds the GIF pixel coordinate limit")]
    FrameTooLarge { width: usize, height: usize },
}
