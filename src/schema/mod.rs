//! Schema module - Configuration and seed pattern types.

mod config;
mod pattern;

pub use config::*;
pub use pattern::*;
