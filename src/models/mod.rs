//! Score document models
//!
//! This module defines the tree the editing tools traverse and mutate,
//! plus the duration arithmetic used when rescaling beats.

pub mod duration;
pub mod song;

// Re-export all public types for convenience
pub use duration::{Duration, Tuplet, QUARTER_TIME};
pub use song::*;
