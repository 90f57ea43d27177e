//! Guitar Pro tablature editing tools
//!
//! Selects tracks, measures and beats of a score document (explicitly or
//! from the clipboard selection stored in the document) and applies note
//! and effect transforms to every selected beat.

pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod selection;
pub mod session;
pub mod transform;

// Re-export commonly used types
pub use error::{Result, ToolError};
pub use models::{Beat, ClipboardSelection, Duration, Measure, Note, Song, Track, Voice};
pub use selection::{Selection, SelectionSpec, Selector};
pub use transform::{Operation, TransformReport};
