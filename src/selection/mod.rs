//! Selection of the beats a tool operates on
//!
//! ## Modules
//!
//! - `range`: parsing of user range specs (`1-4,6-7`)
//! - `selector`: resolving specs against a song and walking the selected beats

pub mod range;
pub mod selector;

pub use range::parse_range;
pub use selector::{BeatLocation, SelectedBeat, Selection, SelectionSpec, Selector};
