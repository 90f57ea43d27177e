//! Collaborators at the edge of the tool
//!
//! - `document`: loading and saving songs
//! - `locator`: finding the clipboard file of a running editor

pub mod document;
pub mod locator;

pub use document::{DocumentGateway, JsonGateway, SaveMode};
pub use locator::{find_clipboard_path, ProcessInspector, SystemProcesses, DEFAULT_PROCESS};
