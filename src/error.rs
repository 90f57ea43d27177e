//! Error types for tab editing
//!
//! Fatal errors stop an invocation before anything is written. Boundary
//! conditions inside a transform (a note that cannot move to another string,
//! a duration that would fall below the shortest note) are not errors and
//! never reach this type.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    /// A track/measure/beat range such as `1-4,6-7` could not be parsed
    #[error("invalid range '{spec}': bad token '{token}'")]
    SelectionSpec { spec: String, token: String },

    /// No running editor process to take the clipboard file from
    #[error("cannot get {process} clipboard, is the process running?")]
    ClipboardNotFound { process: String },

    /// The input document is malformed
    #[error("document parse error: {0}")]
    DocumentParse(String),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A transform parameter failed validation at the command boundary
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        ToolError::DocumentParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
