//! Invocation configuration
//!
//! Holds what the command line decided: where to read, where to write, which
//! editor process owns the clipboard, and the raw selection flags.

use std::path::PathBuf;

use crate::error::Result;
use crate::gateway::{find_clipboard_path, ProcessInspector, DEFAULT_PROCESS};
use crate::selection::SelectionSpec;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolConfig {
    /// File to edit; the editor clipboard when unset
    pub input: Option<PathBuf>,
    /// Where to save; the input file when unset
    pub output: Option<PathBuf>,
    /// Editor process used to locate the clipboard
    pub process: String,
    pub selection: SelectionSpec,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            process: DEFAULT_PROCESS.to_string(),
            selection: SelectionSpec::default(),
        }
    }
}

/// Input and output paths after defaults are applied
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ToolConfig {
    /// Apply path defaults; only consults `inspector` when no input is given
    pub fn resolve_paths(&self, inspector: &dyn ProcessInspector) -> Result<ResolvedPaths> {
        let input = match &self.input {
            Some(path) => path.clone(),
            None => find_clipboard_path(inspector, &self.process)?,
        };
        let output = self.output.clone().unwrap_or_else(|| input.clone());
        Ok(ResolvedPaths { input, output })
    }
}
