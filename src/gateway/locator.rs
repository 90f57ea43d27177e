//! Finding the clipboard file of a running editor
//!
//! The editor keeps its clipboard in `<exe_dir>/tmp/clipboard.tmp`. The
//! executable directory is taken from the command line of the running
//! process.

use std::path::{Path, PathBuf};
use sysinfo::{Process, ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};

use crate::error::{Result, ToolError};

/// Process name looked up when none is configured
pub const DEFAULT_PROCESS: &str = "gp5.exe";

pub trait ProcessInspector {
    /// Launch path (argv[0]) of the first running process named `name`
    fn command_path(&self, name: &str) -> Option<PathBuf>;
}

/// Inspects the processes of the local system
#[derive(Debug, Default)]
pub struct SystemProcesses;

impl SystemProcesses {
    fn snapshot() -> System {
        let mut system = System::new();
        // The default refresh leaves the command line empty
        let kind = ProcessRefreshKind::nothing()
            .with_cmd(UpdateKind::Always)
            .with_exe(UpdateKind::OnlyIfNotSet);
        system.refresh_processes_specifics(ProcessesToUpdate::All, true, kind);
        system
    }
}

/// Path the process was launched as, falling back to its executable
///
/// Under Wine the executable is the loader, so argv[0] comes first.
fn launch_path(process: &Process) -> Option<PathBuf> {
    process
        .cmd()
        .first()
        .map(PathBuf::from)
        .or_else(|| process.exe().map(Path::to_path_buf))
}

impl ProcessInspector for SystemProcesses {
    fn command_path(&self, name: &str) -> Option<PathBuf> {
        let system = Self::snapshot();
        let process = system
            .processes()
            .values()
            .find(|process| process.name().to_string_lossy().eq_ignore_ascii_case(name))?;
        launch_path(process)
    }
}

/// Clipboard file path for an editor executable
pub fn clipboard_path_for(exe_path: &Path) -> PathBuf {
    exe_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join("tmp")
        .join("clipboard.tmp")
}

pub fn find_clipboard_path(inspector: &dyn ProcessInspector, process_name: &str) -> Result<PathBuf> {
    let exe_path = inspector
        .command_path(process_name)
        .ok_or_else(|| ToolError::ClipboardNotFound {
            process: process_name.to_string(),
        })?;

    let path = clipboard_path_for(&exe_path);
    log::info!("using {} clipboard at {}", process_name, path.display());
    Ok(path)
}
