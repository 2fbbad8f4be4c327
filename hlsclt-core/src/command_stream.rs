// Standard library
use std::ffi::OsStr;

// External crates
use crate::error::{HlsError, Result};
use duct::cmd;
use tracing::debug;
use which::which;

fn render_command<A: AsRef<OsStr>>(command: &str, args: &[A]) -> String {
    let mut rendered = command.to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(&arg.as_ref().to_string_lossy());
    }
    rendered
}

/// Run a command to completion with its output discarded.
///
/// Returns `Ok(true)` when the command exits successfully and `Ok(false)` on a
/// non-zero exit. Failing to start the process at all is an error.
pub fn run_silent<A: AsRef<OsStr>>(command: &str, args: &[A]) -> Result<bool> {
    let full_command = render_command(command, args);
    debug!("Running {}", full_command);

    let output = cmd(command, args)
        .stdout_null()
        .stderr_null()
        .unchecked()
        .run()
        .map_err(|e| HlsError::Command(format!("Failed to run '{}': {}", full_command, e)))?;

    debug!("'{}' exited with {:?}", full_command, output.status.code());
    Ok(output.status.success())
}

/// Start a command without waiting for it.
///
/// The returned handle is never waited on by hlsclt; dropping it leaves the
/// child running.
pub fn spawn_detached<A: AsRef<OsStr>>(command: &str, args: &[A]) -> Result<duct::Handle> {
    let full_command = render_command(command, args);
    debug!("Spawning {}", full_command);

    cmd(command, args)
        .unchecked()
        .start()
        .map_err(|e| HlsError::Command(format!("Failed to start '{}': {}", full_command, e)))
}

/// Checks if a command-line tool is available in the system's PATH.
pub fn is_tool_installed(tool_name: &str) -> bool {
    which(tool_name).is_ok()
}
