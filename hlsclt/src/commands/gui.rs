use crate::error::{CliError, CliResult};
use hlsclt_core::hls_success;
use hlsclt_messages::{msg, MESSAGES};
use hlsclt_project::{Project, SystemLauncher, ToolLauncher};

/// Start the vendor GUI on the project and return immediately.
pub fn handle_open_gui(project: &Project, launcher: &SystemLauncher) -> CliResult<()> {
    let handle = launcher
        .launch_gui(project.dir())
        .map_err(|e| CliError::gui(e, launcher.hls_executable()))?;

    let pid = handle
        .pid()
        .map(|pid| pid.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    hls_success!(
        "{}",
        msg!(
            MESSAGES.gui.launched,
            project = project.name(),
            executable = launcher.hls_executable(),
            pid = pid
        )
    );
    Ok(())
}
