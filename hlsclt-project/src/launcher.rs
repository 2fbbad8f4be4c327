//! External tools hlsclt hands work off to.

use hlsclt_config::HlsConfig;
use hlsclt_core::error::Result;
use hlsclt_core::{is_tool_installed, platform, run_silent, spawn_detached};
use std::path::Path;
use tracing::info;

/// A started vendor GUI. hlsclt never waits on it.
#[derive(Debug)]
pub struct GuiHandle {
    pid: Option<u32>,
    _child: Option<duct::Handle>,
}

impl GuiHandle {
    pub fn new(pid: Option<u32>) -> Self {
        Self { pid, _child: None }
    }

    fn from_child(child: duct::Handle) -> Self {
        Self {
            pid: child.pids().first().copied(),
            _child: Some(child),
        }
    }

    pub fn pid(&self) -> Option<u32> {
        self.pid
    }
}

/// Capability for opening documents and starting the vendor GUI.
pub trait ToolLauncher {
    /// Name of the document opener, for messages.
    fn opener_name(&self) -> &str;

    /// Whether the document opener can be found at all.
    fn opener_available(&self) -> bool {
        true
    }

    /// Open `path` in the desktop viewer; `Ok(false)` when the opener failed.
    fn open(&self, path: &Path) -> Result<bool>;

    /// Start the vendor GUI on `project_dir` without waiting for it.
    fn launch_gui(&self, project_dir: &Path) -> Result<GuiHandle>;
}

/// Launches real processes.
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    opener: String,
    hls_executable: String,
}

impl SystemLauncher {
    pub fn new(opener: impl Into<String>, hls_executable: impl Into<String>) -> Self {
        Self {
            opener: opener.into(),
            hls_executable: hls_executable.into(),
        }
    }

    /// Configured opener, or the platform default when none is set.
    pub fn from_config(config: &HlsConfig) -> Self {
        let opener = config
            .opener
            .clone()
            .unwrap_or_else(|| platform::default_opener().to_string());
        Self::new(opener, config.hls_executable.clone())
    }

    pub fn hls_executable(&self) -> &str {
        &self.hls_executable
    }
}

impl ToolLauncher for SystemLauncher {
    fn opener_name(&self) -> &str {
        &self.opener
    }

    fn opener_available(&self) -> bool {
        is_tool_installed(&self.opener)
    }

    fn open(&self, path: &Path) -> Result<bool> {
        run_silent(&self.opener, &[path])
    }

    fn launch_gui(&self, project_dir: &Path) -> Result<GuiHandle> {
        let child = spawn_detached(
            &self.hls_executable,
            &[Path::new("-p"), project_dir],
        )?;
        let handle = GuiHandle::from_child(child);
        info!(
            "Started {} for {} (pid {:?})",
            self.hls_executable,
            project_dir.display(),
            handle.pid()
        );
        Ok(handle)
    }
}
