use crate::paths::SolutionPaths;
use hlsclt_config::{HdlLanguage, HlsConfig};
use hlsclt_core::error::{HlsError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fails with [`HlsError::ProjectNotFound`] unless the project folder exists.
pub fn check_for_project(project_dir: &Path) -> Result<()> {
    if project_dir.exists() {
        Ok(())
    } else {
        Err(HlsError::ProjectNotFound(project_dir.to_path_buf()))
    }
}

/// A configured project whose folder has been found on disk.
#[derive(Debug, Clone)]
pub struct Project {
    config: HlsConfig,
    dir: PathBuf,
}

impl Project {
    /// Locate the configured project under `base_dir`.
    pub fn open(config: HlsConfig, base_dir: &Path) -> Result<Self> {
        let dir = config.project_dir(base_dir);
        check_for_project(&dir)?;
        debug!("Found project folder {}", dir.display());
        Ok(Self { config, dir })
    }

    pub fn name(&self) -> &str {
        &self.config.project_name
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config(&self) -> &HlsConfig {
        &self.config
    }

    pub fn languages(&self) -> &[HdlLanguage] {
        self.config.languages()
    }

    pub fn solution(&self, solution: u32) -> SolutionPaths {
        SolutionPaths::new(&self.dir, solution, &self.config.top_level_function_name)
    }
}
