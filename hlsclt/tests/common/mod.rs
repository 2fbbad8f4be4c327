// Common test utilities and fixtures
#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PROJECT: &str = "proj_fir";
pub const TOP: &str = "fir";

/// A working directory with an hls_config.yaml and (optionally) a project tree.
pub struct HlsFixture {
    _temp_dir: TempDir,
    work_dir: PathBuf,
}

impl HlsFixture {
    /// Work directory with a config for `proj_fir`, but no project folder yet.
    pub fn new(languages: &str) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let work_dir = temp_dir.path().join("fir");
        fs::create_dir_all(&work_dir)?;

        let fixture = Self {
            _temp_dir: temp_dir,
            work_dir,
        };
        fixture.write_config(&format!(
            "project_name: {PROJECT}\ntop_level_function_name: {TOP}\nlanguage: {languages}\nopener: \"true\"\nhls_executable: \"true\"\n"
        ))?;
        Ok(fixture)
    }

    /// Fixture whose project folder exists but holds no build output.
    pub fn with_project(languages: &str) -> Result<Self> {
        let fixture = Self::new(languages)?;
        fs::create_dir_all(fixture.project_dir())?;
        Ok(fixture)
    }

    pub fn write_config(&self, contents: &str) -> Result<()> {
        fs::write(self.work_dir.join("hls_config.yaml"), contents)?;
        Ok(())
    }

    pub fn project_dir(&self) -> PathBuf {
        self.work_dir.join(PROJECT)
    }

    pub fn solution_dir(&self, solution: u32) -> PathBuf {
        self.project_dir().join(format!("solution{solution}"))
    }

    /// Create a file (and its parents) relative to `solution<N>`.
    pub fn add_file(&self, solution: u32, relative: &str, contents: &str) -> Result<PathBuf> {
        let path = self.solution_dir(solution).join(relative);
        fs::create_dir_all(path.parent().unwrap_or(Path::new(".")))?;
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn add_dir(&self, solution: u32, relative: &str) -> Result<PathBuf> {
        let path = self.solution_dir(solution).join(relative);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// `hlsclt` running inside the work directory with logging disabled.
    pub fn hlsclt(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("hlsclt")?;
        cmd.current_dir(&self.work_dir).env("HLSCLT_TEST_MODE", "1");
        Ok(cmd)
    }
}

/// Lines printed with the warning marker.
pub fn warning_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| line.starts_with('⚠'))
        .map(str::to_string)
        .collect()
}
