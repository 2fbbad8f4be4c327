use crate::launcher::ToolLauncher;
use crate::paths::{SolutionPaths, Stage};
use hlsclt_config::HdlLanguage;
use hlsclt_core::file_system::file_exists;
use std::path::PathBuf;
use tracing::{debug, warn};

/// What happened to one report file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    /// The build stage has not produced this file.
    Missing,
    /// The file exists but the opener exited non-zero or could not run.
    Failed(String),
    /// The file exists but no opener is available to show it.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    pub path: PathBuf,
    pub outcome: OpenOutcome,
}

/// Result of opening every report of one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub stage: Stage,
    pub files: Vec<ReportFile>,
}

impl StageReport {
    /// True when at least one expected report was not on disk.
    pub fn has_missing(&self) -> bool {
        self.files
            .iter()
            .any(|file| file.outcome == OpenOutcome::Missing)
    }

    pub fn failures(&self) -> impl Iterator<Item = (&PathBuf, &str)> {
        self.files.iter().filter_map(|file| match &file.outcome {
            OpenOutcome::Failed(reason) => Some((&file.path, reason.as_str())),
            _ => None,
        })
    }

    pub fn opened(&self) -> impl Iterator<Item = &PathBuf> {
        self.files
            .iter()
            .filter(|file| file.outcome == OpenOutcome::Opened)
            .map(|file| &file.path)
    }
}

/// Open every report `stage` produces.
///
/// Each file is attempted independently; nothing here aborts.
pub fn open_report<L: ToolLauncher + ?Sized>(
    launcher: &L,
    paths: &SolutionPaths,
    stage: Stage,
    languages: &[HdlLanguage],
) -> StageReport {
    let opener_available = launcher.opener_available();

    let files = paths
        .report_files(stage, languages)
        .into_iter()
        .map(|path| {
            let outcome = if !file_exists(&path) {
                debug!("{} report {} not found", stage, path.display());
                OpenOutcome::Missing
            } else if !opener_available {
                OpenOutcome::Skipped
            } else {
                match launcher.open(&path) {
                    Ok(true) => OpenOutcome::Opened,
                    Ok(false) => OpenOutcome::Failed(format!(
                        "{} exited with an error",
                        launcher.opener_name()
                    )),
                    Err(e) => {
                        warn!("Could not run opener for {}: {}", path.display(), e);
                        OpenOutcome::Failed(e.to_string())
                    }
                }
            };
            ReportFile { path, outcome }
        })
        .collect();

    StageReport { stage, files }
}

/// Open the reports of several stages in request order.
pub fn open_reports<L: ToolLauncher + ?Sized>(
    launcher: &L,
    paths: &SolutionPaths,
    stages: &[Stage],
    languages: &[HdlLanguage],
) -> Vec<StageReport> {
    stages
        .iter()
        .map(|&stage| open_report(launcher, paths, stage, languages))
        .collect()
}
