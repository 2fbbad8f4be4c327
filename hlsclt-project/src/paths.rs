//! Naming convention for files Vivado HLS writes inside a solution.

use hlsclt_config::HdlLanguage;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Build stage whose report can be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Csim,
    Syn,
    Cosim,
    Export,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Csim, Stage::Syn, Stage::Cosim, Stage::Export];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Csim => "csim",
            Stage::Syn => "syn",
            Stage::Cosim => "cosim",
            Stage::Export => "export",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| format!("unknown stage '{s}' (expected csim, syn, cosim or export)"))
    }
}

/// Paths inside `<project>/solution<N>` for one top-level function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionPaths {
    solution_dir: PathBuf,
    top: String,
}

impl SolutionPaths {
    pub fn new(project_dir: &Path, solution: u32, top: impl Into<String>) -> Self {
        Self {
            solution_dir: project_dir.join(format!("solution{solution}")),
            top: top.into(),
        }
    }

    /// `csim/report/<top>_csim.log`
    pub fn csim_log(&self) -> PathBuf {
        self.solution_dir
            .join("csim")
            .join("report")
            .join(format!("{}_csim.log", self.top))
    }

    /// `syn/report/<top>_csynth.rpt`
    pub fn csynth_report(&self) -> PathBuf {
        self.solution_dir
            .join("syn")
            .join("report")
            .join(format!("{}_csynth.rpt", self.top))
    }

    /// `sim/report/<top>_cosim.rpt`
    pub fn cosim_report(&self) -> PathBuf {
        self.sim_report_dir().join(format!("{}_cosim.rpt", self.top))
    }

    /// `sim/report/<language>/<top>.log`
    pub fn cosim_log(&self, language: HdlLanguage) -> PathBuf {
        self.sim_report_dir()
            .join(language.as_str())
            .join(format!("{}.log", self.top))
    }

    /// `impl/report/<language>/<top>_export.rpt`
    pub fn export_report(&self, language: HdlLanguage) -> PathBuf {
        self.impl_dir()
            .join("report")
            .join(language.as_str())
            .join(format!("{}_export.rpt", self.top))
    }

    /// `impl/ip`
    pub fn export_ip_dir(&self) -> PathBuf {
        self.impl_dir().join("ip")
    }

    /// `impl/sysgen`
    pub fn export_sysgen_dir(&self) -> PathBuf {
        self.impl_dir().join("sysgen")
    }

    /// Every report a stage produces, in the order they are opened.
    pub fn report_files(&self, stage: Stage, languages: &[HdlLanguage]) -> Vec<PathBuf> {
        match stage {
            Stage::Csim => vec![self.csim_log()],
            Stage::Syn => vec![self.csynth_report()],
            Stage::Cosim => std::iter::once(self.cosim_report())
                .chain(languages.iter().map(|&language| self.cosim_log(language)))
                .collect(),
            Stage::Export => languages
                .iter()
                .map(|&language| self.export_report(language))
                .collect(),
        }
    }

    fn sim_report_dir(&self) -> PathBuf {
        self.solution_dir.join("sim").join("report")
    }

    fn impl_dir(&self) -> PathBuf {
        self.solution_dir.join("impl")
    }
}
