//! Coarse build status derived from the files a solution contains.

use crate::paths::SolutionPaths;
use hlsclt_config::HdlLanguage;
use hlsclt_core::file_system::{dir_exists, file_exists, for_each_line};
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTag {
    CsimDone,
    SynDone,
    CosimDone,
    CosimPass(HdlLanguage),
    CosimFail(HdlLanguage),
    ExportIpDone,
    ExportSysgenDone,
    EvaluateDone(HdlLanguage),
}

impl StatusTag {
    pub fn as_str(self) -> &'static str {
        use HdlLanguage::{Verilog, Vhdl};
        match self {
            StatusTag::CsimDone => "csim_done",
            StatusTag::SynDone => "syn_done",
            StatusTag::CosimDone => "cosim_done",
            StatusTag::CosimPass(Vhdl) => "cosim_vhdl_pass",
            StatusTag::CosimPass(Verilog) => "cosim_verilog_pass",
            StatusTag::CosimFail(Vhdl) => "cosim_vhdl_fail",
            StatusTag::CosimFail(Verilog) => "cosim_verilog_fail",
            StatusTag::ExportIpDone => "export_ip_done",
            StatusTag::ExportSysgenDone => "export_sysgen_done",
            StatusTag::EvaluateDone(Vhdl) => "evaluate_vhdl_done",
            StatusTag::EvaluateDone(Verilog) => "evaluate_verilog_done",
        }
    }
}

impl fmt::Display for StatusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StatusTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Tags in the order their checks ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectStatus {
    tags: Vec<StatusTag>,
}

impl ProjectStatus {
    pub fn tags(&self) -> &[StatusTag] {
        &self.tags
    }

    pub fn contains(&self, tag: StatusTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    fn push(&mut self, tag: StatusTag) {
        debug!("status: {}", tag);
        self.tags.push(tag);
    }
}

/// Pass/fail verdicts found on one line of the co-simulation report.
fn cosim_line_tags(line: &str) -> impl Iterator<Item = StatusTag> {
    let line = line.to_lowercase();
    let verdict = |language: HdlLanguage| {
        if !line.contains(language.as_str()) {
            None
        } else if line.contains("pass") {
            Some(StatusTag::CosimPass(language))
        } else if line.contains("fail") {
            Some(StatusTag::CosimFail(language))
        } else {
            None
        }
    };
    [verdict(HdlLanguage::Vhdl), verdict(HdlLanguage::Verilog)]
        .into_iter()
        .flatten()
}

/// Run every status check against one solution.
///
/// Missing files just leave their tag out.
pub fn gather_project_status(paths: &SolutionPaths, languages: &[HdlLanguage]) -> ProjectStatus {
    let mut status = ProjectStatus::default();

    if file_exists(&paths.csim_log()) {
        status.push(StatusTag::CsimDone);
    }
    if file_exists(&paths.csynth_report()) {
        status.push(StatusTag::SynDone);
    }

    let cosim_report = paths.cosim_report();
    if file_exists(&cosim_report) {
        status.push(StatusTag::CosimDone);
        let mut verdicts = Vec::new();
        match for_each_line(&cosim_report, |line| verdicts.extend(cosim_line_tags(line))) {
            Ok(()) => verdicts.into_iter().for_each(|tag| status.push(tag)),
            Err(e) => warn!("Could not read {}: {}", cosim_report.display(), e),
        }
    }

    if dir_exists(&paths.export_ip_dir()) {
        status.push(StatusTag::ExportIpDone);
    }
    if dir_exists(&paths.export_sysgen_dir()) {
        status.push(StatusTag::ExportSysgenDone);
    }

    for &language in languages {
        if file_exists(&paths.export_report(language)) {
            status.push(StatusTag::EvaluateDone(language));
        }
    }

    status
}
