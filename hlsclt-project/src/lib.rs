//! Inspection of Vivado HLS project folders.
//!
//! Everything here works on an explicit [`Project`] value: the configuration
//! plus a project folder that is known to exist. Paths inside a solution come
//! from [`SolutionPaths`], external tools are reached through [`ToolLauncher`].

pub mod launcher;
pub mod paths;
pub mod project;
pub mod report;
pub mod status;

pub use launcher::{GuiHandle, SystemLauncher, ToolLauncher};
pub use paths::{SolutionPaths, Stage};
pub use project::{check_for_project, Project};
pub use report::{open_report, open_reports, OpenOutcome, ReportFile, StageReport};
pub use status::{gather_project_status, ProjectStatus, StatusTag};
