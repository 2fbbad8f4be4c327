use crate::error::CliResult;
use hlsclt_core::hls_warning;
use hlsclt_messages::{msg, MESSAGES};
use hlsclt_project::{open_reports, OpenOutcome, Project, Stage, StageReport, ToolLauncher};
use tracing::info;

/// Open the reports for each requested stage, warning about what's missing.
pub fn handle_report<L: ToolLauncher + ?Sized>(
    project: &Project,
    launcher: &L,
    solution: u32,
    stages: &[Stage],
) -> CliResult<()> {
    let paths = project.solution(solution);
    let reports = open_reports(launcher, &paths, stages, project.languages());

    for report in &reports {
        for path in report.opened() {
            info!("{}", msg!(MESSAGES.report.opened, path = path.display()));
        }
    }
    for warning in report_warnings(project.name(), solution, launcher.opener_name(), &reports) {
        hls_warning!("{}", warning);
    }
    Ok(())
}

/// Warnings for a set of stage results, in stage order.
///
/// A stage with missing files yields one warning no matter how many of its
/// files were absent; an unavailable opener is reported once overall.
pub fn report_warnings(
    project_name: &str,
    solution: u32,
    opener: &str,
    reports: &[StageReport],
) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut opener_reported = false;

    for report in reports {
        if report.has_missing() {
            warnings.push(msg!(
                MESSAGES.report.stage_missing,
                stage = report.stage,
                project = project_name,
                solution = solution
            ));
        }
        for (path, _reason) in report.failures() {
            warnings.push(msg!(
                MESSAGES.report.opener_failed,
                path = path.display(),
                opener = opener
            ));
        }
        let skipped = report
            .files
            .iter()
            .any(|file| file.outcome == OpenOutcome::Skipped);
        if skipped && !opener_reported {
            warnings.push(msg!(MESSAGES.report.opener_missing, opener = opener));
            opener_reported = true;
        }
    }
    warnings
}
