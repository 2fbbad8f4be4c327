use crate::error::{CliError, CliResult};
use hlsclt_core::hls_println;
use hlsclt_messages::{msg, MESSAGES};
use hlsclt_project::{gather_project_status, Project, ProjectStatus};

pub fn handle_status(project: &Project, solution: u32, json: bool) -> CliResult<()> {
    let status = gather_project_status(&project.solution(solution), project.languages());

    let output = if json {
        serde_json::to_string(&status)
            .map_err(|e| CliError::output(e, "Failed to serialize project status"))?
    } else {
        render_status(project.name(), solution, &status)
    };
    hls_println!("{}", output);
    Ok(())
}

/// Human-readable status listing, one tag per line.
pub fn render_status(project_name: &str, solution: u32, status: &ProjectStatus) -> String {
    if status.is_empty() {
        return msg!(
            MESSAGES.status.empty,
            project = project_name,
            solution = solution
        );
    }

    let mut lines = vec![msg!(
        MESSAGES.status.header,
        project = project_name,
        solution = solution
    )];
    lines.extend(
        status
            .tags()
            .iter()
            .map(|tag| msg!(MESSAGES.status.tag_line, tag = tag)),
    );
    lines.join("\n")
}
