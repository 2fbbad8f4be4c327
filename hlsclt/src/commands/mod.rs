// Command handlers for hlsclt

use crate::cli::{Args, Command};
use crate::error::CliResult;
use hlsclt_config::{resolve_solution, ConfigLoader};
use hlsclt_messages::{msg, MESSAGES};
use hlsclt_project::{Project, Stage, SystemLauncher};
use tracing::debug;

pub mod gui;
pub mod report;
pub mod status;

/// Main command dispatcher
#[must_use = "command execution results should be handled"]
pub fn execute_command(args: Args) -> CliResult<()> {
    let loader = ConfigLoader::from_current_dir()?;
    let config = loader.load(args.config.as_deref())?;

    // Every command needs the project folder; nothing else is touched without it.
    let project = Project::open(config, loader.base_dir())?;
    let launcher = SystemLauncher::from_config(project.config());

    match args.command {
        Command::Report { stage } => {
            debug!("Handling report command");
            let solution = resolve(&project, args.solution)?;
            let stages: Vec<Stage> = stage.into_iter().map(Stage::from).collect();
            report::handle_report(&project, &launcher, solution, &stages)
        }
        Command::OpenGui => {
            debug!("Handling open_gui command");
            gui::handle_open_gui(&project, &launcher)
        }
        Command::Status { json } => {
            debug!("Handling status command");
            let solution = resolve(&project, args.solution)?;
            status::handle_status(&project, solution, json)
        }
    }
}

fn resolve(project: &Project, requested: Option<u32>) -> CliResult<u32> {
    let solution = resolve_solution(project.dir(), requested)?;
    debug!(
        "{}",
        msg!(
            MESSAGES.project.using_solution,
            project = project.name(),
            solution = solution
        )
    );
    Ok(solution)
}
