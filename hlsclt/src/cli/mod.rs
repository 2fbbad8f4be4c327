// CLI argument parsing and definitions

use clap::{Parser, Subcommand, ValueEnum};
use hlsclt_project::Stage;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "hlsclt")]
#[command(about = "Command line helpers for Vivado HLS projects")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the project configuration file (default: ./hls_config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Solution number to inspect (default: highest existing solution)
    #[arg(long, global = true)]
    pub solution: Option<u32>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,
}

/// Build stage selector for `report --stage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StageArg {
    Csim,
    Syn,
    Cosim,
    Export,
}

impl From<StageArg> for Stage {
    fn from(arg: StageArg) -> Self {
        match arg {
            StageArg::Csim => Stage::Csim,
            StageArg::Syn => Stage::Syn,
            StageArg::Cosim => Stage::Cosim,
            StageArg::Export => Stage::Export,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Open reports.
    Report {
        /// Which build stage to open the report for. Multiple occurrences accepted
        #[arg(short, long, required = true, value_enum)]
        stage: Vec<StageArg>,
    },
    /// Open the Vivado HLS GUI and load the project.
    #[command(name = "open_gui", alias = "open-gui")]
    OpenGui,
    /// Print out the current project status.
    Status {
        /// Print the status tags as a JSON array
        #[arg(long)]
        json: bool,
    },
}
