//! Central registry for all user-facing message templates.
//!
//! Organized by command domain:
//! - `project` - project lookup and configuration messages
//! - `report` - report opening messages
//! - `status` - status printing messages
//! - `gui` - vendor GUI launch messages
//! - `common` - shared error wrappers
//!
//! ```rust
//! use hlsclt_messages::MESSAGES;
//!
//! let msg = MESSAGES.project.not_found;
//! let msg = MESSAGES.report.stage_missing;
//! ```

mod common;
mod gui;
mod project;
mod report;
mod status;

pub use common::{CommonMessages, COMMON_MESSAGES};
pub use gui::{GuiMessages, GUI_MESSAGES};
pub use project::{ProjectMessages, PROJECT_MESSAGES};
pub use report::{ReportMessages, REPORT_MESSAGES};
pub use status::{StatusMessages, STATUS_MESSAGES};

/// Unified messages struct containing all domain-specific message modules
pub struct Messages {
    pub project: ProjectMessages,
    pub report: ReportMessages,
    pub status: StatusMessages,
    pub gui: GuiMessages,
    pub common: CommonMessages,
}

/// Global messages constant - main entry point for all message templates
pub const MESSAGES: Messages = Messages {
    project: PROJECT_MESSAGES,
    report: REPORT_MESSAGES,
    status: STATUS_MESSAGES,
    gui: GUI_MESSAGES,
    common: COMMON_MESSAGES,
};
