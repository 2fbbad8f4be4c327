//! Error types for the hlsclt CLI application.
//!
//! Library errors arrive as [`HlsError`]; this layer attaches what the user was
//! doing so `main` can print a single meaningful line.

use hlsclt_core::error::HlsError;
use hlsclt_messages::{msg, MESSAGES};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    /// The configured project folder does not exist
    ProjectNotFound { source: HlsError },

    /// hls_config.yaml could not be loaded or is invalid
    Config { source: HlsError },

    /// The vendor GUI could not be started
    Gui {
        source: HlsError,
        executable: String,
    },

    /// Writing command output failed
    Output {
        source: Box<dyn Error + Send + Sync>,
        context: String,
    },

    /// Anything that doesn't fit the categories above
    General { source: HlsError },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ProjectNotFound { .. } => f.write_str(MESSAGES.project.not_found),
            CliError::Config { source } => write!(f, "{source}"),
            CliError::Gui { source, executable } => write!(
                f,
                "{}",
                msg!(
                    MESSAGES.gui.launch_failed,
                    executable = executable,
                    error = source
                )
            ),
            CliError::Output { source, context } => write!(
                f,
                "{}",
                msg!(
                    MESSAGES.common.error_with_context,
                    context = context,
                    error = source
                )
            ),
            CliError::General { source } => write!(
                f,
                "{}",
                msg!(MESSAGES.common.error_generic, error = source)
            ),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CliError::ProjectNotFound { source }
            | CliError::Config { source }
            | CliError::Gui { source, .. }
            | CliError::General { source } => Some(source),
            CliError::Output { source, .. } => Some(source.as_ref()),
        }
    }
}

impl CliError {
    pub fn gui(source: HlsError, executable: impl Into<String>) -> Self {
        Self::Gui {
            source,
            executable: executable.into(),
        }
    }

    pub fn output<E: Error + Send + Sync + 'static>(source: E, context: impl Into<String>) -> Self {
        Self::Output {
            source: Box::new(source),
            context: context.into(),
        }
    }
}

impl From<HlsError> for CliError {
    fn from(err: HlsError) -> Self {
        match err {
            HlsError::ProjectNotFound(_) => CliError::ProjectNotFound { source: err },
            HlsError::Config(_) | HlsError::Serialization(_) => CliError::Config { source: err },
            _ => CliError::General { source: err },
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
