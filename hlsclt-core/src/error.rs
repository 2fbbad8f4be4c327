use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HlsError {
    ProjectNotFound(PathBuf),
    Config(String),
    Io(#[from] std::io::Error),
    Command(String),
    Serialization(String),
    Other(#[from] anyhow::Error),
}

impl Display for HlsError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            HlsError::ProjectNotFound(path) => {
                write!(f, "Project folder not found: {}", path.display())
            }
            HlsError::Config(s) => write!(f, "Configuration error: {}", s),
            HlsError::Io(e) => write!(f, "I/O error: {}", e),
            HlsError::Command(s) => write!(f, "Command failed: {}", s),
            HlsError::Serialization(s) => write!(f, "Serialization error: {}", s),
            HlsError::Other(e) => write!(f, "{}", e),
        }
    }
}

impl From<serde_yaml_ng::Error> for HlsError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        HlsError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for HlsError {
    fn from(err: serde_json::Error) -> Self {
        HlsError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HlsError>;
