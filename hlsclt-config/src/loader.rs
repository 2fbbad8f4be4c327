// Standard library imports
use std::fs;
use std::path::{Path, PathBuf};

// External crate imports
use anyhow::Context;
use tracing::{debug, info};

// Internal imports
use crate::config::{default_project_name, HlsConfig};
use hlsclt_core::error::{HlsError, Result};
use hlsclt_messages::{msg, MESSAGES};

/// Name of the project configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "hls_config.yaml";

/// Finds and loads `hls_config.yaml`.
///
/// An explicit path must exist. Without one, the loader looks for
/// `hls_config.yaml` in the base directory and falls back to defaults derived
/// from that directory's name.
pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Loader rooted at the process working directory.
    pub fn from_current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn load(&self, explicit: Option<&Path>) -> Result<HlsConfig> {
        let config = match explicit {
            Some(path) => {
                let path = self.base_dir.join(path);
                if !path.is_file() {
                    return Err(HlsError::Config(msg!(
                        MESSAGES.project.config_not_found,
                        path = path.display()
                    )));
                }
                self.load_file(&path)?
            }
            None => {
                let path = self.base_dir.join(CONFIG_FILE_NAME);
                if path.is_file() {
                    self.load_file(&path)?
                } else {
                    info!(
                        "{}",
                        msg!(
                            MESSAGES.project.config_defaults,
                            file = CONFIG_FILE_NAME,
                            dir = self.base_dir.display()
                        )
                    );
                    HlsConfig::default_for_dir(&self.base_dir)
                }
            }
        };

        validate(&config)?;
        Ok(config)
    }

    fn load_file(&self, path: &Path) -> Result<HlsConfig> {
        debug!("Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        // An empty file is a valid "all defaults" config
        let mut config: HlsConfig = if content.trim().is_empty() {
            HlsConfig::default_for_dir(&self.base_dir)
        } else {
            serde_yaml_ng::from_str(&content).map_err(|e| {
                HlsError::Config(format!("Invalid {}: {}", path.display(), e))
            })?
        };

        if config.project_name.trim().is_empty() {
            config.project_name = default_project_name(&self.base_dir);
        }
        Ok(config)
    }
}

fn validate(config: &HlsConfig) -> Result<()> {
    if config.project_name.trim().is_empty() {
        return Err(HlsError::Config(
            "project_name is empty and could not be derived from the working directory"
                .to_string(),
        ));
    }
    if config.language.is_empty() {
        return Err(HlsError::Config(
            "language must name at least one of: vhdl, verilog".to_string(),
        ));
    }
    if config.hls_executable.trim().is_empty() {
        return Err(HlsError::Config("hls_executable must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HdlLanguage, Languages};
    use tempfile::TempDir;

    fn project_root() -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("adder");
        fs::create_dir_all(&root).unwrap();
        (temp, root)
    }

    #[test]
    fn test_missing_default_file_uses_defaults() {
        let (_temp, root) = project_root();
        let config = ConfigLoader::new(&root).load(None).unwrap();
        assert_eq!(config.project_name, "proj_adder");
        assert_eq!(config.language, Languages::One(HdlLanguage::Vhdl));
    }

    #[test]
    fn test_loads_default_file() {
        let (_temp, root) = project_root();
        fs::write(
            root.join(CONFIG_FILE_NAME),
            "project_name: proj_sum\ntop_level_function_name: sum\nlanguage: [vhdl, verilog]\n",
        )
        .unwrap();

        let config = ConfigLoader::new(&root).load(None).unwrap();
        assert_eq!(config.project_name, "proj_sum");
        assert_eq!(config.top_level_function_name, "sum");
        assert_eq!(
            config.languages(),
            &[HdlLanguage::Vhdl, HdlLanguage::Verilog]
        );
    }

    #[test]
    fn test_project_name_falls_back_to_directory() {
        let (_temp, root) = project_root();
        fs::write(root.join(CONFIG_FILE_NAME), "top_level_function_name: add\n").unwrap();

        let config = ConfigLoader::new(&root).load(None).unwrap();
        assert_eq!(config.project_name, "proj_adder");
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let (_temp, root) = project_root();
        fs::write(root.join(CONFIG_FILE_NAME), "\n").unwrap();

        let config = ConfigLoader::new(&root).load(None).unwrap();
        assert_eq!(config, HlsConfig::default_for_dir(&root));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let (_temp, root) = project_root();
        let result = ConfigLoader::new(&root).load(Some(Path::new("custom.yaml")));
        match result {
            Err(HlsError::Config(message)) => assert!(message.contains("custom.yaml")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_file_relative_to_base_dir() {
        let (_temp, root) = project_root();
        fs::write(root.join("custom.yaml"), "project_name: proj_custom\n").unwrap();

        let config = ConfigLoader::new(&root)
            .load(Some(Path::new("custom.yaml")))
            .unwrap();
        assert_eq!(config.project_name, "proj_custom");
    }

    #[test]
    fn test_empty_language_list_is_rejected() {
        let (_temp, root) = project_root();
        fs::write(root.join(CONFIG_FILE_NAME), "language: []\n").unwrap();

        let result = ConfigLoader::new(&root).load(None);
        assert!(matches!(result, Err(HlsError::Config(_))));
    }

    #[test]
    fn test_invalid_yaml_is_a_config_error() {
        let (_temp, root) = project_root();
        fs::write(root.join(CONFIG_FILE_NAME), "language: cobol\n").unwrap();

        let result = ConfigLoader::new(&root).load(None);
        assert!(matches!(result, Err(HlsError::Config(_))));
    }
}
