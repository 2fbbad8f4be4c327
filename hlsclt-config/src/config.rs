use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// HDL targets Vivado HLS can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HdlLanguage {
    Vhdl,
    Verilog,
}

impl HdlLanguage {
    /// Directory name the vendor tool uses for this language.
    pub fn as_str(self) -> &'static str {
        match self {
            HdlLanguage::Vhdl => "vhdl",
            HdlLanguage::Verilog => "verilog",
        }
    }
}

impl fmt::Display for HdlLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `language:` accepts either a single value or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Languages {
    One(HdlLanguage),
    Many(Vec<HdlLanguage>),
}

impl Languages {
    pub fn as_slice(&self) -> &[HdlLanguage] {
        match self {
            Languages::One(language) => std::slice::from_ref(language),
            Languages::Many(languages) => languages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl Default for Languages {
    fn default() -> Self {
        Languages::One(HdlLanguage::Vhdl)
    }
}

fn default_hls_executable() -> String {
    "vivado_hls".to_string()
}

/// Project settings read from `hls_config.yaml`.
///
/// Keys the file may carry for the build side of the tool (source lists,
/// part name, clock period) are ignored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HlsConfig {
    /// Output directory Vivado HLS creates for the project
    #[serde(default)]
    pub project_name: String,

    /// Name of the synthesized top-level C function
    #[serde(default)]
    pub top_level_function_name: String,

    #[serde(default)]
    pub language: Languages,

    /// Vendor GUI executable
    #[serde(default = "default_hls_executable")]
    pub hls_executable: String,

    /// Overrides the platform's default document opener
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opener: Option<String>,
}

impl HlsConfig {
    /// Default configuration for a project rooted at `dir`.
    pub fn default_for_dir(dir: &Path) -> Self {
        Self {
            project_name: default_project_name(dir),
            top_level_function_name: String::new(),
            language: Languages::default(),
            hls_executable: default_hls_executable(),
            opener: None,
        }
    }

    /// Location of the project folder relative to `base_dir`.
    pub fn project_dir(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.project_name)
    }

    pub fn languages(&self) -> &[HdlLanguage] {
        self.language.as_slice()
    }
}

/// `proj_<dirname>`, matching what the build commands name new projects.
pub fn default_project_name(dir: &Path) -> String {
    match dir.file_name() {
        Some(name) => format!("proj_{}", name.to_string_lossy()),
        None => String::new(),
    }
}
