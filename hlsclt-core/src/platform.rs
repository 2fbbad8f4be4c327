// Standard library
use std::env;

/// Operating systems hlsclt knows how to open documents on.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Os {
    Linux,
    MacOS,
    Windows,
    Unsupported,
}

impl Os {
    pub fn current() -> Self {
        match env::consts::OS {
            "linux" => Os::Linux,
            "macos" => Os::MacOS,
            "windows" => Os::Windows,
            _ => Os::Unsupported,
        }
    }

    /// The command that opens a file in the desktop's default viewer.
    pub fn default_opener(self) -> &'static str {
        match self {
            Os::MacOS => "open",
            Os::Windows => "explorer",
            // Other unixes generally ship xdg-utils as well
            Os::Linux | Os::Unsupported => "xdg-open",
        }
    }
}

/// Default document opener for the running platform.
pub fn default_opener() -> &'static str {
    Os::current().default_opener()
}
