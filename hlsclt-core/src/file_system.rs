//! File system helpers for inspecting HLS build output.

use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Check that a path exists and is a regular file
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Check that a path exists and is a directory
pub fn dir_exists(path: &Path) -> bool {
    path.is_dir()
}

/// Call `visit` for every line of a text file.
///
/// Vendor reports are not guaranteed to be UTF-8, so invalid bytes are
/// replaced rather than treated as an error.
pub fn for_each_line<F>(path: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&str),
{
    let mut reader = BufReader::new(File::open(path)?);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        visit(line.trim_end_matches(['\n', '\r']));
    }
    Ok(())
}
