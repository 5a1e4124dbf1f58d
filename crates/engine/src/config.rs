use std::path::PathBuf;

/// Directory segment marking version-control metadata. Directories whose
/// path contains this followed by a separator are never scanned.
pub const VCS_DIR_SEGMENT: &str = ".git";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory to scan.
    pub root: PathBuf,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}
