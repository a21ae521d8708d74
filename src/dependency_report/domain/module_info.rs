use std::path::PathBuf;

/// Module that owns a package, as reported by the import resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    pub path: String,
    /// `None` for the main module and for GOPATH-mode packages
    pub version: Option<String>,
    /// Directory holding the module source, when it is available locally
    pub dir: Option<PathBuf>,
}

impl ModuleInfo {
    pub fn new(path: String, version: Option<String>, dir: Option<PathBuf>) -> Self {
        Self { path, version, dir }
    }
}
