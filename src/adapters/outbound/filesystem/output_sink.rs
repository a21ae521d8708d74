use crate::shared::error::ReportError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// FileSink adapter opening the report file before any resolution work
///
/// The file is created (or truncated) up front so a bad `--out-file` fails
/// fast instead of after a long `go list` run.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(ReportError::SinkOpen {
                    path: self.path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Creates the file, refusing to write through a symbolic link
    pub fn open(&self) -> Result<Box<dyn Write>> {
        self.validate_parent_directory()?;
        validate_not_symlink(&self.path, "write")?;

        let file = File::create(&self.path).map_err(|e| ReportError::SinkOpen {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        tracing::debug!(path = %self.path.display(), "opened output file");
        Ok(Box::new(BufWriter::new(file)))
    }
}

/// StdoutSink adapter writing the report to standard output
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }

    pub fn open(&self) -> Result<Box<dyn Write>> {
        Ok(Box::new(BufWriter::new(io::stdout())))
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}
