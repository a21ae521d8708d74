use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a broken dependency graph from
/// a misconfigured invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report generated (serialization problems are logged, not surfaced here)
    Success = 0,
    /// A caller-specified root package could not be resolved
    ResolutionFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config file, output sink, file I/O, validation)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code matching the error at the top of an error chain
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<ReportError>() {
            Some(ReportError::RootResolution { .. }) => ExitCode::ResolutionFailed,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ResolutionFailed => write!(f, "Resolution Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to resolve root package: {package}\nDetails: {details}\n\n💡 Hint: Run from inside the Go module, or point --dir at it, and check that `go list {package}` succeeds")]
    RootResolution { package: String, details: String },

    #[error("Failed to run go list for: {package}\nDetails: {details}")]
    GoList { package: String, details: String },

    #[error("Failed to open output file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    SinkOpen { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileRead { path: PathBuf, details: String },

    #[error("Invalid working directory: {path}\nReason: {reason}\n\n💡 Hint: Pass the Go module directory with --dir")]
    InvalidWorkingDir { path: PathBuf, reason: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },

    /// Validation error for newtypes and requests
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    Security {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
