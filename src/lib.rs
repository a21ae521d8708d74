//! go-dep-report - license report for the imports of Go packages
//!
//! Walks the import graph of one or more root packages (via `go list`),
//! names the license of every third-party package reached, and writes one
//! `parent, package, license` entry per import edge as CSV, JSON or YAML.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_report`): Package tree, flattening and license classification
//! - **Application Layer** (`application`): Use cases, DTOs and adapter factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Errors, logging and file-security helpers
//!
//! # Example
//!
//! ```no_run
//! use go_dep_report::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let import_resolver = GoListResolver::new(PathBuf::from("."));
//! let license_repository = LicenseFileRepository::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateReportUseCase::new(import_resolver, license_repository, progress_reporter);
//!
//! // Execute
//! let roots = vec![PackageName::new("./...".to_string())?];
//! let request = ReportRequest::new(roots, TreeOptions::default())?;
//! let mut formatter = CsvFormatter::new();
//! let summary = use_case.execute(&request, &mut formatter, &mut std::io::stdout())?;
//! eprintln!("{}", summary);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod dependency_report;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSink, LicenseFileRepository, StdoutSink};
    pub use crate::adapters::outbound::formatters::{CsvFormatter, JsonFormatter, YamlFormatter};
    pub use crate::adapters::outbound::go::GoListResolver;
    pub use crate::adapters::outbound::network::{
        DepsDevLicenseRepository, FallbackLicenseRepository,
    };
    pub use crate::application::dto::{LicenseSource, OutputFormat, ReportRequest, ReportSummary};
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::dependency_report::domain::{
        Entry, LicenseName, ModuleInfo, PackageName, PackageNode,
    };
    pub use crate::dependency_report::policies::LicenseClassifier;
    pub use crate::dependency_report::services::{DependencyTree, ReportFlattener, TreeOptions};
    pub use crate::ports::outbound::{
        ImportResolver, LicenseRepository, ProgressReporter, ReportFormatter, ResolvedImports,
    };
    pub use crate::shared::Result;
}
