/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (go toolchain, file system, network, console).
pub mod formatter;
pub mod import_resolver;
pub mod license_repository;
pub mod progress_reporter;

pub use formatter::ReportFormatter;
pub use import_resolver::{ImportResolver, ResolvedImports};
pub use license_repository::LicenseRepository;
pub use progress_reporter::ProgressReporter;
