/// Mock implementations for testing
mod mock_import_resolver;
mod mock_license_repository;
mod mock_progress_reporter;

pub use mock_import_resolver::MockImportResolver;
pub use mock_license_repository::MockLicenseRepository;
pub use mock_progress_reporter::MockProgressReporter;
