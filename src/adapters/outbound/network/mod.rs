/// Network and composite license lookup adapters
mod deps_dev_client;
mod fallback_license_repository;

pub use deps_dev_client::DepsDevLicenseRepository;
pub use fallback_license_repository::FallbackLicenseRepository;
