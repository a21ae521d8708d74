mod formatter_factory;
mod license_repository_factory;
mod sink_factory;

pub use formatter_factory::FormatterFactory;
pub use license_repository_factory::LicenseRepositoryFactory;
pub use sink_factory::{SinkFactory, SinkType};
