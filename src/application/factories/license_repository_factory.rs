use crate::adapters::outbound::filesystem::LicenseFileRepository;
use crate::adapters::outbound::network::{DepsDevLicenseRepository, FallbackLicenseRepository};
use crate::application::dto::LicenseSource;
use crate::ports::outbound::LicenseRepository;
use crate::shared::Result;

/// Factory for the license repository selected with `--license-source`
pub struct LicenseRepositoryFactory;

impl LicenseRepositoryFactory {
    /// # Errors
    /// Fails when the HTTP client for a network source cannot be built.
    pub fn create(source: LicenseSource) -> Result<Box<dyn LicenseRepository>> {
        Ok(match source {
            LicenseSource::Local => Box::new(LicenseFileRepository::new()),
            LicenseSource::DepsDev => Box::new(DepsDevLicenseRepository::new()?),
            LicenseSource::Auto => Box::new(FallbackLicenseRepository::new(
                LicenseFileRepository::new(),
                DepsDevLicenseRepository::new()?,
            )),
        })
    }
}
