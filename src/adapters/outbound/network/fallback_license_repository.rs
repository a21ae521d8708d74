use crate::dependency_report::domain::ModuleInfo;
use crate::ports::outbound::LicenseRepository;
use crate::shared::Result;

/// FallbackLicenseRepository asks a primary repository first, then a secondary one
///
/// The secondary repository is consulted when the primary finds nothing or
/// fails. An error is returned only when the secondary fails too.
pub struct FallbackLicenseRepository<P: LicenseRepository, S: LicenseRepository> {
    primary: P,
    secondary: S,
}

impl<P: LicenseRepository, S: LicenseRepository> FallbackLicenseRepository<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: LicenseRepository, S: LicenseRepository> LicenseRepository
    for FallbackLicenseRepository<P, S>
{
    fn lookup_license(
        &self,
        package: &str,
        module: Option<&ModuleInfo>,
    ) -> Result<Option<String>> {
        match self.primary.lookup_license(package, module) {
            Ok(Some(license)) => return Ok(Some(license)),
            Ok(None) => {}
            Err(e) => {
                tracing::debug!(package, error = %e, "primary license lookup failed");
            }
        }
        self.secondary.lookup_license(package, module)
    }
}
