use crate::dependency_report::domain::ModuleInfo;
use crate::shared::Result;

/// LicenseRepository port for fetching license information
///
/// This port abstracts the data source (license files on disk, a remote
/// metadata API) used to name the license of an external package.
pub trait LicenseRepository {
    /// Looks up the license of a single package
    ///
    /// # Arguments
    /// * `package` - Package identifier
    /// * `module` - Owning module as reported by the import resolver, if known
    ///
    /// # Returns
    /// `Some(name)` for a determined license, `None` when nothing could be found
    ///
    /// # Errors
    /// Returns an error only when the lookup itself breaks (I/O, network);
    /// callers treat it like `None`
    fn lookup_license(
        &self,
        package: &str,
        module: Option<&ModuleInfo>,
    ) -> Result<Option<String>>;
}

impl<T: LicenseRepository + ?Sized> LicenseRepository for Box<T> {
    fn lookup_license(
        &self,
        package: &str,
        module: Option<&ModuleInfo>,
    ) -> Result<Option<String>> {
        (**self).lookup_license(package, module)
    }
}
