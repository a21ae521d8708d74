use std::collections::HashMap;
use go_dep_report::prelude::*;

/// Mock LicenseRepository for testing
pub struct MockLicenseRepository {
    pub licenses: HashMap<String, String>,
    pub should_fail: bool,
}

impl MockLicenseRepository {
    pub fn new() -> Self {
        Self {
            licenses: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_license(mut self, package: &str, license: &str) -> Self {
        self.licenses
            .insert(package.to_string(), license.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            licenses: HashMap::new(),
            should_fail: true,
        }
    }
}

impl Default for MockLicenseRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseRepository for MockLicenseRepository {
    fn lookup_license(
        &self,
        package: &str,
        _module: Option<&ModuleInfo>,
    ) -> Result<Option<String>> {
        if self.should_fail {
            anyhow::bail!("Mock license repository failure");
        }
        Ok(self.licenses.get(package).cloned())
    }
}
