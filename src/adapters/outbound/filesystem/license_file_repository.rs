use crate::dependency_report::domain::ModuleInfo;
use crate::dependency_report::policies::LicenseClassifier;
use crate::ports::outbound::LicenseRepository;
use crate::shared::security::{read_regular_file, MAX_LICENSE_FILE_SIZE};
use crate::shared::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// How many parent directories are searched for packages outside any module
const MAX_PARENT_SEARCH: usize = 3;

/// LicenseFileRepository adapter reading license files from module sources
///
/// Looks for `LICENSE*`, `LICENCE*` and `COPYING*` files in the directory of
/// the module that owns a package (as reported by the import resolver) and
/// classifies their text. Packages resolved without a module are searched in
/// their own directory and a few parents, stopping at the first directory
/// that holds a license file.
pub struct LicenseFileRepository {
    cache: RefCell<HashMap<PathBuf, Option<String>>>,
}

impl LicenseFileRepository {
    pub fn new() -> Self {
        Self {
            cache: RefCell::new(HashMap::new()),
        }
    }

    fn candidate_dirs(package: &str, module: &ModuleInfo) -> Vec<PathBuf> {
        let Some(dir) = module.dir.as_deref() else {
            return Vec::new();
        };

        // A module synthesized from the package itself means GOPATH mode
        let depth = if module.version.is_none() && module.path == package {
            MAX_PARENT_SEARCH
        } else {
            0
        };
        dir.ancestors()
            .take(depth + 1)
            .map(Path::to_path_buf)
            .collect()
    }

    fn license_in_dir(&self, dir: &Path) -> Option<String> {
        if let Some(cached) = self.cache.borrow().get(dir) {
            return cached.clone();
        }

        let license = Self::scan_dir(dir);
        self.cache
            .borrow_mut()
            .insert(dir.to_path_buf(), license.clone());
        license
    }

    fn scan_dir(dir: &Path) -> Option<String> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "cannot list directory");
                return None;
            }
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_some_and(LicenseClassifier::is_license_file_name)
            })
            .map(|entry| entry.path())
            .collect();
        if files.is_empty() {
            return None;
        }
        files.sort();

        let ids: Vec<&'static str> = files
            .iter()
            .filter_map(|path| {
                match read_regular_file(path, "license file", MAX_LICENSE_FILE_SIZE) {
                    Ok(text) => {
                        let id = LicenseClassifier::classify(&text);
                        if id.is_none() {
                            tracing::debug!(file = %path.display(), "license text not recognized");
                        }
                        id
                    }
                    Err(e) => {
                        tracing::debug!(
                            file = %path.display(),
                            error = %e,
                            "skipping license file"
                        );
                        None
                    }
                }
            })
            .collect();

        LicenseClassifier::combine(ids)
    }
}

impl Default for LicenseFileRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseRepository for LicenseFileRepository {
    fn lookup_license(&self, package: &str, module: Option<&ModuleInfo>) -> Result<Option<String>> {
        let Some(module) = module else {
            return Ok(None);
        };

        for dir in Self::candidate_dirs(package, module) {
            if let Some(license) = self.license_in_dir(&dir) {
                return Ok(Some(license));
            }
        }
        Ok(None)
    }
}
