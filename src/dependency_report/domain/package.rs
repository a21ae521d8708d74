use crate::shared::error::ReportError;
use crate::shared::Result;

/// Maximum length for package identifiers (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 1024;

/// NewType wrapper for a caller-supplied root package identifier
///
/// Accepts import paths (`github.com/org/repo/pkg`), relative directories
/// (`./cmd/tool`) and patterns (`./...`). Identifiers end up as arguments to
/// an external process, so anything that could be read as a flag is refused.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(Self::invalid("Package name cannot be empty"));
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            return Err(Self::invalid(&format!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            )));
        }

        if name.starts_with('-') {
            return Err(Self::invalid(&format!(
                "Package name '{}' must not start with '-'",
                name
            )));
        }

        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(Self::invalid(
                "Package name contains whitespace or control characters",
            ));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn invalid(message: &str) -> anyhow::Error {
        ReportError::Validation {
            message: message.to_string(),
        }
        .into()
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_import_path() {
        let name = PackageName::new("github.com/sirupsen/logrus".to_string()).unwrap();
        assert_eq!(name.as_str(), "github.com/sirupsen/logrus");
    }

    #[test]
    fn test_package_name_relative_pattern() {
        let name = PackageName::new("./...".to_string()).unwrap();
        assert_eq!(name.to_string(), "./...");
    }

    #[test]
    fn test_package_name_empty() {
        assert!(PackageName::new(String::new()).is_err());
    }

    #[test]
    fn test_package_name_rejects_flag_lookalike() {
        let err = PackageName::new("-toolexec=evil".to_string()).unwrap_err();
        assert!(err.to_string().contains("must not start with '-'"));
    }

    #[test]
    fn test_package_name_rejects_whitespace() {
        assert!(PackageName::new("example.com/a b".to_string()).is_err());
        assert!(PackageName::new("example.com/a\nb".to_string()).is_err());
    }

    #[test]
    fn test_package_name_too_long() {
        let long = format!("example.com/{}", "a".repeat(MAX_PACKAGE_NAME_LENGTH));
        let err = PackageName::new(long).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }
}
