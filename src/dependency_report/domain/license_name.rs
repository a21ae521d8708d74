/// Sentinel reported when no license could be determined
pub const UNKNOWN_LICENSE: &str = "Unknown";

/// Sentinel reported for packages whose imports could not be resolved
pub const UNRESOLVED_LICENSE: &str = "Unresolved";

/// LicenseName value object
///
/// Always holds a non-empty string: blank lookup results collapse into the
/// `Unknown` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LicenseName(String);

impl LicenseName {
    /// Builds a license name from an optional lookup result
    pub fn from_lookup(license: Option<String>) -> Self {
        license
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .map(Self)
            .unwrap_or_else(Self::unknown)
    }

    pub fn unknown() -> Self {
        Self(UNKNOWN_LICENSE.to_string())
    }

    pub fn unresolved() -> Self {
        Self(UNRESOLVED_LICENSE.to_string())
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_LICENSE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LicenseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
