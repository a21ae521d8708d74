/// Where license names come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LicenseSource {
    /// License files in the module sources on disk (default)
    #[default]
    Local,
    /// The deps.dev metadata API
    DepsDev,
    /// Local files first, deps.dev when they yield nothing
    Auto,
}

impl std::str::FromStr for LicenseSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(LicenseSource::Local),
            "deps-dev" | "depsdev" => Ok(LicenseSource::DepsDev),
            "auto" => Ok(LicenseSource::Auto),
            _ => Err(format!(
                "Invalid license source: {}. Please specify 'local', 'deps-dev' or 'auto'",
                s
            )),
        }
    }
}

impl std::fmt::Display for LicenseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseSource::Local => write!(f, "local"),
            LicenseSource::DepsDev => write!(f, "deps-dev"),
            LicenseSource::Auto => write!(f, "auto"),
        }
    }
}
