use crate::dependency_report::domain::ModuleInfo;
use crate::ports::outbound::LicenseRepository;
use crate::shared::Result;
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.deps.dev/v3";

#[derive(Debug, Deserialize)]
struct DepsDevVersion {
    #[serde(default)]
    licenses: Vec<String>,
}

/// DepsDevLicenseRepository adapter asking the deps.dev API for module licenses
///
/// Licenses are recorded per module version, so packages without a versioned
/// module (the main module, GOPATH checkouts, local replacements) are not
/// looked up. Answers are cached per `module@version`.
pub struct DepsDevLicenseRepository {
    client: reqwest::blocking::Client,
    base_url: String,
    max_retries: u32,
    cache: RefCell<HashMap<(String, String), Option<String>>>,
}

impl DepsDevLicenseRepository {
    /// Creates a new deps.dev repository with default configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("go-dep-report/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_retries: 3,
            cache: RefCell::new(HashMap::new()),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Validates a module path or version before it is placed in a URL
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.is_empty() {
            anyhow::bail!("{} is empty", component_type);
        }

        if component.contains("..") || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path traversal characters which are not allowed",
                component_type
            );
        }

        if component.contains('#')
            || component.contains('?')
            || component.chars().any(|c| c.is_whitespace() || c.is_control())
        {
            anyhow::bail!("Security: {} contains URL-unsafe characters", component_type);
        }

        Ok(())
    }

    fn version_url(&self, module: &str, version: &str) -> Result<String> {
        Self::validate_url_component(module, "Module path")?;
        Self::validate_url_component(version, "Version")?;

        Ok(format!(
            "{}/systems/go/packages/{}/versions/{}",
            self.base_url,
            urlencoding::encode(module),
            urlencoding::encode(version)
        ))
    }

    fn fetch_with_retry(&self, url: &str) -> Result<Option<DepsDevVersion>> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch(url) {
                Ok(result) => return Ok(result),
                Err(e) => {
                    tracing::debug!(url, attempt, error = %e, "deps.dev request failed");
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        std::thread::sleep(Duration::from_millis(100 * attempt as u64));
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("deps.dev request was not attempted")))
    }

    fn fetch(&self, url: &str) -> Result<Option<DepsDevVersion>> {
        let response = self.client.get(url).send()?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            anyhow::bail!("deps.dev API returned status code {}", response.status());
        }

        Ok(Some(response.json()?))
    }

    fn join_licenses(licenses: Vec<String>) -> Option<String> {
        let licenses: Vec<String> = licenses
            .into_iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        if licenses.is_empty() {
            None
        } else {
            Some(licenses.join(" AND "))
        }
    }
}

impl LicenseRepository for DepsDevLicenseRepository {
    fn lookup_license(&self, package: &str, module: Option<&ModuleInfo>) -> Result<Option<String>> {
        let Some((path, version)) = module.and_then(|m| Some((m.path.clone(), m.version.clone()?)))
        else {
            tracing::debug!(package, "no module version, skipping deps.dev lookup");
            return Ok(None);
        };

        let key = (path, version);
        if let Some(cached) = self.cache.borrow().get(&key) {
            return Ok(cached.clone());
        }

        let url = self.version_url(&key.0, &key.1)?;
        let license = self
            .fetch_with_retry(&url)?
            .and_then(|v| Self::join_licenses(v.licenses));

        self.cache.borrow_mut().insert(key, license.clone());
        Ok(license)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(path: &str, version: Option<&str>) -> ModuleInfo {
        ModuleInfo::new(path.to_string(), version.map(str::to_string), None)
    }

    #[test]
    fn test_client_creation() {
        assert!(DepsDevLicenseRepository::new().is_ok());
    }

    #[test]
    fn test_version_url_encodes_module_path() {
        let repo = DepsDevLicenseRepository::new().unwrap();
        let url = repo
            .version_url("github.com/sirupsen/logrus", "v1.9.3")
            .unwrap();
        assert_eq!(
            url,
            "https://api.deps.dev/v3/systems/go/packages/github.com%2Fsirupsen%2Flogrus/versions/v1.9.3"
        );
    }

    #[test]
    fn test_version_url_rejects_unsafe_components() {
        let repo = DepsDevLicenseRepository::new().unwrap();
        assert!(repo.version_url("github.com/../etc", "v1.0.0").is_err());
        assert!(repo.version_url("github.com/a/b", "v1.0.0?x=1").is_err());
        assert!(repo.version_url("github.com/a/b#frag", "v1.0.0").is_err());
        assert!(repo.version_url("github.com/a b", "v1.0.0").is_err());
        assert!(repo.version_url("github.com/a/b", "").is_err());
    }

    #[test]
    fn test_join_licenses() {
        assert_eq!(
            DepsDevLicenseRepository::join_licenses(vec!["MIT".into(), "Apache-2.0".into()]),
            Some("MIT AND Apache-2.0".to_string())
        );
        assert_eq!(
            DepsDevLicenseRepository::join_licenses(vec![" ".into()]),
            None
        );
        assert_eq!(DepsDevLicenseRepository::join_licenses(vec![]), None);
    }

    #[test]
    fn test_response_parsing_tolerates_missing_licenses() {
        let parsed: DepsDevVersion =
            serde_json::from_str(r#"{"versionKey":{"system":"GO"}}"#).unwrap();
        assert!(parsed.licenses.is_empty());

        let parsed: DepsDevVersion =
            serde_json::from_str(r#"{"licenses":["BSD-3-Clause"],"links":[]}"#).unwrap();
        assert_eq!(parsed.licenses, vec!["BSD-3-Clause"]);
    }

    #[test]
    fn test_unversioned_module_is_not_looked_up() {
        let repo = DepsDevLicenseRepository::new()
            .unwrap()
            .with_base_url("http://127.0.0.1:9");

        assert_eq!(repo.lookup_license("example.com/app", None).unwrap(), None);
        let main_module = module("example.com/app", None);
        assert_eq!(
            repo.lookup_license("example.com/app/util", Some(&main_module))
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_unreachable_service_is_an_error() {
        let repo = DepsDevLicenseRepository::new()
            .unwrap()
            .with_base_url("http://127.0.0.1:9/")
            .with_max_retries(1);

        let module = module("github.com/acme/lib", Some("v1.0.0"));
        assert!(repo.lookup_license("github.com/acme/lib", Some(&module)).is_err());
    }
}
