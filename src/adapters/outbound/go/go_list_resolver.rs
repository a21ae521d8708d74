use crate::dependency_report::domain::ModuleInfo;
use crate::ports::outbound::{ImportResolver, ResolvedImports};
use crate::shared::error::ReportError;
use crate::shared::Result;
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Command;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GoPackage {
    import_path: String,
    #[serde(default)]
    dir: Option<PathBuf>,
    #[serde(default)]
    module: Option<GoModule>,
    #[serde(default)]
    imports: Vec<String>,
    #[serde(default)]
    test_imports: Vec<String>,
    #[serde(default)]
    x_test_imports: Vec<String>,
    #[serde(default)]
    dep_only: bool,
    #[serde(default)]
    error: Option<GoPackageError>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GoModule {
    path: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    dir: Option<PathBuf>,
    #[serde(default)]
    replace: Option<Box<GoModule>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GoPackageError {
    err: String,
}

/// What a root identifier expanded to
#[derive(Debug, Clone)]
struct RootScope {
    /// Module path of the root, `None` in GOPATH mode
    module_path: Option<String>,
    /// Import-path prefix treated as "the project" when there is no module
    project_prefix: String,
    resolved: ResolvedImports,
}

impl RootScope {
    fn is_internal(&self, package: &GoPackage) -> bool {
        match (&self.module_path, &package.module) {
            (Some(root_module), Some(module)) => &module.path == root_module,
            (None, None) => is_under(&package.import_path, &self.project_prefix),
            _ => false,
        }
    }

    /// Standard-library imports have no dot in their first path element
    ///
    /// The project's own packages are never standard, even when their path
    /// is not dotted (`myapp/internal/db`).
    fn is_standard_import(&self, import: &str) -> bool {
        if import == "C" {
            return true;
        }
        let project = self.module_path.as_deref().unwrap_or(&self.project_prefix);
        if is_under(import, project) {
            return false;
        }
        let first = import.split('/').next().unwrap_or_default();
        !first.contains('.')
    }
}

/// Whether `import_path` is `prefix` itself or a package below it
fn is_under(import_path: &str, prefix: &str) -> bool {
    import_path
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// GoListResolver adapter resolving imports with `go list -json`
///
/// Each root is loaded once with `go list -e -deps -json`, which also fills a
/// cache with every package the root transitively imports. Packages outside
/// that listing (test-only imports, mostly) are loaded one at a time.
/// Standard-library imports are dropped.
pub struct GoListResolver {
    go_binary: PathBuf,
    working_dir: PathBuf,
    packages: RefCell<HashMap<String, GoPackage>>,
    roots: RefCell<HashMap<String, RootScope>>,
}

impl GoListResolver {
    pub fn new(working_dir: PathBuf) -> Self {
        Self {
            go_binary: PathBuf::from("go"),
            working_dir,
            packages: RefCell::new(HashMap::new()),
            roots: RefCell::new(HashMap::new()),
        }
    }

    pub fn with_go_binary(mut self, go_binary: PathBuf) -> Self {
        self.go_binary = go_binary;
        self
    }

    fn run_go_list(&self, target: &str, with_deps: bool) -> Result<Vec<GoPackage>> {
        let mut command = Command::new(&self.go_binary);
        command.arg("list").arg("-e").arg("-json");
        if with_deps {
            command.arg("-deps");
        }
        command.arg("--").arg(target).current_dir(&self.working_dir);

        tracing::debug!(
            package = target,
            with_deps,
            go = %self.go_binary.display(),
            "running go list"
        );
        let output = command.output().map_err(|e| ReportError::GoList {
            package: target.to_string(),
            details: format!("failed to run {}: {}", self.go_binary.display(), e),
        })?;

        if !output.status.success() && output.stdout.is_empty() {
            return Err(ReportError::GoList {
                package: target.to_string(),
                details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Self::parse_listing(&output.stdout).map_err(|e| {
            ReportError::GoList {
                package: target.to_string(),
                details: format!("unreadable go list output: {}", e),
            }
            .into()
        })
    }

    /// `go list -json` prints a stream of concatenated JSON objects
    fn parse_listing(stdout: &[u8]) -> serde_json::Result<Vec<GoPackage>> {
        serde_json::Deserializer::from_slice(stdout)
            .into_iter::<GoPackage>()
            .collect()
    }

    fn root_scope(&self, root: &str) -> Result<RootScope> {
        if let Some(scope) = self.roots.borrow().get(root) {
            return Ok(scope.clone());
        }

        let listing = self.run_go_list(root, true)?;
        let scope = self.register_root(root, listing)?;
        Ok(scope)
    }

    /// Caches a root's listing and merges its matched packages into one scope
    fn register_root(&self, root: &str, listing: Vec<GoPackage>) -> Result<RootScope> {
        let matched: Vec<GoPackage> = listing.iter().filter(|p| !p.dep_only).cloned().collect();

        let first = matched.first().ok_or_else(|| ReportError::GoList {
            package: root.to_string(),
            details: "pattern matched no packages".to_string(),
        })?;
        if let Some(err) = matched.iter().find_map(|p| p.error.as_ref()) {
            anyhow::bail!("{}", err.err.trim());
        }

        let module_path = first.module.as_ref().map(|m| m.path.clone());
        let project_prefix = Self::project_prefix(&first.import_path);

        let mut scope = RootScope {
            module_path,
            project_prefix,
            resolved: ResolvedImports::new(Vec::new(), true),
        };

        let mut imports = Vec::new();
        let mut test_imports = Vec::new();
        for package in &matched {
            let resolved = Self::to_resolved(package, &scope);
            for import in resolved.imports {
                if !imports.contains(&import) {
                    imports.push(import);
                }
            }
            for import in resolved.test_imports {
                if !test_imports.contains(&import) {
                    test_imports.push(import);
                }
            }
        }
        scope.resolved = ResolvedImports::new(imports, true).with_test_imports(test_imports);
        if let Some(module) = first.module.as_ref() {
            scope.resolved = scope.resolved.with_module(Self::module_info(first, module));
        }

        let mut packages = self.packages.borrow_mut();
        for package in listing {
            packages.insert(package.import_path.clone(), package);
        }
        self.roots
            .borrow_mut()
            .insert(root.to_string(), scope.clone());

        Ok(scope)
    }

    fn package(&self, import_path: &str) -> Result<GoPackage> {
        if let Some(package) = self.packages.borrow().get(import_path) {
            return Ok(package.clone());
        }

        let package = self
            .run_go_list(import_path, false)?
            .into_iter()
            .next()
            .ok_or_else(|| ReportError::GoList {
                package: import_path.to_string(),
                details: "go list returned no package".to_string(),
            })?;
        self.packages
            .borrow_mut()
            .insert(import_path.to_string(), package.clone());
        Ok(package)
    }

    fn to_resolved(package: &GoPackage, scope: &RootScope) -> ResolvedImports {
        let keep = |import: &&String| {
            import.as_str() != package.import_path && !scope.is_standard_import(import)
        };

        let imports: Vec<String> = package.imports.iter().filter(keep).cloned().collect();
        let test_imports: Vec<String> = package
            .test_imports
            .iter()
            .chain(&package.x_test_imports)
            .filter(keep)
            .cloned()
            .collect();

        let resolved = ResolvedImports::new(imports, scope.is_internal(package))
            .with_test_imports(test_imports);

        match &package.module {
            Some(module) => resolved.with_module(Self::module_info(package, module)),
            None => resolved.with_module(ModuleInfo::new(
                package.import_path.clone(),
                None,
                package.dir.clone(),
            )),
        }
    }

    /// Applies `replace` directives: version and directory come from the replacement
    fn module_info(package: &GoPackage, module: &GoModule) -> ModuleInfo {
        let effective = module.replace.as_deref().unwrap_or(module);
        ModuleInfo::new(
            module.path.clone(),
            effective.version.clone(),
            effective.dir.clone().or_else(|| package.dir.clone()),
        )
    }

    /// `github.com/org/repo/cmd/x` -> `github.com/org/repo`, `app/cmd` -> `app`
    fn project_prefix(import_path: &str) -> String {
        let segments: Vec<&str> = import_path.split('/').collect();
        let take = if segments.first().is_some_and(|s| s.contains('.')) {
            3
        } else {
            1
        };
        segments
            .into_iter()
            .take(take)
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl ImportResolver for GoListResolver {
    fn resolve_imports(&self, identifier: &str, root: &str) -> Result<ResolvedImports> {
        let scope = self.root_scope(root)?;
        if identifier == root {
            return Ok(scope.resolved);
        }

        let package = self.package(identifier)?;
        if let Some(err) = &package.error {
            anyhow::bail!("{}", err.err.trim());
        }
        Ok(Self::to_resolved(&package, &scope))
    }
}
