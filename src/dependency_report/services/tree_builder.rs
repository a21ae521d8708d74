use crate::dependency_report::domain::{LicenseName, ModuleInfo, PackageNode};
use crate::ports::outbound::{ImportResolver, LicenseRepository, ResolvedImports};
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// Traversal settings for one dependency tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeOptions {
    /// Maximum number of import edges from the root; `0` means unbounded
    pub max_depth: usize,
    /// Expand the imports of packages that belong to the root's project
    pub resolve_internal: bool,
    /// Include imports that only the tests of a package pull in
    pub resolve_test: bool,
}

impl TreeOptions {
    pub fn new(max_depth: usize, resolve_internal: bool, resolve_test: bool) -> Self {
        Self {
            max_depth,
            resolve_internal,
            resolve_test,
        }
    }
}

/// DependencyTree builds the import tree of a single root package
///
/// The tree is edge-oriented: a package reached from two different parents is
/// expanded under both. Cycles are cut with a visitation set scoped to the
/// current root-to-node path, so a package already on the path becomes a leaf.
///
/// Resolver answers and license names are memoized for the lifetime of the
/// tree, which keeps repeated subtrees from hitting the collaborators twice.
pub struct DependencyTree<'a> {
    resolver: &'a dyn ImportResolver,
    licenses: &'a dyn LicenseRepository,
    options: TreeOptions,
    root: Option<PackageNode>,
    resolved: HashMap<String, std::result::Result<Rc<ResolvedImports>, String>>,
    license_cache: HashMap<String, LicenseName>,
}

impl<'a> DependencyTree<'a> {
    /// Hard ceiling on recursion when no depth limit is configured
    const MAX_RECURSION_DEPTH: usize = 512;

    pub fn new(
        resolver: &'a dyn ImportResolver,
        licenses: &'a dyn LicenseRepository,
        options: TreeOptions,
    ) -> Self {
        Self {
            resolver,
            licenses,
            options,
            root: None,
            resolved: HashMap::new(),
            license_cache: HashMap::new(),
        }
    }

    pub fn options(&self) -> TreeOptions {
        self.options
    }

    /// Root node, available once `resolve` succeeded
    pub fn root(&self) -> Option<&PackageNode> {
        self.root.as_ref()
    }

    /// Resolves `root` and its reachable imports into this tree, returning
    /// the root node
    ///
    /// # Errors
    /// Returns `ReportError::RootResolution` when the root itself cannot be
    /// resolved, and a validation error when the tree was already resolved.
    /// Failures below the root are recorded as unresolved nodes instead.
    pub fn resolve(&mut self, root: &str) -> Result<&PackageNode> {
        if self.root.is_some() {
            return Err(ReportError::Validation {
                message: format!(
                    "dependency tree was already resolved, refusing to resolve '{}'",
                    root
                ),
            }
            .into());
        }

        let resolved = match self.resolver.resolve_imports(root, root) {
            Ok(resolved) => Rc::new(resolved),
            Err(e) => {
                return Err(ReportError::RootResolution {
                    package: root.to_string(),
                    details: format!("{:#}", e),
                }
                .into())
            }
        };
        self.resolved
            .insert(root.to_string(), Ok(Rc::clone(&resolved)));

        let mut node = if resolved.internal {
            PackageNode::internal(root)
        } else {
            let license = self.license_for(root, resolved.module.as_ref());
            PackageNode::external(root, license)
        };

        let mut path = HashSet::new();
        path.insert(root.to_string());
        self.expand(&mut node, &resolved, root, 0, &mut path);

        tracing::debug!(
            root,
            dependencies = node.dependencies().len(),
            unresolved = node.unresolved_count(),
            "dependency tree resolved"
        );
        Ok(self.root.insert(node))
    }

    /// Attaches the children of `node`, which sits `depth` edges below the root
    fn expand(
        &mut self,
        node: &mut PackageNode,
        resolved: &ResolvedImports,
        root: &str,
        depth: usize,
        path: &mut HashSet<String>,
    ) {
        if self.options.max_depth > 0 && depth >= self.options.max_depth {
            return;
        }

        if depth >= Self::MAX_RECURSION_DEPTH {
            tracing::warn!(
                package = node.name(),
                max = Self::MAX_RECURSION_DEPTH,
                "maximum recursion depth reached, dependency chain truncated"
            );
            return;
        }

        let test_imports: &[String] = if self.options.resolve_test {
            &resolved.test_imports
        } else {
            &[]
        };

        for import in resolved.imports.iter().chain(test_imports) {
            if node.has_dependency(import) {
                continue;
            }
            let child = self.build_child(import, root, depth + 1, path);
            node.add_dependency(child);
        }
    }

    fn build_child(
        &mut self,
        name: &str,
        root: &str,
        depth: usize,
        path: &mut HashSet<String>,
    ) -> PackageNode {
        let resolved = match self.lookup(name, root) {
            Ok(resolved) => resolved,
            Err(details) => {
                tracing::warn!(package = name, error = %details, "could not resolve package");
                return PackageNode::unresolved(name, details);
            }
        };

        let mut child = if resolved.internal {
            PackageNode::internal(name)
        } else {
            let license = self.license_for(name, resolved.module.as_ref());
            PackageNode::external(name, license)
        };

        if path.contains(name) {
            tracing::debug!(package = name, "import cycle, not expanding again");
            return child;
        }

        if resolved.internal && !self.options.resolve_internal {
            return child;
        }

        path.insert(name.to_string());
        self.expand(&mut child, &resolved, root, depth, path);
        path.remove(name);

        child
    }

    fn lookup(
        &mut self,
        name: &str,
        root: &str,
    ) -> std::result::Result<Rc<ResolvedImports>, String> {
        if let Some(cached) = self.resolved.get(name) {
            return cached.clone();
        }

        tracing::debug!(package = name, "resolving imports");
        let result = self
            .resolver
            .resolve_imports(name, root)
            .map(Rc::new)
            .map_err(|e| format!("{:#}", e));
        self.resolved.insert(name.to_string(), result.clone());
        result
    }

    fn license_for(&mut self, name: &str, module: Option<&ModuleInfo>) -> LicenseName {
        if let Some(cached) = self.license_cache.get(name) {
            return cached.clone();
        }

        let license = match self.licenses.lookup_license(name, module) {
            Ok(found) => LicenseName::from_lookup(found),
            Err(e) => {
                tracing::warn!(package = name, error = %e, "license lookup failed");
                LicenseName::unknown()
            }
        };

        self.license_cache.insert(name.to_string(), license.clone());
        license
    }
}
