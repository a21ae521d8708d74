use super::LicenseName;

/// PackageNode entity - one package in a resolved dependency tree
///
/// A node owns its children exclusively. Children are unique by name: adding a
/// second child with an existing name is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageNode {
    name: String,
    internal: bool,
    license: LicenseName,
    dependencies: Vec<PackageNode>,
    error: Option<String>,
}

impl PackageNode {
    /// Creates a node for a package outside the root's project
    pub fn external(name: impl Into<String>, license: LicenseName) -> Self {
        Self {
            name: name.into(),
            internal: false,
            license,
            dependencies: Vec::new(),
            error: None,
        }
    }

    /// Creates a node for a package belonging to the root's project
    pub fn internal(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            internal: true,
            license: LicenseName::unknown(),
            dependencies: Vec::new(),
            error: None,
        }
    }

    /// Creates a leaf for a package whose imports could not be resolved
    ///
    /// Unresolved nodes are reported as external so the edge still shows up.
    pub fn unresolved(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            internal: false,
            license: LicenseName::unresolved(),
            dependencies: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_internal(&self) -> bool {
        self.internal
    }

    pub fn license(&self) -> &LicenseName {
        &self.license
    }

    pub fn dependencies(&self) -> &[PackageNode] {
        &self.dependencies
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_unresolved(&self) -> bool {
        self.error.is_some()
    }

    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d.name == name)
    }

    /// Appends a child, returning `false` when one with the same name exists
    pub fn add_dependency(&mut self, child: PackageNode) -> bool {
        if self.has_dependency(&child.name) {
            return false;
        }
        self.dependencies.push(child);
        true
    }

    /// Counts unresolved nodes in this subtree, including this one
    pub fn unresolved_count(&self) -> usize {
        usize::from(self.is_unresolved())
            + self
                .dependencies
                .iter()
                .map(PackageNode::unresolved_count)
                .sum::<usize>()
    }
}
