use crate::dependency_report::domain::ModuleInfo;
use crate::shared::Result;

/// Direct imports of one package plus its classification relative to a root
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedImports {
    /// Regular imports, in discovery order
    pub imports: Vec<String>,
    /// Imports only pulled in by the package's tests
    pub test_imports: Vec<String>,
    /// Whether the package belongs to the same project/module as the root
    pub internal: bool,
    /// Owning module, when the resolver knows it
    pub module: Option<ModuleInfo>,
}

impl ResolvedImports {
    pub fn new(imports: Vec<String>, internal: bool) -> Self {
        Self {
            imports,
            test_imports: Vec::new(),
            internal,
            module: None,
        }
    }

    pub fn with_test_imports(mut self, test_imports: Vec<String>) -> Self {
        self.test_imports = test_imports;
        self
    }

    pub fn with_module(mut self, module: ModuleInfo) -> Self {
        self.module = Some(module);
        self
    }
}

/// ImportResolver port for discovering the import graph
///
/// This port abstracts the mechanism that, given a package identifier,
/// returns its direct imports and whether it is part of the root's project.
pub trait ImportResolver {
    /// Resolves the direct imports of `identifier`
    ///
    /// # Arguments
    /// * `identifier` - Package to resolve
    /// * `root` - Root identifier of the current resolution, used to decide
    ///   whether `identifier` is internal
    ///
    /// # Errors
    /// Returns an error if the package cannot be located or loaded
    fn resolve_imports(&self, identifier: &str, root: &str) -> Result<ResolvedImports>;
}
