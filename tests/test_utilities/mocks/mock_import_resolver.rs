use std::cell::RefCell;
use std::collections::HashMap;
use go_dep_report::prelude::*;

/// Mock ImportResolver serving a fixed import graph
#[derive(Default)]
pub struct MockImportResolver {
    pub packages: HashMap<String, ResolvedImports>,
    pub calls: RefCell<Vec<String>>,
}

impl MockImportResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_internal(self, name: &str, imports: &[&str]) -> Self {
        self.with_package(name, imports, true)
    }

    pub fn with_external(self, name: &str, imports: &[&str]) -> Self {
        self.with_package(name, imports, false)
    }

    pub fn with_test_imports(mut self, name: &str, test_imports: &[&str]) -> Self {
        if let Some(resolved) = self.packages.remove(name) {
            let tests = test_imports.iter().map(|s| s.to_string()).collect();
            self.packages
                .insert(name.to_string(), resolved.with_test_imports(tests));
        }
        self
    }

    fn with_package(mut self, name: &str, imports: &[&str], internal: bool) -> Self {
        let imports = imports.iter().map(|s| s.to_string()).collect();
        self.packages
            .insert(name.to_string(), ResolvedImports::new(imports, internal));
        self
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.as_str() == name).count()
    }
}

impl ImportResolver for MockImportResolver {
    fn resolve_imports(&self, identifier: &str, _root: &str) -> Result<ResolvedImports> {
        self.calls.borrow_mut().push(identifier.to_string());
        self.packages
            .get(identifier)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("cannot find package \"{}\"", identifier))
    }
}
