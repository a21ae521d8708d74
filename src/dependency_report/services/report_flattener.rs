use crate::dependency_report::domain::{Entry, PackageNode};

/// ReportFlattener service turning a package tree into report entries
///
/// Walk order: all direct children of a node are emitted first, then each
/// child is descended into, in child order. Internal packages are walked
/// through but never emitted. The result is deterministic for a given tree.
pub struct ReportFlattener;

impl ReportFlattener {
    /// Flattens the tree below `root` into one entry per external import edge
    pub fn flatten(root: &PackageNode) -> Vec<Entry> {
        let mut entries = Vec::new();
        Self::collect(root, &mut entries);
        entries
    }

    fn collect(node: &PackageNode, entries: &mut Vec<Entry>) {
        entries.extend(
            node.dependencies()
                .iter()
                .filter(|dep| !dep.is_internal())
                .map(|dep| Entry::new(node.name(), dep.name(), dep.license().as_str())),
        );

        for dep in node.dependencies() {
            Self::collect(dep, entries);
        }
    }
}
