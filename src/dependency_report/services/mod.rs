mod report_flattener;
mod tree_builder;

pub use report_flattener::ReportFlattener;
pub use tree_builder::{DependencyTree, TreeOptions};
