pub mod entry;
pub mod license_name;
pub mod module_info;
pub mod package;
pub mod package_node;

pub use entry::Entry;
pub use license_name::LicenseName;
pub use module_info::ModuleInfo;
pub use package::PackageName;
pub use package_node::PackageNode;
