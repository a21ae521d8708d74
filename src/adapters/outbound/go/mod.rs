/// Go toolchain adapters
mod go_list_resolver;

pub use go_list_resolver::GoListResolver;
