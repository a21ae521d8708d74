/// Dependency report core - domain model, traversal services and license policies
///
/// Nothing in here performs I/O directly; import discovery and license lookup
/// are reached through the outbound ports.
pub mod domain;
pub mod policies;
pub mod services;
