/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) describe the infrastructure the report core
/// relies on: import discovery, license lookup, output encoding and progress.
pub mod outbound;
