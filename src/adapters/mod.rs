/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: the `go list` import
/// resolver, license lookups, report formatters, the output sink and the
/// progress display.
pub mod outbound;
