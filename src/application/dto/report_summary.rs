/// ReportSummary - What a finished report run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportSummary {
    /// Root packages resolved
    pub roots: usize,
    /// Entries handed to the formatter
    pub entries: usize,
    /// Non-root packages that could not be resolved
    pub unresolved: usize,
}

impl std::fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} root(s), {} dependency edge(s), {} unresolved",
            self.roots, self.entries, self.unresolved
        )
    }
}
