/// ProgressReporter port for user-facing progress while roots are resolved
///
/// Messages go to a human (stderr spinner, test capture); diagnostics belong
/// in `tracing` instead.
pub trait ProgressReporter {
    /// Reports a one-off status line
    fn report(&self, message: &str);

    /// Reports that root `current` of `total` is being resolved
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error line
    fn report_error(&self, message: &str);

    /// Reports that the run finished
    fn report_completion(&self, message: &str);
}
