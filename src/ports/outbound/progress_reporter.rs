/// ProgressReporter port for diagnostics during an audit
///
/// This port abstracts progress reporting (e.g., to stderr) so that
/// diagnostics never mix with the per-repository outcome lines.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a long-running activity (e.g. repository listing)
    ///
    /// The activity indicator stays visible until the next call to any
    /// other reporting method.
    fn report_activity(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
