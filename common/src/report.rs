use std::path::Path;

use tracing::debug;

use crate::error::ReportError;

/// One report generator: a parse, aggregate, render pipeline over a single
/// input file in the working directory.
pub trait Report {
    /// Name used in operator-facing notices, e.g. "single client results".
    fn name(&self) -> &'static str;

    /// Parses the input file in `dir` and writes the chart next to it.
    fn generate(&self, dir: &Path) -> Result<(), ReportError>;
}

/// Runs the reports in order. A missing input file skips that report with a
/// notice and the run continues; any other error aborts the run immediately.
pub fn run_reports(dir: &Path, reports: &[Box<dyn Report>]) -> Result<(), ReportError> {
    for report in reports {
        println!("Plotting {}...", report.name());
        match report.generate(dir) {
            Ok(()) => {}
            Err(ReportError::MissingInput(path)) => {
                debug!("skipping {}: {}", report.name(), path.display());
                println!("No {} found", report.name());
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}
