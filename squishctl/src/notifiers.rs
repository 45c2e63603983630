use squish_core::error::Result;
use squish_core::notify::{Notifier, render_report};
use squish_core::summary::RunSummary;
use std::fs;
use std::io::Write;

/// Delivers the run report to stdout (address `-`) or to a file path.
/// Mail-gateway style transports would slot in behind the same trait.
pub struct ReportSink;

impl Notifier for ReportSink {
    fn notify(&self, summary: &RunSummary, to: &str) -> Result<()> {
        let report = render_report(summary);
        if to == "-" {
            std::io::stdout().lock().write_all(report.as_bytes())?;
        } else {
            fs::write(to, report)?;
        }
        Ok(())
    }
}
