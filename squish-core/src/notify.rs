use crate::error::Result;
use crate::summary::RunSummary;
use tracing::{error, info};

/// Delivery transport for the run report. Implementations live with the
/// runner (stdout, file, mail gateway); the core only hands them a summary
/// and a destination address.
pub trait Notifier {
    fn notify(&self, summary: &RunSummary, to: &str) -> Result<()>;
}

/// Human-readable report: compressed list, skipped list, percent saved.
pub fn render_report(summary: &RunSummary) -> String {
    let mut out = String::from("The compression run has finished.\n\ncompressed:\n");
    for name in &summary.compressed_files {
        out.push_str("  ");
        out.push_str(name);
        out.push('\n');
    }
    out.push_str("\nskipped:\n");
    for name in &summary.skipped_files {
        out.push_str("  ");
        out.push_str(name);
        out.push('\n');
    }
    out.push_str(&format!(
        "\ntotal space saved is {:.2} percent\n",
        summary.saved_pct
    ));
    out
}

/// Best-effort delivery: failures are logged and swallowed, never escalated.
pub fn deliver(notifier: &dyn Notifier, summary: &RunSummary, to: &str) {
    match notifier.notify(summary, to) {
        Ok(()) => info!(to, "summary delivered"),
        Err(e) => error!(to, "unable to deliver summary: {e}"),
    }
}
