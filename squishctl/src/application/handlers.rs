use crate::notifiers::ReportSink;
use crate::presentation::cli::Cli;
use squish_core::error::Result;
use squish_core::notify;
use squish_core::run::{CancelToken, RunOptions, sweep};

pub fn handle_sweep(cli: Cli) -> Result<()> {
    let opts = RunOptions {
        threshold: cli.threshold,
        max_ratio: cli.max_ratio,
        codec: cli.codec.into(),
        level: cli.level,
    };
    let cancel = CancelToken::new();

    let summary = sweep(&cli.root, &opts, &cancel)?;
    notify::deliver(&ReportSink, &summary, &cli.report_to);

    eprintln!(
        "sweep: {} compressed, {} skipped, {:.2}% saved",
        summary.compressed_files.len(),
        summary.skipped_files.len(),
        summary.saved_pct
    );
    Ok(())
}
