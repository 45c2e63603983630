use crate::codec::CodecId;
use crate::engine;
use crate::error::{Result, SquishError};
use crate::policy::{Outcome, SelectionPolicy};
use crate::summary::{Aggregator, FileReport, RunSummary};
use crate::walk;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

/// Cooperative stop flag, checked between files. The runner owns signal
/// handling and flips this; the core never installs handlers itself.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Minimum original size in bytes; 0 means no minimum.
    pub threshold: u64,
    /// Acceptance bound for the ratio estimate; 0.0 uses the default (0.95).
    pub max_ratio: f32,
    pub codec: CodecId,
    /// Codec level; 0 means the codec default.
    pub level: i32,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            threshold: 0,
            max_ratio: 0.0,
            codec: CodecId::Gzip,
            level: 0,
        }
    }
}

/// One complete walk-and-compress pass over `root`.
///
/// Files are visited sequentially; each gets exactly one outcome and every
/// failure past this point is per-file (logged, recorded, run continues).
/// The only fatal condition is a root that is not an existing directory,
/// raised before any walking begins. Cancellation stops dispatch between
/// files and still yields a summary of whatever was processed.
pub fn sweep(root: &Path, opts: &RunOptions, cancel: &CancelToken) -> Result<RunSummary> {
    if !root.is_dir() {
        return Err(SquishError::InvalidRoot(root.to_path_buf()));
    }
    info!(root = %root.display(), codec = ?opts.codec, "begin compression run");
    Ok(sweep_items(walk::walk_files(root), opts, cancel))
}

fn sweep_items(
    items: impl Iterator<Item = std::result::Result<walk::FileRecord, walk::WalkError>>,
    opts: &RunOptions,
    cancel: &CancelToken,
) -> RunSummary {
    let codec = opts.codec.compressor();
    let policy = SelectionPolicy {
        threshold: opts.threshold,
        max_ratio: opts.max_ratio,
    };
    let mut agg = Aggregator::new();

    for item in items {
        if cancel.is_cancelled() {
            info!("cancellation requested, stopping dispatch");
            break;
        }
        let record = match item {
            Ok(record) => record,
            Err(e) => {
                if let Some(path) = e.path {
                    // Listed file we could not stat: still a visited file,
                    // recorded as failed with nothing measurable.
                    warn!(path = %path.display(), "could not stat: {}", e.source);
                    agg.record(&FileReport {
                        record: walk::FileRecord {
                            path,
                            size: 0,
                            hidden: false,
                        },
                        outcome: Outcome::FailedIo,
                        stored_bytes: 0,
                    });
                } else {
                    // Directory read/descent error: no file was visited.
                    warn!("unreadable entry skipped: {}", e.source);
                }
                continue;
            }
        };

        let report = match policy.decide(&record, codec) {
            Ok(Outcome::Compressed) => match engine::compress_file(&record.path, codec, opts.level)
            {
                Ok(artifact_bytes) => {
                    info!(path = %record.path.display(), size = record.size, artifact_bytes, "compressed");
                    FileReport {
                        outcome: Outcome::Compressed,
                        stored_bytes: artifact_bytes,
                        record,
                    }
                }
                Err(e) => {
                    warn!(path = %record.path.display(), "compression failed: {e}");
                    FileReport {
                        outcome: Outcome::FailedIo,
                        stored_bytes: record.size,
                        record,
                    }
                }
            },
            Ok(outcome) => {
                info!(path = %record.path.display(), ?outcome, "skipped");
                FileReport {
                    outcome,
                    stored_bytes: record.size,
                    record,
                }
            }
            Err(e) => {
                warn!(path = %record.path.display(), "could not evaluate: {e}");
                FileReport {
                    outcome: Outcome::FailedIo,
                    stored_bytes: record.size,
                    record,
                }
            }
        };
        agg.record(&report);
    }

    let summary = agg.finish();
    info!(
        compressed = summary.compressed_files.len(),
        skipped = summary.skipped_files.len(),
        total_bytes = summary.total_bytes,
        remaining_bytes = summary.remaining_bytes,
        saved_pct = summary.saved_pct,
        "compression run complete"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::{FileRecord, WalkError};
    use std::fs;

    #[test]
    fn stat_failure_still_lands_in_the_skipped_list() {
        let dir = tempfile::tempdir().unwrap();
        let data = b"present and fine ".repeat(40);
        fs::write(dir.path().join("ok.txt"), &data).unwrap();

        let items = vec![
            Err(WalkError {
                path: Some(dir.path().join("phantom.txt")),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "stat denied"),
            }),
            Ok(FileRecord {
                path: dir.path().join("ok.txt"),
                size: data.len() as u64,
                hidden: false,
            }),
        ];
        let summary = sweep_items(items.into_iter(), &RunOptions::default(), &CancelToken::new());

        assert_eq!(summary.compressed_files.len(), 1);
        assert_eq!(summary.skipped_files.len(), 1);
        assert!(summary.skipped_files[0].ends_with("phantom.txt"));
        // Nothing measurable for the failed file: conservation holds at size 0.
        assert_eq!(summary.total_bytes, data.len() as u64);
        let artifact = dir.path().join("ok.txt.gz");
        assert_eq!(
            summary.remaining_bytes,
            fs::metadata(&artifact).unwrap().len()
        );
    }

    #[test]
    fn directory_read_errors_touch_no_list() {
        let items: Vec<std::result::Result<FileRecord, WalkError>> = vec![Err(WalkError {
            path: None,
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "opendir denied"),
        })];
        let summary = sweep_items(items.into_iter(), &RunOptions::default(), &CancelToken::new());
        assert!(summary.compressed_files.is_empty());
        assert!(summary.skipped_files.is_empty());
        assert_eq!(summary.total_bytes, 0);
    }
}
