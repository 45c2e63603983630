use crate::policy::Outcome;
use crate::walk::FileRecord;
use serde::{Deserialize, Serialize};

/// Per-file result after the engine has run (or the policy skipped it).
#[derive(Clone, Debug)]
pub struct FileReport {
    pub record: FileRecord,
    pub outcome: Outcome,
    /// Bytes this file still occupies: artifact size when compressed,
    /// original size otherwise (failures keep their original size).
    pub stored_bytes: u64,
}

/// Immutable result of one complete run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub compressed_files: Vec<String>,
    pub skipped_files: Vec<String>,
    pub total_bytes: u64,
    pub remaining_bytes: u64,
    pub saved_pct: f64,
}

/// Accumulates finalized reports, one per visited file, in visitation order.
#[derive(Debug, Default)]
pub struct Aggregator {
    compressed_files: Vec<String>,
    skipped_files: Vec<String>,
    total_bytes: u64,
    remaining_bytes: u64,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: &FileReport) {
        let name = report.record.path.display().to_string();
        self.total_bytes += report.record.size;
        self.remaining_bytes += report.stored_bytes;
        if report.outcome.is_compressed() {
            self.compressed_files.push(name);
        } else {
            self.skipped_files.push(name);
        }
    }

    pub fn finish(self) -> RunSummary {
        let saved_pct = if self.total_bytes == 0 {
            0.0
        } else {
            (1.0 - self.remaining_bytes as f64 / self.total_bytes as f64) * 100.0
        };
        RunSummary {
            compressed_files: self.compressed_files,
            skipped_files: self.skipped_files,
            total_bytes: self.total_bytes,
            remaining_bytes: self.remaining_bytes,
            saved_pct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report(name: &str, size: u64, outcome: Outcome, stored: u64) -> FileReport {
        FileReport {
            record: FileRecord {
                path: PathBuf::from(name),
                size,
                hidden: false,
            },
            outcome,
            stored_bytes: stored,
        }
    }

    #[test]
    fn empty_run_reports_zero_saved() {
        let summary = Aggregator::new().finish();
        assert_eq!(summary.total_bytes, 0);
        assert_eq!(summary.remaining_bytes, 0);
        assert_eq!(summary.saved_pct, 0.0);
        assert!(summary.compressed_files.is_empty());
        assert!(summary.skipped_files.is_empty());
    }

    #[test]
    fn every_file_lands_in_exactly_one_list() {
        let mut agg = Aggregator::new();
        agg.record(&report("a.txt", 500, Outcome::Compressed, 100));
        agg.record(&report(".hidden", 100, Outcome::SkippedHidden, 100));
        agg.record(&report("b.gz", 200, Outcome::SkippedAlreadyCompressed, 200));
        agg.record(&report("c.bin", 50, Outcome::SkippedPoorRatio, 50));
        agg.record(&report("d.log", 300, Outcome::FailedIo, 300));

        let summary = agg.finish();
        assert_eq!(summary.compressed_files, ["a.txt"]);
        assert_eq!(summary.skipped_files, [".hidden", "b.gz", "c.bin", "d.log"]);
        assert_eq!(
            summary.compressed_files.len() + summary.skipped_files.len(),
            5
        );
    }

    #[test]
    fn bytes_are_conserved() {
        let mut agg = Aggregator::new();
        agg.record(&report("a", 1000, Outcome::Compressed, 250));
        agg.record(&report("b", 600, Outcome::SkippedPoorRatio, 600));
        agg.record(&report("c", 400, Outcome::FailedIo, 400));

        let summary = agg.finish();
        assert_eq!(summary.total_bytes, 2000);
        // compressed 250 + skipped/failed originals 1000
        assert_eq!(summary.remaining_bytes, 1250);
        let expected = (1.0 - 1250.0 / 2000.0) * 100.0;
        assert!((summary.saved_pct - expected).abs() < 1e-9);
    }
}
