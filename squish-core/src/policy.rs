use crate::codec::Compressor;
use crate::error::Result;
use crate::estimate;
use crate::walk::FileRecord;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;

/// Default acceptance bound: reject files expected to shrink by less than 5%.
pub const DEFAULT_MAX_RATIO: f32 = 0.95;

/// Terminal per-file outcome. Set exactly once per visited file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Compressed,
    SkippedHidden,
    SkippedAlreadyCompressed,
    SkippedBelowThreshold,
    SkippedPoorRatio,
    FailedIo,
}

impl Outcome {
    pub fn is_compressed(self) -> bool {
        matches!(self, Outcome::Compressed)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SelectionPolicy {
    /// Minimum original size in bytes; files strictly smaller are skipped.
    pub threshold: u64,
    /// Ratio estimates at or above this bound are rejected.
    /// Zero (or negative) falls back to [`DEFAULT_MAX_RATIO`].
    pub max_ratio: f32,
}

impl SelectionPolicy {
    /// Decide what to do with one file. Checks run in a fixed order and the
    /// first match wins; the cheap name/content/size checks short-circuit
    /// before the ratio estimate touches file data.
    ///
    /// `Outcome::Compressed` here is tentative: the engine finalizes it.
    pub fn decide(&self, record: &FileRecord, codec: &dyn Compressor) -> Result<Outcome> {
        if record.hidden {
            return Ok(Outcome::SkippedHidden);
        }
        if is_artifact(record, codec)? {
            return Ok(Outcome::SkippedAlreadyCompressed);
        }
        if record.size < self.threshold {
            return Ok(Outcome::SkippedBelowThreshold);
        }
        let ratio = estimate::sample_ratio(&record.path, record.size, codec)?;
        if ratio >= self.effective_max_ratio() {
            return Ok(Outcome::SkippedPoorRatio);
        }
        Ok(Outcome::Compressed)
    }

    pub fn effective_max_ratio(&self) -> f32 {
        if self.max_ratio <= 0.0 {
            DEFAULT_MAX_RATIO
        } else {
            self.max_ratio
        }
    }
}

/// Probe the file head for the active container's magic bytes.
fn is_artifact(record: &FileRecord, codec: &dyn Compressor) -> Result<bool> {
    let magic = codec.magic();
    if record.size < magic.len() as u64 {
        return Ok(false);
    }
    let mut head = vec![0u8; magic.len()];
    File::open(&record.path)?.read_exact(&mut head)?;
    Ok(head == magic)
}
