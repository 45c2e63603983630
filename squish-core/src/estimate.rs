use crate::codec::Compressor;
use crate::error::Result;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Upper bound on the bytes sampled for one estimate.
pub const SAMPLE_CAP: u64 = 100_000;

/// Estimate the compression ratio (compressed/original, lower is better)
/// a file would achieve under `codec`, without compressing the whole file.
///
/// Samples up to [`SAMPLE_CAP`] bytes starting at the file midpoint and
/// compresses the sample in memory. An empty sample means there is nothing
/// to measure; 1.0 (incompressible) is returned so the caller rejects the
/// file rather than dividing by zero.
pub fn sample_ratio(path: &Path, size: u64, codec: &dyn Compressor) -> Result<f32> {
    let mut f = File::open(path)?;
    f.seek(SeekFrom::Start(size / 2))?;

    let mut sample = Vec::new();
    f.take(SAMPLE_CAP).read_to_end(&mut sample)?;
    if sample.is_empty() {
        return Ok(1.0);
    }

    let mut compressed = Vec::with_capacity(sample.len());
    codec.compress(&mut &sample[..], &mut compressed, 0)?;
    Ok(compressed.len() as f32 / sample.len() as f32)
}
