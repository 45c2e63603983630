use super::{CodecId, Compressor};
use crate::error::Result;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::{Read, Write};

pub struct GzipCompressor;

impl Compressor for GzipCompressor {
    fn id(&self) -> CodecId {
        CodecId::Gzip
    }
    fn suffix(&self) -> &'static str {
        ".gz"
    }
    fn magic(&self) -> &'static [u8] {
        &[0x1f, 0x8b]
    }
    fn default_level(&self) -> i32 {
        6
    }
    fn compress(&self, src: &mut dyn Read, dst: &mut dyn Write, level: i32) -> Result<u64> {
        let level = if level <= 0 {
            self.default_level()
        } else {
            level.min(9)
        };
        let mut enc = GzEncoder::new(dst, Compression::new(level as u32));
        let written_uncompressed = std::io::copy(src, &mut enc)?;
        enc.try_finish()?;
        Ok(written_uncompressed)
    }
}
