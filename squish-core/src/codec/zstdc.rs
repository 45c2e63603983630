use super::{CodecId, Compressor};
use crate::error::Result;
use std::io::{Read, Write};

pub struct ZstdCompressor;

impl Compressor for ZstdCompressor {
    fn id(&self) -> CodecId {
        CodecId::Zstd
    }
    fn suffix(&self) -> &'static str {
        ".zst"
    }
    fn magic(&self) -> &'static [u8] {
        &[0x28, 0xb5, 0x2f, 0xfd]
    }
    fn default_level(&self) -> i32 {
        3
    }
    fn compress(&self, src: &mut dyn Read, dst: &mut dyn Write, level: i32) -> Result<u64> {
        let level = if level <= 0 { self.default_level() } else { level };
        let enc = zstd::stream::Encoder::new(dst, level)?;
        let mut w = enc.auto_finish();
        let written_uncompressed = std::io::copy(src, &mut w)?;
        Ok(written_uncompressed)
    }
}
