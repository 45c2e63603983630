use crate::error::Result;
use std::io::{Read, Write};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CodecId {
    Gzip,
    Zstd,
}

impl CodecId {
    pub fn compressor(self) -> &'static dyn Compressor {
        match self {
            CodecId::Gzip => &gzip::GzipCompressor,
            CodecId::Zstd => &zstdc::ZstdCompressor,
        }
    }
}

pub trait Compressor: Send + Sync {
    fn id(&self) -> CodecId;
    /// Artifact filename suffix, including the leading dot.
    fn suffix(&self) -> &'static str;
    /// Leading magic bytes of this container format.
    fn magic(&self) -> &'static [u8];
    /// Level used when the caller passes 0.
    fn default_level(&self) -> i32;
    /// Compress `src` into `dst`, returning the number of uncompressed
    /// bytes consumed.
    fn compress(&self, src: &mut dyn Read, dst: &mut dyn Write, level: i32) -> Result<u64>;
}

pub mod gzip;
pub mod zstdc;
