use clap::{Parser, ValueEnum};
use squish_core::codec::CodecId;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CodecArg {
    Gzip,
    Zstd,
}

impl From<CodecArg> for CodecId {
    fn from(arg: CodecArg) -> Self {
        match arg {
            CodecArg::Gzip => CodecId::Gzip,
            CodecArg::Zstd => CodecId::Zstd,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about = "Compress files under a directory and report the savings", long_about = None)]
pub struct Cli {
    /// Root directory to walk
    pub root: PathBuf,

    /// Where to deliver the summary report: "-" for stdout, else a file path
    #[arg(long, default_value = "-")]
    pub report_to: String,

    /// Minimum file size in bytes to consider (0 = no minimum)
    #[arg(long, default_value_t = 0)]
    pub threshold: u64,

    /// Reject files whose estimated compression ratio is at or above this bound
    #[arg(long, default_value_t = 0.95)]
    pub max_ratio: f32,

    /// Artifact container format
    #[arg(long, value_enum, default_value_t = CodecArg::Gzip)]
    pub codec: CodecArg,

    /// Compression level (0 = codec default)
    #[arg(long, default_value_t = 0)]
    pub level: i32,

    /// Also append log events to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log per-file decisions at debug verbosity
    #[arg(short, long)]
    pub verbose: bool,
}
