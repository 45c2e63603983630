use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One regular file seen by the walker. Flags are derived at visit time;
/// the eventual outcome lives in the per-file report, not here.
#[derive(Clone, Debug)]
pub struct FileRecord {
    pub path: PathBuf,
    pub size: u64,
    /// File name starts with the hidden-file marker.
    pub hidden: bool,
}

/// Enumeration failure. A stat failure on a listed file keeps its path so
/// the run can still account for the file; a directory read/descent error
/// has no file to account for.
#[derive(Debug)]
pub struct WalkError {
    pub path: Option<PathBuf>,
    pub source: std::io::Error,
}

/// Lazily enumerate regular files under `root`, depth-first with entries
/// sorted by name inside each directory so one run is reproducible.
/// Symlinks are not followed; directories themselves produce nothing.
pub fn walk_files(root: &Path) -> impl Iterator<Item = Result<FileRecord, WalkError>> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) if e.file_type().is_file() => Some(record_from(e)),
            Ok(_) => None,
            Err(e) => Some(Err(WalkError {
                path: None,
                source: std::io::Error::new(std::io::ErrorKind::Other, e),
            })),
        })
}

fn record_from(entry: walkdir::DirEntry) -> Result<FileRecord, WalkError> {
    let hidden = entry.file_name().to_string_lossy().starts_with('.');
    match entry.metadata() {
        Ok(md) => Ok(FileRecord {
            size: md.len(),
            hidden,
            path: entry.into_path(),
        }),
        Err(e) => Err(WalkError {
            source: std::io::Error::new(std::io::ErrorKind::Other, e),
            path: Some(entry.into_path()),
        }),
    }
}
