use crate::codec::Compressor;
use crate::error::Result;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Small Write adapter that counts bytes written
struct CountingWriter<W: Write> {
    inner: W,
    n: u64,
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let k = self.inner.write(buf)?;
        self.n += k as u64;
        Ok(k)
    }
    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

/// Sibling artifact path: `<original path><codec suffix>`.
pub fn artifact_path(path: &Path, codec: &dyn Compressor) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(codec.suffix());
    PathBuf::from(name)
}

/// Compress `path` into its sibling artifact and, only once the artifact is
/// fully written and synced, delete the original. Returns the artifact size
/// in bytes.
///
/// On any failure the original is left untouched and the partial artifact is
/// removed best-effort; the error is returned for the caller to record.
pub fn compress_file(path: &Path, codec: &dyn Compressor, level: i32) -> Result<u64> {
    compress_file_with(path, codec, level, |p| fs::remove_file(p))
}

// Removal is injectable so the delete-after-write failure arm stays testable:
// create and remove need the same directory permission, so no fixture can
// fail one without the other.
fn compress_file_with<F>(
    path: &Path,
    codec: &dyn Compressor,
    level: i32,
    remove_original: F,
) -> Result<u64>
where
    F: FnOnce(&Path) -> std::io::Result<()>,
{
    let artifact = artifact_path(path, codec);
    match write_artifact(path, &artifact, codec, level) {
        Ok(artifact_bytes) => {
            if let Err(e) = remove_original(path) {
                // Keep the tree as it was: a surviving original plus a full
                // artifact would be double-counted on the next run.
                let _ = fs::remove_file(&artifact);
                return Err(e.into());
            }
            Ok(artifact_bytes)
        }
        Err(e) => {
            let _ = fs::remove_file(&artifact);
            Err(e)
        }
    }
}

fn write_artifact(
    src: &Path,
    artifact: &Path,
    codec: &dyn Compressor,
    level: i32,
) -> Result<u64> {
    let mut input = File::open(src)?;
    let out = File::create(artifact)?;
    let mut counted = CountingWriter { inner: out, n: 0 };
    codec.compress(&mut input, &mut counted, level)?;
    counted.flush()?;
    counted.inner.sync_all()?;
    Ok(counted.n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CodecId;

    fn gzip() -> &'static dyn Compressor {
        CodecId::Gzip.compressor()
    }

    #[test]
    fn compress_replaces_original_with_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("notes.txt");
        let data = b"meeting notes ".repeat(100);
        fs::write(&p, &data).unwrap();

        let artifact_bytes = compress_file(&p, gzip(), 0).unwrap();

        let artifact = dir.path().join("notes.txt.gz");
        assert!(!p.exists());
        assert!(artifact.exists());
        assert_eq!(fs::metadata(&artifact).unwrap().len(), artifact_bytes);
        assert!(artifact_bytes < data.len() as u64);
    }

    #[test]
    fn missing_source_leaves_no_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("gone.txt");
        assert!(compress_file(&p, gzip(), 0).is_err());
        assert!(!dir.path().join("gone.txt.gz").exists());
    }

    #[cfg(unix)]
    #[test]
    fn failed_write_leaves_original_untouched() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("locked");
        fs::create_dir(&sub).unwrap();
        let p = sub.join("stuck.txt");
        let data = b"cannot touch this ".repeat(50);
        fs::write(&p, &data).unwrap();

        // Read-only directory: artifact creation (and deletion) must fail.
        fs::set_permissions(&sub, fs::Permissions::from_mode(0o555)).unwrap();
        if fs::write(sub.join("rw_check"), b"x").is_ok() {
            // Mode bits are not enforced for this user (e.g. root); the
            // fixture cannot produce the failure, so there is nothing to test.
            fs::set_permissions(&sub, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }
        let res = compress_file(&p, gzip(), 0);
        fs::set_permissions(&sub, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(res.is_err());
        assert!(p.exists());
        assert_eq!(fs::read(&p).unwrap(), data);
        assert!(!sub.join("stuck.txt.gz").exists());
    }

    #[test]
    fn failed_delete_keeps_original_and_discards_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("busy.txt");
        let data = b"still in use ".repeat(60);
        fs::write(&p, &data).unwrap();

        let res = compress_file_with(&p, gzip(), 0, |_| {
            Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "file busy",
            ))
        });

        assert!(res.is_err());
        assert!(p.exists());
        assert_eq!(fs::read(&p).unwrap(), data);
        // The fully written artifact is rolled back with the failure.
        assert!(!dir.path().join("busy.txt.gz").exists());
    }

    #[test]
    fn artifact_path_appends_suffix() {
        let p = Path::new("/tmp/data/report.csv");
        assert_eq!(
            artifact_path(p, gzip()),
            PathBuf::from("/tmp/data/report.csv.gz")
        );
        assert_eq!(
            artifact_path(p, CodecId::Zstd.compressor()),
            PathBuf::from("/tmp/data/report.csv.zst")
        );
    }
}
