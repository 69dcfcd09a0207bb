//! # File Hashing
//!
//! Streams a byte window of a file through SHA-256 without loading it into
//! memory.
//!
//! ## Window Semantics
//!
//! ```text
//! file:    [0 ............................................. size)
//!                  ▲ offset                  ▲ offset + length
//! window:          [=========================)
//! ```
//!
//! | `length` | `offset` | Window |
//! |----------|----------|--------|
//! | `Some(0)` | any | empty; the file is never opened |
//! | `None` | `None` | whole file |
//! | `None` | `Some(o)` | `[o, EOF)` |
//! | `Some(n)` | `None` | `[0, n)` |
//! | `Some(n)` | `Some(o)` | `[o, o + n)` |
//!
//! A window reaching past EOF covers only the bytes that exist. An offset at
//! or past EOF hashes the empty sequence (the file must still exist).
//!
//! ## Concurrency
//!
//! Each [`FileHasher::hash`] call owns its own file handle and digest
//! context and completes or fails as one unit; nothing is shared between
//! concurrent calls. I/O errors fail the pending call.

use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncReadExt, AsyncSeekExt};

use crate::crypto::{digest, Digest, DigestContext};
use crate::error::{Error, Result};

/// Default read size for streaming: 64 KiB
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Configuration for [`FileHasher`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HasherConfig {
    /// Bytes requested per read
    pub chunk_size: usize,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl HasherConfig {
    /// Check the configuration for values the hasher cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidConfig("chunk_size must be > 0".into()));
        }
        Ok(())
    }
}

/// Hashes byte windows of files
#[derive(Debug, Clone, Default)]
pub struct FileHasher {
    config: HasherConfig,
}

impl FileHasher {
    /// Create a hasher with a validated configuration
    pub fn new(config: HasherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration in use
    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    /// SHA-256 over `[offset, offset + length)` of the file at `path`
    ///
    /// `offset` defaults to 0 and a missing `length` means "to end of file".
    /// See the module docs for the full window table.
    pub async fn hash(
        &self,
        path: impl AsRef<Path>,
        length: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Digest> {
        let path = path.as_ref();

        if length == Some(0) {
            return Ok(digest(b""));
        }

        let offset = offset.unwrap_or(0);
        let mut file = tokio::fs::File::open(path)
            .await
            .map_err(|e| Error::file_io(path, e))?;
        if offset > 0 {
            file.seek(SeekFrom::Start(offset))
                .await
                .map_err(|e| Error::file_io(path, e))?;
        }

        let mut ctx = DigestContext::new();
        let mut buf = vec![0u8; self.config.chunk_size];
        let mut remaining = length;
        let mut total: u64 = 0;

        loop {
            let want = match remaining {
                Some(0) => break,
                Some(r) => r.min(buf.len() as u64) as usize,
                None => buf.len(),
            };

            let n = file
                .read(&mut buf[..want])
                .await
                .map_err(|e| Error::file_io(path, e))?;
            if n == 0 {
                break;
            }

            ctx.update(&buf[..n]);
            total += n as u64;
            if let Some(r) = remaining.as_mut() {
                *r -= n as u64;
            }
            tracing::trace!(path = %path.display(), read = n, total, "hashed chunk");
        }

        let digest = ctx.finalize();
        tracing::debug!(
            path = %path.display(),
            offset,
            ?length,
            bytes = total,
            "hashed file window"
        );
        Ok(digest)
    }
}

/// [`FileHasher::hash`] with the default configuration
pub async fn hash_file(
    path: impl AsRef<Path>,
    length: Option<u64>,
    offset: Option<u64>,
) -> Result<Digest> {
    FileHasher::default().hash(path, length, offset).await
}

/// Read up to `length` bytes starting at `offset`
///
/// Returns fewer bytes, without error, when EOF comes first.
pub fn read_range(path: impl AsRef<Path>, offset: u64, length: u64) -> Result<Vec<u8>> {
    let path = path.as_ref();

    let mut file = std::fs::File::open(path).map_err(|e| Error::file_io(path, e))?;
    file.seek(SeekFrom::Start(offset))
        .map_err(|e| Error::file_io(path, e))?;

    let mut out = Vec::with_capacity(length.min(DEFAULT_CHUNK_SIZE as u64) as usize);
    file.take(length)
        .read_to_end(&mut out)
        .map_err(|e| Error::file_io(path, e))?;
    Ok(out)
}

/// Size of the file at `path` in bytes
pub fn file_length(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let metadata = std::fs::metadata(path).map_err(|e| Error::file_io(path, e))?;
    Ok(metadata.len())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn temp_file(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    fn sample_data(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 31 % 251) as u8).collect()
    }

    #[tokio::test]
    async fn test_whole_file() {
        let data = sample_data(200_000);
        let file = temp_file(&data);

        let d = hash_file(file.path(), None, None).await.unwrap();
        assert_eq!(d, digest(&data));
    }

    #[tokio::test]
    async fn test_zero_length_never_opens_file() {
        let d = hash_file("/definitely/not/a/real/path", Some(0), Some(123))
            .await
            .unwrap();
        assert_eq!(d.to_hex(), EMPTY_SHA256);
    }

    #[tokio::test]
    async fn test_window_matches_read_range() {
        let data = sample_data(10_000);
        let file = temp_file(&data);

        for (offset, length) in [(0u64, 1u64), (17, 100), (4096, 4096), (9_999, 1), (3, 9_997)] {
            let d = hash_file(file.path(), Some(length), Some(offset))
                .await
                .unwrap();
            let bytes = read_range(file.path(), offset, length).unwrap();
            assert_eq!(bytes.len() as u64, length);
            assert_eq!(d, digest(&bytes), "window {}+{}", offset, length);
        }
    }

    #[tokio::test]
    async fn test_offset_without_length_reads_to_eof() {
        let data = sample_data(5_000);
        let file = temp_file(&data);

        let d = hash_file(file.path(), None, Some(1_234)).await.unwrap();
        assert_eq!(d, digest(&data[1_234..]));
    }

    #[tokio::test]
    async fn test_length_without_offset_starts_at_zero() {
        let data = sample_data(5_000);
        let file = temp_file(&data);

        let d = hash_file(file.path(), Some(700), None).await.unwrap();
        assert_eq!(d, digest(&data[..700]));
    }

    #[tokio::test]
    async fn test_window_past_eof_is_truncated() {
        let data = sample_data(1_000);
        let file = temp_file(&data);

        let d = hash_file(file.path(), Some(5_000), Some(900)).await.unwrap();
        assert_eq!(d, digest(&data[900..]));

        let beyond = hash_file(file.path(), Some(10), Some(2_000)).await.unwrap();
        assert_eq!(beyond.to_hex(), EMPTY_SHA256);
    }

    #[tokio::test]
    async fn test_small_chunks_same_digest() {
        let data = sample_data(3_333);
        let file = temp_file(&data);
        let hasher = FileHasher::new(HasherConfig { chunk_size: 7 }).unwrap();

        let d = hasher.hash(file.path(), Some(2_000), Some(11)).await.unwrap();
        assert_eq!(d, digest(&data[11..2_011]));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.bin");

        let result = hash_file(&missing, None, None).await;
        assert!(matches!(result, Err(Error::FileIo { .. })));
    }

    #[tokio::test]
    async fn test_concurrent_hashes_of_same_file() {
        let data = sample_data(100_000);
        let file = temp_file(&data);
        let path = file.path().to_path_buf();

        let tasks: Vec<_> = (0..8u64)
            .map(|i| {
                let path = path.clone();
                tokio::spawn(async move { hash_file(path, Some(10_000), Some(i * 10_000)).await })
            })
            .collect();

        for (i, task) in tasks.into_iter().enumerate() {
            let d = task.await.unwrap().unwrap();
            assert_eq!(d, digest(&data[i * 10_000..(i + 1) * 10_000]));
        }
    }

    #[test]
    fn test_read_range_short_read() {
        let file = temp_file(b"0123456789");

        assert_eq!(read_range(file.path(), 7, 100).unwrap(), b"789");
        assert!(read_range(file.path(), 50, 5).unwrap().is_empty());
        assert!(read_range(file.path(), 0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_file_length() {
        let file = temp_file(&sample_data(4_321));
        assert_eq!(file_length(file.path()).unwrap(), 4_321);

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            file_length(dir.path().join("nope")),
            Err(Error::FileIo { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        assert!(FileHasher::new(HasherConfig { chunk_size: 0 }).is_err());
        assert_eq!(FileHasher::default().config().chunk_size, DEFAULT_CHUNK_SIZE);

        let config: HasherConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, HasherConfig::default());
    }
}
