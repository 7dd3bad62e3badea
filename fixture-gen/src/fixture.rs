//! Random fixture files for tests.
//!
//! Only compiled for unit tests or with the `test-utils` feature, so release
//! builds of code depending on this crate never carry the generator.

use std::io::{self, Write};
use std::path::Path;

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

use crate::config::DEFAULT_BUFFER_SIZE;
use crate::digest::{Digest, HashingWriter};
use crate::error::{Error, Result};
use crate::io::create_output;

/// Writes `size` random bytes to a new file at `path` and returns their
/// SHA-1 digest.
///
/// An existing file is truncated. Data is produced and written in chunks of
/// [`DEFAULT_BUFFER_SIZE`] bytes, the last chunk holding the remainder; a zero
/// `size` yields an empty file. The file is synced to disk before returning.
///
/// # Errors
///
/// - [`Error::EntropyUnavailable`] if the random generator cannot be seeded
/// - [`Error::CreateOutput`] if the file cannot be created
/// - [`Error::Write`] if writing, flushing or syncing fails
///
/// On error the file may be missing, empty or partially written.
pub fn create_file(path: impl AsRef<Path>, size: u64) -> Result<Digest> {
    let path = path.as_ref();
    let mut rng = secure_rng()?;

    let file = create_output(path)?;
    let write_failed = |source: io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut out = HashingWriter::new(file);
    fill_random(&mut out, size, &mut rng).map_err(write_failed)?;
    out.flush().map_err(write_failed)?;

    let (file, digest) = out.finish();
    file.sync_all().map_err(write_failed)?;

    tracing::debug!(path = %path.display(), size, %digest, "fixture file written");
    Ok(digest)
}

/// Writes `size` random bytes to `writer` and returns their SHA-1 digest.
///
/// Same chunking and randomness as [`create_file`], for sinks other than a
/// file on disk. The writer is flushed before returning.
///
/// # Errors
///
/// - [`Error::EntropyUnavailable`] if the random generator cannot be seeded
/// - [`Error::Io`] if writing or flushing fails
pub fn write_random<W: Write>(writer: W, size: u64) -> Result<Digest> {
    let mut rng = secure_rng()?;

    let mut out = HashingWriter::new(writer);
    fill_random(&mut out, size, &mut rng)?;
    out.flush()?;

    let (_, digest) = out.finish();
    Ok(digest)
}

/// Seeds a fresh CSPRNG from the operating system for a single call.
fn secure_rng() -> Result<StdRng> {
    StdRng::from_rng(OsRng).map_err(|source| Error::EntropyUnavailable { source })
}

/// Streams `size` bytes from `rng` into `out`, one chunk per write.
pub(crate) fn fill_random<W, R>(out: &mut W, size: u64, rng: &mut R) -> io::Result<()>
where
    W: Write,
    R: RngCore,
{
    let capacity = usize::try_from(size).map_or(DEFAULT_BUFFER_SIZE, |s| s.min(DEFAULT_BUFFER_SIZE));
    let mut buf = vec![0u8; capacity];

    for len in chunk_lengths(size, DEFAULT_BUFFER_SIZE) {
        let chunk = &mut buf[..len];
        rng.fill_bytes(chunk);
        out.write_all(chunk)?;
    }

    Ok(())
}

/// Splits `size` into full `chunk_size` chunks followed by the remainder.
///
/// Never yields an empty chunk.
pub(crate) fn chunk_lengths(size: u64, chunk_size: usize) -> impl Iterator<Item = usize> {
    debug_assert!(chunk_size > 0, "chunk size must be non-zero");

    let mut remaining = size;
    std::iter::from_fn(move || {
        if remaining == 0 {
            return None;
        }
        // Bounded by chunk_size, so the cast back to usize is lossless
        let len = remaining.min(chunk_size as u64);
        remaining -= len;
        Some(len as usize)
    })
}
