//! SHA-1 digests of file contents and a writer that computes them on the fly.

use std::fmt;
use std::io::{self, Read, Write};
use std::path::Path;
use std::str::FromStr;

use sha1::{Digest as _, Sha1};

use crate::config::{DEFAULT_BUFFER_SIZE, DIGEST_LEN};
use crate::error::{Error, Result};
use crate::io::open_input;

/// SHA-1 digest of a byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Returns the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Returns the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses a 40 character hex string (either case).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDigest`] if the input is not valid hex or does
    /// not decode to exactly 20 bytes.
    pub fn from_hex(value: &str) -> Result<Self> {
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(value, &mut bytes).map_err(|err| Error::InvalidDigest {
            value: value.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self(bytes))
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// Writer adapter that hashes every byte accepted by the inner writer.
///
/// Only the prefix of a buffer the inner writer reports as written is fed to
/// the hasher, so the digest always matches what reached the sink even on
/// short writes.
pub struct HashingWriter<W> {
    inner: W,
    hasher: Sha1,
    written: u64,
}

impl<W: Write> HashingWriter<W> {
    /// Wraps `inner` with a fresh SHA-1 accumulator.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: Sha1::new(),
            written: 0,
        }
    }

    /// Number of bytes written through the adapter so far.
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// Gives access to the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Consumes the adapter, returning the inner writer and the final digest.
    ///
    /// The inner writer is not flushed.
    pub fn finish(self) -> (W, Digest) {
        let digest = Digest(self.hasher.finalize().into());
        (self.inner, digest)
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W> fmt::Debug for HashingWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashingWriter")
            .field("written", &self.written)
            .finish_non_exhaustive()
    }
}

/// Computes the SHA-1 digest of everything `reader` yields.
///
/// Reads in chunks of [`DEFAULT_BUFFER_SIZE`] bytes.
///
/// # Errors
///
/// Returns any error from the underlying reader other than
/// [`io::ErrorKind::Interrupted`], which is retried.
pub fn digest_reader(mut reader: impl Read) -> io::Result<Digest> {
    let mut hasher = Sha1::new();
    let mut buf = vec![0u8; DEFAULT_BUFFER_SIZE];

    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }

    Ok(Digest(hasher.finalize().into()))
}

/// Computes the SHA-1 digest of the file at `path`.
///
/// Used to check that copy, move or transfer code reproduced a fixture byte
/// for byte.
///
/// # Errors
///
/// Returns [`Error::OpenInput`] if the file cannot be opened and
/// [`Error::Read`] if reading it fails.
pub fn digest_file(path: impl AsRef<Path>) -> Result<Digest> {
    let path = path.as_ref();
    let file = open_input(path)?;
    let digest = digest_reader(file).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::trace!(path = %path.display(), %digest, "computed file digest");
    Ok(digest)
}
