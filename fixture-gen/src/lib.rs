//! # fixture-gen
//!
//! Random fixture files for tests of file copy, move and transfer code.
//!
//! [`create_file`] writes a file of the requested size filled with
//! cryptographically random bytes and returns the SHA-1 digest of what was
//! written. After the code under test has copied or moved the fixture,
//! [`digest_file`] recomputes the digest of the result for comparison.
//!
//! The generator is test-only: it is compiled for this crate's unit tests or
//! when the `test-utils` feature is enabled, typically from a
//! `[dev-dependencies]` entry. Digest helpers and the shared
//! [`DEFAULT_BUFFER_SIZE`] are always available.

mod config;
mod digest;
mod error;
mod io;

#[cfg(any(test, feature = "test-utils"))]
pub mod fixture;


pub use config::{DEFAULT_BUFFER_SIZE, DIGEST_LEN, EMPTY_SHA1};
pub use digest::{digest_file, digest_reader, Digest, HashingWriter};
pub use error::{Error, Result};
pub use io::{create_output, open_input};

#[cfg(any(test, feature = "test-utils"))]
pub use fixture::{create_file, write_random};
