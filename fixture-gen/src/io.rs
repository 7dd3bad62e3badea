//! File opening helpers that attach the offending path to errors.

use std::fs::File;
use std::path::Path;

use crate::error::{Error, Result};

/// Opens an existing file for reading.
///
/// # Errors
///
/// Returns [`Error::OpenInput`] if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| Error::OpenInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates the file at `path`, truncating it if it already exists.
///
/// Unlike a CLI output, an existing destination is always overwritten: a
/// fixture is regenerated from scratch on every call.
///
/// # Errors
///
/// Returns [`Error::CreateOutput`] if the file cannot be created, e.g. the
/// parent directory is missing or not writable.
pub fn create_output(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })
}
