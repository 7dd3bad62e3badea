use std::fs;
use std::path::PathBuf;

use fixture_gen::{create_file, digest_file, Digest};

/// Scratch directory holding generated fixture files.
pub struct Workspace {
    root_dir: tempfile::TempDir,
}

impl Workspace {
    /// Create an empty workspace
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            root_dir: tempfile::TempDir::new().unwrap(),
        }
    }

    /// Get full path for a file in the workspace
    pub fn path(&self, name: &str) -> PathBuf {
        self.root_dir.path().join(name)
    }

    /// Generate a random fixture file and return its digest
    ///
    /// # Panics
    ///
    /// Panics if the fixture cannot be written.
    pub fn generate(&self, name: &str, size: u64) -> Digest {
        create_file(self.path(name), size)
            .unwrap_or_else(|err| panic!("failed to generate {name}: {err}"))
    }

    /// Size of a file in the workspace
    pub fn len(&self, name: &str) -> u64 {
        fs::metadata(self.path(name)).unwrap().len()
    }

    /// Assert that a file has the given size and digest
    pub fn assert_file(&self, name: &str, size: u64, digest: &Digest) {
        assert_eq!(self.len(name), size, "unexpected size for {name}");
        assert_eq!(
            &digest_file(self.path(name)).unwrap(),
            digest,
            "digest mismatch for {name}"
        );
    }
}
