//! Shared helpers for fixture generation tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Isolated scratch directory for one test
pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnvironment {
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        Self { temp_dir }
    }

    pub fn temp_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Create a file with the given content and return its path
    pub fn create_test_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn read_file(&self, name: &str) -> std::io::Result<Vec<u8>> {
        std::fs::read(self.temp_path(name))
    }
}

pub fn assert_file_exists<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    assert!(path.exists(), "File does not exist: {}", path.display());
}

pub fn assert_file_not_exists<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    assert!(!path.exists(), "File should not exist: {}", path.display());
}

/// Assert `content` is `chunk` repeated a whole number of times
pub fn assert_whole_chunks(content: &[u8], chunk: &[u8]) {
    assert!(!chunk.is_empty());
    assert_eq!(
        content.len() % chunk.len(),
        0,
        "Content length {} is not a multiple of chunk length {}",
        content.len(),
        chunk.len()
    );
    for (index, piece) in content.chunks(chunk.len()).enumerate() {
        assert_eq!(piece, chunk, "Chunk {index} differs from the pattern");
    }
}
