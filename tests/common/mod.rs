//! Shared utilities for descriptor integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// A descriptor file written to a unique temp directory.
///
/// The directory is removed on drop so parallel tests never collide.
pub struct DescriptorFile {
    dir: PathBuf,
    path: PathBuf,
}

impl DescriptorFile {
    /// Write `contents` to a fresh `descriptor.toml`.
    pub fn new(contents: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("site-config-test-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("descriptor.toml");
        fs::write(&path, contents).unwrap();
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for DescriptorFile {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}
