// src/fs/mock.rs

use super::FileSystem;
use anyhow::{Result, anyhow};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory filesystem for tests: a set of file paths, with parent
/// directories implied. `canonicalize` returns paths unchanged, so tests
/// should use absolute paths.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>) {
        let mut files = self.files.lock().unwrap();
        files.insert(path.as_ref().to_path_buf());
    }

    fn is_implied_dir(&self, files: &BTreeSet<PathBuf>, path: &Path) -> bool {
        files.iter().any(|f| f.starts_with(path) && f != path)
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.contains(path) || self.is_implied_dir(&files, path)
    }

    fn is_file(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.contains(path)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        if self.exists(path) {
            Ok(path.to_path_buf())
        } else {
            Err(anyhow!("no such path: {:?}", path))
        }
    }
}
