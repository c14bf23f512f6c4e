//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use vipera_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ViperaResult,
};

/// In-memory filesystem for testing.
///
/// `write_file` fails when the parent directory was never created — this is
/// what makes the "directories before files" materialization order
/// observable in tests, where `std::fs` would hide the bug on rerun.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Number of recorded directories.
    pub fn directory_count(&self) -> usize {
        self.inner.read().unwrap().directories.len()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ViperaResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ViperaResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

fn lock_error(path: &Path) -> vipera_core::error::ViperaError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "Filesystem lock poisoned".into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_records_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("Payments/Common/Service")).unwrap();
        assert!(fs.exists(Path::new("Payments")));
        assert!(fs.exists(Path::new("Payments/Common")));
        assert!(fs.exists(Path::new("Payments/Common/Service")));
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("Payments/View")).unwrap();
        let count = fs.directory_count();
        fs.create_dir_all(Path::new("Payments/View")).unwrap();
        assert_eq!(fs.directory_count(), count);
    }

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        let result = fs.write_file(Path::new("Payments/View/X.swift"), "x");
        assert!(result.is_err());

        fs.create_dir_all(Path::new("Payments/View")).unwrap();
        fs.write_file(Path::new("Payments/View/X.swift"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("Payments/View/X.swift")).unwrap(), "x");
    }

    #[test]
    fn rewrite_overwrites_previous_content() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("Payments")).unwrap();
        fs.write_file(Path::new("Payments/X.swift"), "first").unwrap();
        fs.write_file(Path::new("Payments/X.swift"), "second").unwrap();
        assert_eq!(
            fs.read_file(Path::new("Payments/X.swift")).unwrap(),
            "second"
        );
    }
}
