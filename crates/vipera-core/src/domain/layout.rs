//! Layout planner: resolves the directory tree and file paths for a module.
//!
//! The planner performs no I/O. It produces the full set of filesystem
//! operations so callers can inspect (or test) the plan before anything is
//! created on disk.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{
    common::RelativePath,
    error::DomainError,
    identity::{ModuleIdentity, Role},
};

/// A planned artifact file: where it goes and which role renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: RelativePath,
    pub role: Role,
}

/// The concrete directory tree and file paths for one module.
///
/// Directories and files are relative to [`Self::root`] (which is
/// `<target dir>/<base name>`). Order is fixed: the directory list is the
/// role table deduplicated (`Endpoint` and `Service` share `Common/Service`),
/// the file list is one entry per role in generation order.
#[derive(Debug, Clone)]
pub struct ModuleLayout {
    root: PathBuf,
    directories: Vec<RelativePath>,
    files: Vec<PlannedFile>,
}

impl ModuleLayout {
    /// Plan the layout for a module rooted at `target_dir`.
    pub fn plan(target_dir: impl AsRef<Path>, identity: &ModuleIdentity) -> Self {
        let root = target_dir.as_ref().join(identity.base_name());

        let mut directories = Vec::new();
        for role in Role::ALL {
            let dir = identity.directory(role);
            if !directories.contains(&dir) {
                directories.push(dir);
            }
        }

        let files = Role::ALL
            .into_iter()
            .map(|role| PlannedFile {
                path: identity.directory(role).join(identity.file_name(role)),
                role,
            })
            .collect();

        Self {
            root,
            directories,
            files,
        }
    }

    /// The module root directory (`<target dir>/<base name>`).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directories to create, relative to the root.
    pub fn directories(&self) -> &[RelativePath] {
        &self.directories
    }

    /// Files to write, relative to the root.
    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    /// Reject plans with duplicate paths — two artifacts writing to the same
    /// file would silently lose one of them.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();

        for dir in &self.directories {
            if !seen.insert(dir.as_path().to_path_buf()) {
                return Err(DomainError::DuplicatePath {
                    path: dir.to_string(),
                });
            }
        }

        for file in &self.files {
            if !seen.insert(file.path.as_path().to_path_buf()) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.to_string(),
                });
            }
        }

        Ok(())
    }
}
