//! Filesystem abstractions used by the mesh loader.
//!
//! Meshes are read through [`FileSystem`] so tests can serve mesh text from
//! memory while the scene reads from disk.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Minimal filesystem trait supporting mesh file retrieval.
///
/// # Examples
/// ```
/// use shadow_mesh::filesystem::{FileSystem, InMemoryFilesystem};
/// let fs = InMemoryFilesystem::default();
/// assert!(fs.read_to_string("mesh1.txt").is_err());
/// ```
pub trait FileSystem {
    /// Reads an entire file into memory.
    fn read_to_string(&self, path: &str) -> Result<String, FileSystemError>;
}

/// Error raised when filesystem operations fail.
#[derive(Debug, Error, PartialEq)]
pub enum FileSystemError {
    /// The requested path could not be found.
    #[error("file not found: {path}")]
    NotFound {
        /// Requested path
        path: String,
    },
    /// The file exists but could not be read.
    #[error("failed to read {path}: {message}")]
    Io {
        /// Requested path
        path: String,
        /// Operating system error text
        message: String,
    },
}

/// Disk-backed filesystem resolving paths against an optional root directory.
///
/// # Examples
/// ```
/// use shadow_mesh::filesystem::{FileSystem, StdFilesystem};
/// let fs = StdFilesystem::with_root("/definitely/not/here");
/// assert!(fs.read_to_string("mesh1.txt").is_err());
/// ```
#[derive(Debug, Default, Clone)]
pub struct StdFilesystem {
    root: Option<PathBuf>,
}

impl StdFilesystem {
    /// Resolves relative paths against `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path),
            None => Path::new(path).to_path_buf(),
        }
    }
}

impl FileSystem for StdFilesystem {
    fn read_to_string(&self, path: &str) -> Result<String, FileSystemError> {
        let resolved = self.resolve(path);
        std::fs::read_to_string(&resolved).map_err(|err| {
            let path = resolved.display().to_string();
            match err.kind() {
                ErrorKind::NotFound => FileSystemError::NotFound { path },
                _ => FileSystemError::Io {
                    path,
                    message: err.to_string(),
                },
            }
        })
    }
}

/// In-memory filesystem intended for tests.
///
/// # Examples
/// ```
/// use shadow_mesh::filesystem::{FileSystem, InMemoryFilesystem};
/// let mut fs = InMemoryFilesystem::default();
/// fs.insert("mesh1.txt", "0\n0\n0\n0\n");
/// assert_eq!(fs.read_to_string("mesh1.txt").unwrap(), "0\n0\n0\n0\n");
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryFilesystem {
    files: HashMap<String, String>,
}

impl InMemoryFilesystem {
    /// Inserts or replaces a file entry.
    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }
}

impl FileSystem for InMemoryFilesystem {
    fn read_to_string(&self, path: &str) -> Result<String, FileSystemError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FileSystemError::NotFound { path: path.into() })
    }
}
