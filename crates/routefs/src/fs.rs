//! The filesystem boundary.

use std::io;
use std::path::Path;

/// Synchronous filesystem primitives consumed by the build.
///
/// Listing order is whatever the underlying filesystem returns; no lexical
/// sort is implied.
pub trait Filesystem {
    /// Whether the path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Whether the path is a directory.
    fn is_directory(&self, path: &Path) -> bool;

    /// Lists a directory's entry names, in filesystem order.
    fn list_directory(&self, path: &Path) -> io::Result<Vec<String>>;
}

/// The `std::fs`-backed filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_directory(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}
