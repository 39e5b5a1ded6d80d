//! Error types for router construction.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a router from the filesystem.
///
/// Route building happens once at process startup; every variant aborts the
/// whole build and no partial router is returned.
#[derive(Debug, Error)]
pub enum BuildError {
    /// `dirs` and `exclude_dirs` are mutually exclusive.
    #[error("cannot use both dirs and exclude_dirs; only use one")]
    ConflictingDirFilters,

    /// The scan root does not exist.
    #[error("cannot find routes directory: {0}")]
    RoutesDirNotFound(PathBuf),

    /// The scan root exists but is not a directory.
    #[error("routes path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Strict mode rejected an export name that is not a recognized verb.
    #[error("extraneous export '{name}' detected at {path}")]
    ExtraneousExport {
        /// The module the export came from.
        path: PathBuf,
        /// The offending export name.
        name: String,
    },

    /// Filesystem error during traversal.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The module resolver failed to load a file's exports.
    #[error("failed to load module {path}: {message}")]
    Module {
        /// The module that failed to load.
        path: PathBuf,
        /// Resolver-provided failure message.
        message: String,
    },
}

/// Result type for router construction.
pub type Result<T> = std::result::Result<T, BuildError>;
