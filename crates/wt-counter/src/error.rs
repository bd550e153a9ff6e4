//! Error types for the wt-counter crate.
//!
//! This module provides the [`CountError`] type for errors that can occur
//! while reading, walking, or counting text sources.

use camino::Utf8PathBuf;

/// Errors that can occur during counting operations.
///
/// Counting is all-or-nothing: any error aborts the call and no partial
/// index is returned.
///
/// # Examples
///
/// ```
/// use wt_counter::CountError;
///
/// fn describe(err: &CountError) -> String {
///     match err {
///         CountError::InvalidArgument(msg) => format!("bad input: {msg}"),
///         CountError::NotFound(path) => format!("no such file: {path}"),
///         CountError::Read { path, .. } => format!("read failed: {path}"),
///         CountError::Walk(e) => format!("walk failed: {e}"),
///         CountError::NonUtf8Path(p) => format!("invalid path: {}", p.display()),
///         CountError::ThreadPool(e) => format!("thread pool: {e}"),
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum CountError {
    /// The caller supplied an unusable source (empty path, empty path list,
    /// or a directory where a file was expected).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The file or directory to count does not exist.
    #[error("file not found: {0}")]
    NotFound(Utf8PathBuf),

    /// Failed to read a file, including invalid UTF-8 content.
    #[error("failed to read file {path}: {source}")]
    Read {
        /// The path of the file that couldn't be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to walk a directory.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// A path is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", _0.display())]
    NonUtf8Path(std::path::PathBuf),

    /// The worker thread pool could not be created.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl CountError {
    /// Creates a new [`CountError::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates a new [`CountError::Read`] error.
    ///
    /// An I/O error of kind [`NotFound`](std::io::ErrorKind::NotFound) becomes
    /// [`CountError::NotFound`] instead.
    pub fn read(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::NotFound(path);
        }
        Self::Read { path, source }
    }

    /// Returns the file path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::NotFound(path) | Self::Read { path, .. } => Some(path),
            Self::InvalidArgument(_)
            | Self::Walk(_)
            | Self::NonUtf8Path(_)
            | Self::ThreadPool(_) => None,
        }
    }
}
