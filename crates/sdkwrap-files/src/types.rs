//! Error types for output writing.

use thiserror::Error;

/// Errors raised while writing generated files.
#[derive(Error, Debug)]
pub enum FilesError {
    /// Output directory does not exist or is not a directory
    #[error("Output directory not found: {path}")]
    DirectoryNotFound {
        /// Requested directory
        path: String,
    },

    /// Generated file name would escape the output directory
    #[error("Invalid output file name: {path}")]
    InvalidPath {
        /// Offending file name
        path: String,
    },

    /// I/O failure on a specific file
    #[error("Failed to {operation} {path}: {source}")]
    Io {
        /// What was being done
        operation: &'static str,
        /// File involved
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl FilesError {
    /// Returns `true` for a missing output directory.
    #[must_use]
    pub const fn is_directory_not_found(&self) -> bool {
        matches!(self, Self::DirectoryNotFound { .. })
    }

    /// Returns `true` for a rejected file name.
    #[must_use]
    pub const fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }

    /// Returns `true` for an I/O failure.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Result alias for output writing.
pub type Result<T> = std::result::Result<T, FilesError>;
