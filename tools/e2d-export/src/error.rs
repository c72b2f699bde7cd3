//! Error types for the export pipeline.

use std::path::PathBuf;

use e2d_common::ShapeError;
use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while exporting shapes.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The importer could not decode the source file.
    #[error("failed to import model: {message}")]
    Import {
        /// Reason reported by the importer.
        message: String,
    },

    /// A source face does not have exactly three indices.
    #[error("face {face} has {count} indices, expected 3")]
    InvalidTopology {
        /// Zero-based face number within the mesh.
        face: usize,
        /// Number of indices the face actually has.
        count: usize,
    },

    /// The converted shape failed structural validation.
    #[error("shape validation failed: {0}")]
    Validation(#[from] ShapeError),

    /// Output file could not be opened or written.
    #[error("failed to write {path:?}: {source}")]
    Io {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
