//! e2d-export library
//!
//! Provides model import and shape conversion for the `e2d-export` binary
//! and for other tools that need to emit `.e2d_shape` files.

pub mod convert;
pub mod error;
pub mod export;
pub mod import;

// Re-export the conversion entry points
pub use convert::convert_mesh;
pub use error::{ExportError, ExportResult};
pub use export::{export_scene, shape_output_path, ExportOptions};
pub use import::{import_scene, ImportedMesh, ImportedScene};
