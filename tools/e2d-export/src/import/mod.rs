//! Model importers (glTF/GLB, OBJ) and the imported-scene types.
//!
//! The importers normalize source models into [`ImportedScene`], a plain
//! in-memory view of exactly the data the converter needs. Conversion code
//! only ever sees these types, so it can be exercised against synthetic
//! meshes without decoding a real model file.

mod gltf;
mod obj;

use std::path::Path;

use crate::error::{ExportError, ExportResult};

pub use self::gltf::import_gltf;
pub use self::obj::import_obj;

/// A decoded model file: zero or more meshes, in source order.
#[derive(Debug, Default)]
pub struct ImportedScene {
    pub meshes: Vec<ImportedMesh>,
}

/// One source mesh as reported by an importer.
///
/// Positions and faces are optional and channels may be empty; absence is
/// not an error at this level. The shape validator decides later what is
/// fatal.
#[derive(Debug, Default, Clone)]
pub struct ImportedMesh {
    /// Mesh name, if the source format carries one.
    pub name: Option<String>,
    /// 3D positions; z is dropped during conversion.
    pub positions: Option<Vec<[f32; 3]>>,
    /// Faces as per-face index lists. The importers emit triangles; the
    /// converter rejects anything else.
    pub faces: Option<Vec<Vec<u32>>>,
    /// Per-vertex UV channels.
    pub uv_channels: Vec<Vec<[f32; 2]>>,
    /// Per-vertex RGBA color channels.
    pub color_channels: Vec<Vec<[f32; 4]>>,
}

/// Import a model file, dispatching on its extension.
pub fn import_scene(path: &Path) -> ExportResult<ImportedScene> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "gltf" | "glb" => import_gltf(path),
        "obj" => import_obj(path),
        _ => Err(ExportError::Import {
            message: format!(
                "unsupported model format: {:?} (use .obj, .gltf, or .glb)",
                path
            ),
        }),
    }
}
