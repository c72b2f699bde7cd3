//! glTF/GLB scene import.

use std::path::Path;

use super::{ImportedMesh, ImportedScene};
use crate::error::{ExportError, ExportResult};

/// Import a glTF/GLB file into an [`ImportedScene`].
///
/// Each document mesh contributes one imported mesh built from its first
/// primitive; additional primitives are skipped with a warning.
pub fn import_gltf(input: &Path) -> ExportResult<ImportedScene> {
    let (document, buffers, _images) = gltf::import(input).map_err(|e| ExportError::Import {
        message: format!("{:?}: {}", input, e),
    })?;

    let mut scene = ImportedScene::default();

    for mesh in document.meshes() {
        let mut primitives = mesh.primitives();
        let Some(primitive) = primitives.next() else {
            tracing::warn!("mesh {:?} has no primitives, skipping", mesh.name());
            continue;
        };
        if primitives.next().is_some() {
            tracing::warn!(
                "mesh {:?} has multiple primitives, only the first is exported",
                mesh.name()
            );
        }

        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let positions: Option<Vec<[f32; 3]>> = reader.read_positions().map(|iter| iter.collect());

        // Index stream chunked into triangles. A trailing short chunk is
        // kept as-is and rejected by the converter.
        let faces: Option<Vec<Vec<u32>>> = reader.read_indices().map(|iter| {
            let indices: Vec<u32> = iter.into_u32().collect();
            indices.chunks(3).map(|c| c.to_vec()).collect()
        });

        let mut uv_channels: Vec<Vec<[f32; 2]>> = Vec::new();
        for set in 0u32.. {
            match reader.read_tex_coords(set) {
                Some(iter) => uv_channels.push(iter.into_f32().collect()),
                None => break,
            }
        }

        let mut color_channels: Vec<Vec<[f32; 4]>> = Vec::new();
        for set in 0u32.. {
            match reader.read_colors(set) {
                Some(iter) => color_channels.push(iter.into_rgba_f32().collect()),
                None => break,
            }
        }

        scene.meshes.push(ImportedMesh {
            name: mesh.name().map(str::to_owned),
            positions,
            faces,
            uv_channels,
            color_channels,
        });
    }

    Ok(scene)
}
