//! Mesh-to-shape conversion.

use e2d_common::{pack_color, Shape};

use crate::error::{ExportError, ExportResult};
use crate::import::ImportedMesh;

/// Convert one imported mesh into a [`Shape`].
///
/// Source order is preserved everywhere: vertex id = array index, and face
/// indices are appended face by face. Positions keep only x and y. Any face
/// without exactly three indices fails the conversion; nothing is returned
/// partially.
pub fn convert_mesh(mesh: &ImportedMesh) -> ExportResult<Shape> {
    let mut shape = Shape::default();

    if let Some(positions) = &mesh.positions {
        shape.vertices.reserve(positions.len());
        shape.vertices.extend(positions.iter().map(|p| [p[0], p[1]]));
    }

    if let Some(faces) = &mesh.faces {
        shape.indices.reserve(faces.len() * 3);
        for (face, indices) in faces.iter().enumerate() {
            if indices.len() != 3 {
                return Err(ExportError::InvalidTopology {
                    face,
                    count: indices.len(),
                });
            }
            shape.indices.extend_from_slice(indices);
        }
    }

    for uvs in &mesh.uv_channels {
        shape.uv_channels.push(uvs.clone());
    }

    for colors in &mesh.color_channels {
        shape.color_channels.push(
            colors
                .iter()
                .map(|c| pack_color(c[0], c[1], c[2], c[3]))
                .collect(),
        );
    }

    Ok(shape)
}
