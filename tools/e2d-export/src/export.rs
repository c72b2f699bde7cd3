//! Batch export: convert, validate, and serialize every mesh in a scene.

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use e2d_common::{validate_shape, write_shape, SHAPE_EXT};

use crate::convert::convert_mesh;
use crate::error::{ExportError, ExportResult};
use crate::import::ImportedScene;

/// Diagnostic switches, passed down the call chain explicitly.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExportOptions {
    /// Log per-step timings.
    pub timers: bool,
    /// Log per-shape size breakdowns.
    pub verbose: bool,
}

/// Output path for one mesh: `<source>.<name>.e2d_shape`.
///
/// `name` is the mesh's own name when it has a non-empty one, otherwise
/// `shape_{index}` (zero-based). Appended byte-wise so non-UTF-8 source
/// paths survive.
pub fn shape_output_path(source: &Path, name: Option<&str>, index: usize) -> PathBuf {
    let name = match name {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => format!("shape_{index}"),
    };

    let mut out = OsString::from(source.as_os_str());
    out.push(".");
    out.push(&name);
    out.push(".");
    out.push(SHAPE_EXT);
    PathBuf::from(out)
}

/// Export every mesh in the scene, in scene order.
///
/// The first failing mesh aborts the run; files already written for
/// earlier meshes are left on disk.
pub fn export_scene(
    scene: &ImportedScene,
    source_path: &Path,
    opts: &ExportOptions,
) -> ExportResult<()> {
    for (index, mesh) in scene.meshes.iter().enumerate() {
        let out_path = shape_output_path(source_path, mesh.name.as_deref(), index);

        if opts.verbose {
            tracing::info!("converting shape {:?}", out_path);
        }

        let convert_start = Instant::now();
        let shape = convert_mesh(mesh)?;
        validate_shape(&shape)?;
        if opts.timers {
            tracing::info!("converted shape in {:?}", convert_start.elapsed());
        }

        let save_start = Instant::now();
        let file = File::create(&out_path).map_err(|e| ExportError::Io {
            path: out_path.clone(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);
        let stats = write_shape(&mut writer, &shape).map_err(|e| ExportError::Io {
            path: out_path.clone(),
            source: e,
        })?;
        writer.flush().map_err(|e| ExportError::Io {
            path: out_path.clone(),
            source: e,
        })?;
        if opts.timers {
            tracing::info!("saved {:?} in {:?}", out_path, save_start.elapsed());
        }

        if opts.verbose {
            tracing::info!(
                "shape info: {} vertices ({} B), {} indices ({} B), {} uv channels ({} B), {} color channels ({} B)",
                shape.vertices.len(),
                stats.vertices_bytes,
                shape.indices.len(),
                stats.indices_bytes,
                shape.uv_channels.len(),
                stats.uvs_bytes,
                shape.color_channels.len(),
                stats.colors_bytes,
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::ImportedMesh;
    use e2d_common::ShapeHeader;

    fn triangle_mesh(name: Option<&str>) -> ImportedMesh {
        ImportedMesh {
            name: name.map(str::to_owned),
            positions: Some(vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]),
            faces: Some(vec![vec![0, 1, 2]]),
            uv_channels: Vec::new(),
            color_channels: Vec::new(),
        }
    }

    #[test]
    fn test_shape_output_path_named() {
        let path = shape_output_path(Path::new("model.obj"), Some("Torso"), 0);
        assert_eq!(path, Path::new("model.obj.Torso.e2d_shape"));
    }

    #[test]
    fn test_shape_output_path_unnamed() {
        let path = shape_output_path(Path::new("model.obj"), None, 1);
        assert_eq!(path, Path::new("model.obj.shape_1.e2d_shape"));

        // An empty name falls back the same way
        let path = shape_output_path(Path::new("model.obj"), Some(""), 1);
        assert_eq!(path, Path::new("model.obj.shape_1.e2d_shape"));
    }

    #[test]
    fn test_export_scene_writes_shape_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let source = dir.path().join("model.obj");

        let scene = ImportedScene {
            meshes: vec![triangle_mesh(Some("Torso"))],
        };

        export_scene(&scene, &source, &ExportOptions::default()).unwrap();

        let out = dir.path().join("model.obj.Torso.e2d_shape");
        let data = std::fs::read(&out).expect("Failed to read shape file");

        let header = ShapeHeader::from_bytes(&data).expect("Failed to parse shape header");
        assert_eq!(header.vertex_count, 3);
        assert_eq!(header.index_count, 3);
        assert_eq!(header.uv_channel_count, 0);
        assert_eq!(header.color_channel_count, 0);
        assert_eq!(data.len(), ShapeHeader::SIZE + 3 * 8 + 3 * 4);
    }

    #[test]
    fn test_export_scene_fail_fast() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let source = dir.path().join("model.obj");

        let mut bad = triangle_mesh(None);
        bad.faces = Some(vec![vec![0, 1, 2, 0]]);

        let scene = ImportedScene {
            meshes: vec![triangle_mesh(None), bad, triangle_mesh(None)],
        };

        let err = export_scene(&scene, &source, &ExportOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ExportError::InvalidTopology { face: 0, count: 4 }
        ));

        // Only the first mesh made it to disk; the third was never reached.
        assert!(dir.path().join("model.obj.shape_0.e2d_shape").exists());
        assert!(!dir.path().join("model.obj.shape_1.e2d_shape").exists());
        assert!(!dir.path().join("model.obj.shape_2.e2d_shape").exists());
    }

    #[test]
    fn test_export_scene_rejects_invalid_shape() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let source = dir.path().join("model.obj");

        // Faces but no positions: converts fine, fails validation.
        let mut mesh = triangle_mesh(None);
        mesh.positions = None;

        let scene = ImportedScene { meshes: vec![mesh] };

        let err = export_scene(&scene, &source, &ExportOptions::default()).unwrap_err();
        assert!(matches!(err, ExportError::Validation(_)));
        assert!(!dir.path().join("model.obj.shape_0.e2d_shape").exists());
    }

    #[test]
    fn test_export_scene_empty_scene() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let source = dir.path().join("model.obj");

        let scene = ImportedScene::default();
        assert!(export_scene(&scene, &source, &ExportOptions::default()).is_ok());
    }
}
