//! OBJ scene import.
//!
//! Minimal OBJ support: `v`, `vt`, `f`, and `o` records. Each `o` starts a
//! new mesh. Faces are fan-triangulated and their corners expanded into
//! per-mesh vertices, so every emitted face has exactly three indices and
//! every mesh is self-contained.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{ImportedMesh, ImportedScene};
use crate::error::{ExportError, ExportResult};

#[derive(Default)]
struct ObjMesh {
    name: Option<String>,
    positions: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    faces: Vec<Vec<u32>>,
}

impl ObjMesh {
    fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.faces.is_empty()
    }

    fn into_imported(self) -> ImportedMesh {
        // A UV channel is only kept when every expanded vertex got one.
        let has_uvs = !self.uvs.is_empty() && self.uvs.len() == self.positions.len();
        ImportedMesh {
            name: self.name,
            uv_channels: if has_uvs { vec![self.uvs] } else { Vec::new() },
            positions: (!self.positions.is_empty()).then_some(self.positions),
            faces: (!self.faces.is_empty()).then_some(self.faces),
            color_channels: Vec::new(),
        }
    }
}

/// Import an OBJ file into an [`ImportedScene`].
pub fn import_obj(input: &Path) -> ExportResult<ImportedScene> {
    let file = File::open(input).map_err(|e| ExportError::Import {
        message: format!("{:?}: {}", input, e),
    })?;
    let reader = BufReader::new(file);

    // Global attribute pools; OBJ face indices refer into these.
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut tex_coords: Vec<[f32; 2]> = Vec::new();

    let mut meshes: Vec<ObjMesh> = Vec::new();
    let mut current = ObjMesh::default();

    for line in reader.lines() {
        let line = line.map_err(|e| ExportError::Import {
            message: format!("{:?}: {}", input, e),
        })?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[0] {
            "o" if parts.len() >= 2 => {
                if !current.is_empty() {
                    meshes.push(std::mem::take(&mut current));
                }
                current.name = Some(parts[1].to_string());
            }
            "v" if parts.len() >= 4 => {
                let x: f32 = parts[1].parse().unwrap_or(0.0);
                let y: f32 = parts[2].parse().unwrap_or(0.0);
                let z: f32 = parts[3].parse().unwrap_or(0.0);
                positions.push([x, y, z]);
            }
            "vt" if parts.len() >= 3 => {
                let u: f32 = parts[1].parse().unwrap_or(0.0);
                let v: f32 = parts[2].parse().unwrap_or(0.0);
                tex_coords.push([u, v]);
            }
            "f" if parts.len() >= 4 => {
                let face_verts: Vec<(usize, Option<usize>)> = parts[1..]
                    .iter()
                    .filter_map(|v| parse_obj_vertex(v))
                    .collect();

                if face_verts.len() < 3 {
                    continue;
                }

                // Fan triangulation for convex polygons
                for i in 1..face_verts.len() - 1 {
                    let mut face = Vec::with_capacity(3);
                    for &idx in &[0, i, i + 1] {
                        let (vi, vti) = face_verts[idx];

                        face.push(current.positions.len() as u32);
                        current
                            .positions
                            .push(positions.get(vi).copied().unwrap_or([0.0; 3]));

                        if let Some(ti) = vti {
                            current
                                .uvs
                                .push(tex_coords.get(ti).copied().unwrap_or([0.0; 2]));
                        }
                    }
                    current.faces.push(face);
                }
            }
            _ => {}
        }
    }

    if !current.is_empty() {
        meshes.push(current);
    }

    Ok(ImportedScene {
        meshes: meshes.into_iter().map(ObjMesh::into_imported).collect(),
    })
}

/// Parse OBJ vertex reference: "v", "v/vt", "v/vt/vn", or "v//vn"
fn parse_obj_vertex(s: &str) -> Option<(usize, Option<usize>)> {
    let parts: Vec<&str> = s.split('/').collect();

    let vi = parts.first()?.parse::<usize>().ok()?.checked_sub(1)?; // OBJ indices are 1-based

    let vti = parts
        .get(1)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<usize>().ok())
        .and_then(|i| i.checked_sub(1));

    Some((vi, vti))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_obj(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".obj")
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write OBJ");
        file
    }

    #[test]
    fn test_import_obj_triangle() {
        let file = write_obj(
            "v 0 0 0\n\
             v 1 0 0\n\
             v 0 1 0\n\
             vt 0 0\n\
             vt 1 0\n\
             vt 0 1\n\
             f 1/1 2/2 3/3\n",
        );

        let scene = import_obj(file.path()).unwrap();
        assert_eq!(scene.meshes.len(), 1);

        let mesh = &scene.meshes[0];
        assert_eq!(mesh.name, None);
        assert_eq!(
            mesh.positions.as_deref(),
            Some(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]][..])
        );
        assert_eq!(mesh.faces.as_deref(), Some(&[vec![0, 1, 2]][..]));
        assert_eq!(mesh.uv_channels.len(), 1);
        assert_eq!(mesh.uv_channels[0], vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        assert!(mesh.color_channels.is_empty());
    }

    #[test]
    fn test_import_obj_quad_is_triangulated() {
        let file = write_obj(
            "v 0 0 0\n\
             v 1 0 0\n\
             v 1 1 0\n\
             v 0 1 0\n\
             f 1 2 3 4\n",
        );

        let scene = import_obj(file.path()).unwrap();
        let mesh = &scene.meshes[0];

        // Fan: (0,1,2) and (0,2,3), corners expanded per triangle
        assert_eq!(mesh.faces.as_ref().unwrap().len(), 2);
        assert!(mesh.faces.as_ref().unwrap().iter().all(|f| f.len() == 3));
        assert_eq!(mesh.positions.as_ref().unwrap().len(), 6);
    }

    #[test]
    fn test_import_obj_named_objects() {
        let file = write_obj(
            "o first\n\
             v 0 0 0\n\
             v 1 0 0\n\
             v 0 1 0\n\
             f 1 2 3\n\
             o second\n\
             f 3 2 1\n",
        );

        let scene = import_obj(file.path()).unwrap();
        assert_eq!(scene.meshes.len(), 2);
        assert_eq!(scene.meshes[0].name.as_deref(), Some("first"));
        assert_eq!(scene.meshes[1].name.as_deref(), Some("second"));
        assert_eq!(scene.meshes[1].positions.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn test_import_obj_missing_file() {
        let err = import_obj(Path::new("does_not_exist.obj")).unwrap_err();
        assert!(matches!(err, ExportError::Import { .. }));
    }

    #[test]
    fn test_parse_obj_vertex_forms() {
        assert_eq!(parse_obj_vertex("3"), Some((2, None)));
        assert_eq!(parse_obj_vertex("3/7"), Some((2, Some(6))));
        assert_eq!(parse_obj_vertex("3/7/2"), Some((2, Some(6))));
        assert_eq!(parse_obj_vertex("3//2"), Some((2, None)));
        assert_eq!(parse_obj_vertex("0"), None);
        assert_eq!(parse_obj_vertex("x"), None);
    }
}
