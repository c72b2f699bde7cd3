//! The canonical shape model and its validation rules.

use thiserror::Error;

/// One convertible mesh, normalized for serialization.
///
/// Built fresh per source mesh, populated once, validated once, serialized
/// once, then discarded.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Shape {
    /// 2D vertex positions; index = vertex id.
    pub vertices: Vec<[f32; 2]>,
    /// Triangle list; each consecutive triple references vertex ids.
    pub indices: Vec<u32>,
    /// Per-vertex UV coordinates, one inner vector per channel.
    pub uv_channels: Vec<Vec<[f32; 2]>>,
    /// Per-vertex packed colors, one inner vector per channel.
    pub color_channels: Vec<Vec<u32>>,
}

/// Structural errors reported by [`validate_shape`].
#[derive(Debug, Error)]
pub enum ShapeError {
    /// Shape has no vertices.
    #[error("shape has no vertices")]
    NoVertices,

    /// Shape has no indices.
    #[error("shape has no indices")]
    NoIndices,

    /// A UV channel is not aligned with the vertex array.
    #[error("uv channel {channel} has {len} entries, expected {vertex_count}")]
    UvChannelMismatch {
        /// Zero-based channel number.
        channel: usize,
        /// Number of entries the channel actually has.
        len: usize,
        /// Number of vertices in the shape.
        vertex_count: usize,
    },

    /// A color channel is not aligned with the vertex array.
    #[error("color channel {channel} has {len} entries, expected {vertex_count}")]
    ColorChannelMismatch {
        /// Zero-based channel number.
        channel: usize,
        /// Number of entries the channel actually has.
        len: usize,
        /// Number of vertices in the shape.
        vertex_count: usize,
    },
}

/// Check the structural invariants a shape must satisfy before it may be
/// serialized: non-empty vertices and indices, and every channel aligned
/// with the vertex array.
///
/// Index values are not range-checked against the vertex array; consumers
/// get exactly what the source mesh referenced.
pub fn validate_shape(shape: &Shape) -> Result<(), ShapeError> {
    if shape.vertices.is_empty() {
        return Err(ShapeError::NoVertices);
    }
    if shape.indices.is_empty() {
        return Err(ShapeError::NoIndices);
    }

    let vertex_count = shape.vertices.len();

    for (channel, uvs) in shape.uv_channels.iter().enumerate() {
        if uvs.len() != vertex_count {
            return Err(ShapeError::UvChannelMismatch {
                channel,
                len: uvs.len(),
                vertex_count,
            });
        }
    }

    for (channel, colors) in shape.color_channels.iter().enumerate() {
        if colors.len() != vertex_count {
            return Err(ShapeError::ColorChannelMismatch {
                channel,
                len: colors.len(),
                vertex_count,
            });
        }
    }

    Ok(())
}
